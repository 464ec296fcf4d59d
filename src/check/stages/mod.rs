//! The six per-mesh check stages.
//!
//! Every stage has the [`StageFn`](crate::check::stage::StageFn) signature
//! and returns exactly one result; failures inside a stage become messages.

pub mod adjacency;
pub mod connectivity;
pub mod coordinates;
pub mod node_coordinates;
pub mod topology;

pub use adjacency::{
    check_edge_face_connectivity, check_face_edge_connectivity, check_face_face_connectivity,
};
pub use connectivity::check_connectivity_attributes;
pub use coordinates::{check_element_coordinates, check_ordering_dimension};
pub use node_coordinates::check_node_coordinates;
pub use topology::check_topology_dimension;
