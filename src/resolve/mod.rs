//! Resolvers shared by the check stages.
//!
//! Both return `Result` and write what they derive into the mesh context;
//! stages decide how a failure is scored.

pub mod dimension;
pub mod shape;

pub use dimension::require_ordering_dimension;
pub use shape::{Orientation, resolve_connectivity_shape};
