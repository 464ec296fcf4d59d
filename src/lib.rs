//! # ugrid-checker
//!
//! ugrid-checker validates that the mesh-topology metadata of a
//! self-describing array dataset conforms to the UGRID conventions, and
//! reports a graded result per check rather than a single pass/fail.
//!
//! ## Features
//! - An ordered, explicitly validated pipeline of six check stages per mesh
//! - Per-mesh context carrying derived facts (`nedges`, `nfaces`, ...) between stages
//! - Connectivity orientation detection (regular vs non-standard axis order)
//! - Failure-tolerant: a missing or broken attribute lowers a score, never aborts the run
//! - A read-only [`DatasetView`](dataset::DatasetView) seam with an in-memory,
//!   JSON-deserializable implementation
//!
//! ## Usage
//!
//! ```rust
//! use ugrid_checker::prelude::*;
//!
//! let ds = InMemoryDataset::new()
//!     .with_dimension("nnodes", 3)
//!     .with_dimension("nedges", 2)
//!     .with_dimension("two", 2)
//!     .with_variable(
//!         Variable::new("mesh")
//!             .with_attribute("cf_role", "mesh_topology")
//!             .with_attribute("topology_dimension", 1)
//!             .with_attribute("node_coordinates", "x")
//!             .with_attribute("edge_node_connectivity", "edges"),
//!     )
//!     .with_variable(Variable::new("x").with_dimensions(["nnodes"]))
//!     .with_variable(Variable::new("edges").with_dimensions(["nedges", "two"]));
//!
//! let report = UgridChecker::new().check_dataset(&ds);
//! assert!(report.failures().next().is_none());
//! ```
//!
//! ## Not implemented
//! Volume (3-D) connectivity has no validation rule. It is reported with
//! [`UgridError::Unsupported`](ugrid_error::UgridError::Unsupported) rather
//! than being scored as invalid.

pub mod check;
pub mod dataset;
pub mod debug_invariants;
pub mod mesh;
pub mod resolve;
pub mod ugrid_error;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::check::{
        CheckLevel, CheckOptions, CheckReport, CheckResult, Stage, UgridChecker,
        UnsupportedHandling,
    };
    pub use crate::dataset::{AttributeValue, DatasetView, Dimension, InMemoryDataset, Variable};
    pub use crate::mesh::{
        ConnectivityKind, ContextKey, MeshContext, MeshId, MeshRegistry, MeshVariable,
        UgridAttribute, discover_meshes,
    };
    pub use crate::resolve::Orientation;
    pub use crate::ugrid_error::UgridError;
}
