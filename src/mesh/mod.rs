//! Mesh-topology variables and the state the checks accumulate about them.
//!
//! - [`MeshVariable`]: a discovered mesh with its raw UGRID attributes
//! - [`MeshContext`]: per-mesh record enriched by the check stages
//! - [`MeshRegistry`]: identity-keyed contexts for one validation run
//! - [`discover_meshes`]: finds `cf_role = "mesh_topology"` variables

pub mod attributes;
pub mod context;
pub mod id;
pub mod registry;

pub use attributes::{
    ConnectivityKind, MeshAttributes, MeshVariable, OrderingDimension, UgridAttribute,
};
pub use context::{ContextKey, MeshContext};
pub use id::MeshId;
pub use registry::MeshRegistry;

use crate::dataset::DatasetView;
use attributes::MESH_TOPOLOGY_ROLE;

/// Returns every variable whose `cf_role` is `mesh_topology`, in variable-name order.
pub fn discover_meshes(dataset: &dyn DatasetView) -> Vec<MeshVariable> {
    dataset
        .variable_names()
        .into_iter()
        .filter_map(|name| dataset.variable(name))
        .filter(|var| {
            var.attribute("cf_role")
                .and_then(|role| role.as_text())
                .is_some_and(|role| role.trim() == MESH_TOPOLOGY_ROLE)
        })
        .enumerate()
        .map(|(index, var)| MeshVariable::from_variable(MeshId::from_index(index), var))
        .collect()
}
