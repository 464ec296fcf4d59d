//! Mesh context registry for a single validation run.

use crate::mesh::attributes::MeshVariable;
use crate::mesh::context::MeshContext;
use crate::mesh::id::MeshId;
use std::collections::BTreeMap;

/// Maps mesh identity to its [`MeshContext`].
///
/// Entries are created on first access and never removed; a registry lives
/// for one run. Keys are [`MeshId`]s, so two meshes sharing a name still get
/// separate contexts.
#[derive(Clone, Debug, Default)]
pub struct MeshRegistry {
    contexts: BTreeMap<MeshId, MeshContext>,
}

impl MeshRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mesh's context, seeding it from the raw attributes on first access.
    pub fn get(&mut self, mesh: &MeshVariable) -> &mut MeshContext {
        self.contexts
            .entry(mesh.id())
            .or_insert_with(|| MeshContext::seed(mesh))
    }

    /// Read-only lookup by id.
    pub fn context(&self, mesh: MeshId) -> Option<&MeshContext> {
        self.contexts.get(&mesh)
    }

    /// Number of meshes seen so far.
    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    /// Contexts ordered by mesh id.
    pub fn iter(&self) -> impl Iterator<Item = (MeshId, &MeshContext)> {
        self.contexts.iter().map(|(id, ctx)| (*id, ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::AttributeValue;
    use crate::mesh::attributes::{MeshAttributes, UgridAttribute};

    #[test]
    fn contexts_are_created_lazily_and_reused() {
        let mesh = MeshVariable::new(MeshId::from_index(0), "mesh", MeshAttributes::new());
        let mut registry = MeshRegistry::new();
        assert!(registry.context(mesh.id()).is_none());

        registry.get(&mesh).set_topology_dimension(2);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&mesh).topology_dimension(), Some(2));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn same_name_meshes_keep_separate_contexts() {
        let mut attrs = MeshAttributes::new();
        attrs.insert(UgridAttribute::TopologyDimension, AttributeValue::Int(1));
        let first = MeshVariable::new(MeshId::from_index(0), "mesh", attrs.clone());
        let second = MeshVariable::new(MeshId::from_index(1), "mesh", attrs);

        let mut registry = MeshRegistry::new();
        registry.get(&first).set_topology_dimension(1);
        assert_eq!(registry.get(&second).topology_dimension(), None);
        assert_eq!(registry.len(), 2);
    }
}
