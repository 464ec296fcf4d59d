//! Per-mesh mutable record shared by the check stages.
//!
//! A context starts as a copy of the mesh's raw attributes and is enriched
//! as stages run. Derived facts are written once and read by later stages;
//! [`ContextKey`] names each of them so a stage can declare what it touches.

use crate::dataset::{AttributeValue, Dimension};
use crate::debug_invariants::DebugInvariants;
use crate::mesh::attributes::{
    ConnectivityKind, MeshAttributes, MeshVariable, NEDGES, NFACES, OrderingDimension,
    UgridAttribute,
};
use crate::mesh::id::MeshId;
use crate::ugrid_error::UgridError;
use serde::Serialize;
use std::fmt;

/// Derived facts a stage can write into a [`MeshContext`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ContextKey {
    /// Validated `topology_dimension` (1, 2 or 3).
    TopologyDimension,
    /// Edge count dimension, set once edge connectivity validates.
    NEdges,
    /// Face count dimension, set once face connectivity validates.
    NFaces,
    /// Dimension named by `edge_dimension`.
    EdgeDimension,
    /// Dimension named by `face_dimension`.
    FaceDimension,
    /// Node coordinate names that did not resolve.
    UnresolvedNodeCoordinates,
}

impl ContextKey {
    /// Count-dimension key derived from a connectivity kind.
    pub const fn count_for(kind: ConnectivityKind) -> Option<ContextKey> {
        match kind {
            ConnectivityKind::Edge => Some(ContextKey::NEdges),
            ConnectivityKind::Face => Some(ContextKey::NFaces),
            ConnectivityKind::Volume => None,
        }
    }

    /// Key written by the ordering-dimension resolver.
    pub const fn ordering_for(dimension: OrderingDimension) -> ContextKey {
        match dimension {
            OrderingDimension::Edge => ContextKey::EdgeDimension,
            OrderingDimension::Face => ContextKey::FaceDimension,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ContextKey::TopologyDimension => "topology_dimension",
            ContextKey::NEdges => NEDGES,
            ContextKey::NFaces => NFACES,
            ContextKey::EdgeDimension => "edge_dimension",
            ContextKey::FaceDimension => "face_dimension",
            ContextKey::UnresolvedNodeCoordinates => "unresolved_node_coordinates",
        }
    }
}

impl fmt::Display for ContextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mutable attribute record for one mesh during one validation run.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshContext {
    mesh: MeshId,
    name: String,
    attributes: MeshAttributes,
    topology_dimension: Option<u8>,
    nedges: Option<Dimension>,
    nfaces: Option<Dimension>,
    edge_dimension: Option<Dimension>,
    face_dimension: Option<Dimension>,
    unresolved_node_coordinates: Vec<String>,
}

impl MeshContext {
    /// Seeds a context from the mesh's raw attributes. Nothing is derived yet.
    pub fn seed(mesh: &MeshVariable) -> Self {
        Self {
            mesh: mesh.id(),
            name: mesh.name().to_string(),
            attributes: mesh.attributes().clone(),
            topology_dimension: None,
            nedges: None,
            nfaces: None,
            edge_dimension: None,
            face_dimension: None,
            unresolved_node_coordinates: Vec::new(),
        }
    }

    #[inline]
    pub fn mesh(&self) -> MeshId {
        self.mesh
    }

    /// Name of the mesh variable.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw attribute lookup. Absence is a normal outcome.
    pub fn attribute(&self, attr: UgridAttribute) -> Option<&AttributeValue> {
        self.attributes.get(&attr)
    }

    /// The validated topology dimension, once stage 1 has run.
    #[inline]
    pub fn topology_dimension(&self) -> Option<u8> {
        self.topology_dimension
    }

    /// The raw `topology_dimension` as declared, valid or not.
    ///
    /// `None` when the attribute is absent, non-numeric or zero; those mesh
    /// variables declare no topology at all.
    pub fn declared_topology_dimension(&self) -> Option<i64> {
        self.attribute(UgridAttribute::TopologyDimension)
            .and_then(AttributeValue::as_integer)
            .filter(|&dim| dim != 0)
    }

    pub fn set_topology_dimension(&mut self, dimension: u8) {
        log::debug!("mesh `{}`: topology_dimension = {dimension}", self.name);
        self.topology_dimension = Some(dimension);
    }

    /// Derived `nedges` dimension.
    #[inline]
    pub fn nedges(&self) -> Option<&Dimension> {
        self.nedges.as_ref()
    }

    /// Derived `nfaces` dimension.
    #[inline]
    pub fn nfaces(&self) -> Option<&Dimension> {
        self.nfaces.as_ref()
    }

    /// Derived count dimension for a connectivity kind.
    pub fn count_dimension(&self, kind: ConnectivityKind) -> Option<&Dimension> {
        match kind {
            ConnectivityKind::Edge => self.nedges.as_ref(),
            ConnectivityKind::Face => self.nfaces.as_ref(),
            ConnectivityKind::Volume => None,
        }
    }

    /// Records the count dimension for a validated connectivity array.
    pub fn set_count_dimension(
        &mut self,
        kind: ConnectivityKind,
        dimension: Dimension,
    ) -> Result<(), UgridError> {
        log::debug!(
            "mesh `{}`: derived {} = {}",
            self.name,
            dimension.name(),
            dimension.size()
        );
        match kind {
            ConnectivityKind::Edge => self.nedges = Some(dimension),
            ConnectivityKind::Face => self.nfaces = Some(dimension),
            ConnectivityKind::Volume => {
                return Err(UgridError::Unsupported(kind.attribute()));
            }
        }
        Ok(())
    }

    /// Dimension resolved from `edge_dimension`/`face_dimension`.
    pub fn ordering_dimension(&self, which: OrderingDimension) -> Option<&Dimension> {
        match which {
            OrderingDimension::Edge => self.edge_dimension.as_ref(),
            OrderingDimension::Face => self.face_dimension.as_ref(),
        }
    }

    pub fn set_ordering_dimension(&mut self, which: OrderingDimension, dimension: Dimension) {
        log::debug!(
            "mesh `{}`: derived {} = `{}`",
            self.name,
            ContextKey::ordering_for(which),
            dimension.name()
        );
        match which {
            OrderingDimension::Edge => self.edge_dimension = Some(dimension),
            OrderingDimension::Face => self.face_dimension = Some(dimension),
        }
    }

    /// Node coordinate names that did not resolve to dataset variables.
    pub fn unresolved_node_coordinates(&self) -> &[String] {
        &self.unresolved_node_coordinates
    }

    pub fn record_unresolved_node_coordinate(&mut self, name: &str) {
        self.unresolved_node_coordinates.push(name.to_string());
    }

    /// Clears the unresolved list before a node-coordinate pass refills it.
    pub fn reset_unresolved_node_coordinates(&mut self) {
        self.unresolved_node_coordinates.clear();
    }

    /// Returns `true` once `key` has been derived.
    pub fn is_derived(&self, key: ContextKey) -> bool {
        match key {
            ContextKey::TopologyDimension => self.topology_dimension.is_some(),
            ContextKey::NEdges => self.nedges.is_some(),
            ContextKey::NFaces => self.nfaces.is_some(),
            ContextKey::EdgeDimension => self.edge_dimension.is_some(),
            ContextKey::FaceDimension => self.face_dimension.is_some(),
            ContextKey::UnresolvedNodeCoordinates => !self.unresolved_node_coordinates.is_empty(),
        }
    }
}

impl DebugInvariants for MeshContext {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "MeshContext");
    }

    fn validate_invariants(&self) -> Result<(), UgridError> {
        if let Some(dim) = self.topology_dimension {
            if !(1..=3).contains(&dim) {
                return Err(UgridError::ContextInvariant(format!(
                    "mesh `{}` recorded topology_dimension {dim}",
                    self.name
                )));
            }
        }
        for (key, slot) in [
            (ContextKey::NEdges, &self.nedges),
            (ContextKey::NFaces, &self.nfaces),
        ] {
            if let Some(dim) = slot {
                if dim.name() != key.as_str() {
                    return Err(UgridError::ContextInvariant(format!(
                        "mesh `{}` recorded `{}` as its {key} dimension",
                        self.name,
                        dim.name()
                    )));
                }
            }
        }
        Ok(())
    }
}
