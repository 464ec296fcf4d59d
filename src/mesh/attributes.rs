//! UGRID attribute vocabulary and the mesh-topology variable record.

use crate::dataset::{AttributeValue, Variable};
use crate::mesh::id::MeshId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Attributes a mesh-topology variable may carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UgridAttribute {
    TopologyDimension,
    NodeCoordinates,
    EdgeNodeConnectivity,
    FaceNodeConnectivity,
    VolumeNodeConnectivity,
    EdgeFaceConnectivity,
    FaceEdgeConnectivity,
    FaceFaceConnectivity,
    EdgeDimension,
    FaceDimension,
    EdgeCoordinates,
    FaceCoordinates,
}

impl UgridAttribute {
    /// Every recognised attribute.
    pub const ALL: [UgridAttribute; 12] = [
        UgridAttribute::TopologyDimension,
        UgridAttribute::NodeCoordinates,
        UgridAttribute::EdgeNodeConnectivity,
        UgridAttribute::FaceNodeConnectivity,
        UgridAttribute::VolumeNodeConnectivity,
        UgridAttribute::EdgeFaceConnectivity,
        UgridAttribute::FaceEdgeConnectivity,
        UgridAttribute::FaceFaceConnectivity,
        UgridAttribute::EdgeDimension,
        UgridAttribute::FaceDimension,
        UgridAttribute::EdgeCoordinates,
        UgridAttribute::FaceCoordinates,
    ];

    /// Attribute name as written in the dataset.
    pub const fn as_str(self) -> &'static str {
        match self {
            UgridAttribute::TopologyDimension => "topology_dimension",
            UgridAttribute::NodeCoordinates => "node_coordinates",
            UgridAttribute::EdgeNodeConnectivity => "edge_node_connectivity",
            UgridAttribute::FaceNodeConnectivity => "face_node_connectivity",
            UgridAttribute::VolumeNodeConnectivity => "volume_node_connectivity",
            UgridAttribute::EdgeFaceConnectivity => "edge_face_connectivity",
            UgridAttribute::FaceEdgeConnectivity => "face_edge_connectivity",
            UgridAttribute::FaceFaceConnectivity => "face_face_connectivity",
            UgridAttribute::EdgeDimension => "edge_dimension",
            UgridAttribute::FaceDimension => "face_dimension",
            UgridAttribute::EdgeCoordinates => "edge_coordinates",
            UgridAttribute::FaceCoordinates => "face_coordinates",
        }
    }

    /// Parses an attribute name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attr| attr.as_str() == name)
    }
}

impl fmt::Display for UgridAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Node connectivity arrays, one per element type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConnectivityKind {
    Edge,
    Face,
    Volume,
}

impl ConnectivityKind {
    /// In the order stage 2 visits them.
    pub const ALL: [ConnectivityKind; 3] = [
        ConnectivityKind::Edge,
        ConnectivityKind::Face,
        ConnectivityKind::Volume,
    ];

    /// The `*_node_connectivity` attribute naming the array.
    pub const fn attribute(self) -> UgridAttribute {
        match self {
            ConnectivityKind::Edge => UgridAttribute::EdgeNodeConnectivity,
            ConnectivityKind::Face => UgridAttribute::FaceNodeConnectivity,
            ConnectivityKind::Volume => UgridAttribute::VolumeNodeConnectivity,
        }
    }

    /// Topology dimension for which this connectivity is mandatory.
    pub const fn required_for(self) -> u8 {
        match self {
            ConnectivityKind::Edge => 1,
            ConnectivityKind::Face => 2,
            ConnectivityKind::Volume => 3,
        }
    }

    /// Connectivity mandated by a topology dimension.
    pub fn mandated_by(dimension: u8) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.required_for() == dimension)
    }

    /// Expected count-dimension name and fixed per-element node count.
    ///
    /// `None` for volumes: no rule is defined for them.
    pub const fn expected_shape(self) -> Option<(&'static str, usize)> {
        match self {
            ConnectivityKind::Edge => Some((NEDGES, 2)),
            ConnectivityKind::Face => Some((NFACES, 3)),
            ConnectivityKind::Volume => None,
        }
    }

    /// Companion `edge_coordinates`/`face_coordinates` attribute.
    pub const fn coordinates(self) -> Option<UgridAttribute> {
        match self {
            ConnectivityKind::Edge => Some(UgridAttribute::EdgeCoordinates),
            ConnectivityKind::Face => Some(UgridAttribute::FaceCoordinates),
            ConnectivityKind::Volume => None,
        }
    }

    /// `edge_dimension`/`face_dimension`, required under non-standard ordering.
    pub const fn ordering_dimension(self) -> Option<OrderingDimension> {
        match self {
            ConnectivityKind::Edge => Some(OrderingDimension::Edge),
            ConnectivityKind::Face => Some(OrderingDimension::Face),
            ConnectivityKind::Volume => None,
        }
    }
}

impl fmt::Display for ConnectivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attribute().as_str())
    }
}

/// Mesh attributes naming the dimension that indexes edges or faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrderingDimension {
    Edge,
    Face,
}

impl OrderingDimension {
    pub const fn attribute(self) -> UgridAttribute {
        match self {
            OrderingDimension::Edge => UgridAttribute::EdgeDimension,
            OrderingDimension::Face => UgridAttribute::FaceDimension,
        }
    }
}

/// Canonical edge count dimension.
pub const NEDGES: &str = "nedges";
/// Canonical face count dimension.
pub const NFACES: &str = "nfaces";
/// Dimension bounding the number of nodes (and edges) per face.
pub const MAX_NODES_PER_FACE: &str = "maxnumnodesperface";
/// `cf_role` value marking a mesh-topology variable.
pub const MESH_TOPOLOGY_ROLE: &str = "mesh_topology";

/// Raw UGRID attribute values of one mesh variable.
///
/// Absent keys are absent attributes; an empty string is a present value.
pub type MeshAttributes = BTreeMap<UgridAttribute, AttributeValue>;

/// A mesh-topology variable as handed over by discovery.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshVariable {
    id: MeshId,
    name: String,
    attributes: MeshAttributes,
}

impl MeshVariable {
    /// Creates a mesh record from already-extracted attributes.
    pub fn new(id: MeshId, name: impl Into<String>, attributes: MeshAttributes) -> Self {
        Self {
            id,
            name: name.into(),
            attributes,
        }
    }

    /// Extracts the recognised UGRID attributes of a dataset variable.
    pub fn from_variable(id: MeshId, variable: &Variable) -> Self {
        let attributes = variable
            .attributes()
            .filter_map(|(name, value)| {
                UgridAttribute::from_name(name).map(|attr| (attr, value.clone()))
            })
            .collect();
        Self::new(id, variable.name(), attributes)
    }

    #[inline]
    pub fn id(&self) -> MeshId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn attributes(&self) -> &MeshAttributes {
        &self.attributes
    }

    /// Looks up a UGRID attribute. Absence is a normal outcome.
    pub fn attribute(&self, attr: UgridAttribute) -> Option<&AttributeValue> {
        self.attributes.get(&attr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_names_round_trip() {
        for attr in UgridAttribute::ALL {
            assert_eq!(UgridAttribute::from_name(attr.as_str()), Some(attr));
        }
        assert_eq!(UgridAttribute::from_name("cf_role"), None);
    }

    #[test]
    fn topology_dimension_mandates_connectivity() {
        assert_eq!(ConnectivityKind::mandated_by(1), Some(ConnectivityKind::Edge));
        assert_eq!(ConnectivityKind::mandated_by(2), Some(ConnectivityKind::Face));
        assert_eq!(ConnectivityKind::mandated_by(3), Some(ConnectivityKind::Volume));
        assert_eq!(ConnectivityKind::mandated_by(4), None);
    }

    #[test]
    fn from_variable_keeps_only_ugrid_attributes() {
        let var = Variable::new("mesh")
            .with_attribute("cf_role", "mesh_topology")
            .with_attribute("topology_dimension", 2)
            .with_attribute("node_coordinates", "lon lat");
        let mesh = MeshVariable::from_variable(MeshId::from_index(0), &var);
        assert_eq!(mesh.name(), "mesh");
        assert_eq!(mesh.attributes().len(), 2);
        assert_eq!(
            mesh.attribute(UgridAttribute::TopologyDimension),
            Some(&AttributeValue::Int(2))
        );
    }
}
