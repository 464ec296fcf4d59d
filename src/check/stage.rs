//! Stage descriptors and the default pipeline.
//!
//! Stages communicate only through the [`MeshContext`]. Each descriptor
//! declares the [`ContextKey`]s its stage reads and writes so the order can
//! be checked up front: no stage may read a key that no earlier stage writes.

use crate::check::options::CheckOptions;
use crate::check::result::CheckResult;
use crate::check::stages;
use crate::dataset::DatasetView;
use crate::mesh::context::{ContextKey, MeshContext};
use crate::ugrid_error::UgridError;
use std::collections::HashSet;
use std::fmt;

/// Signature shared by every check stage.
pub type StageFn = fn(&dyn DatasetView, &mut MeshContext, &CheckOptions) -> CheckResult;

/// The per-mesh checks, in dependency order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    TopologyDimension,
    ConnectivityAttributes,
    NodeCoordinates,
    EdgeFaceConnectivity,
    FaceEdgeConnectivity,
    FaceFaceConnectivity,
}

impl Stage {
    /// Name carried by the stage's results.
    pub const fn name(self) -> &'static str {
        match self {
            Stage::TopologyDimension => "topology_dimension",
            Stage::ConnectivityAttributes => "connectivity_attributes",
            Stage::NodeCoordinates => "node_coordinates",
            Stage::EdgeFaceConnectivity => "edge_face_connectivity",
            Stage::FaceEdgeConnectivity => "face_edge_connectivity",
            Stage::FaceFaceConnectivity => "face_face_connectivity",
        }
    }

    /// Low-severity checks of optional attributes.
    pub const fn is_optional(self) -> bool {
        matches!(
            self,
            Stage::EdgeFaceConnectivity | Stage::FaceEdgeConnectivity | Stage::FaceFaceConnectivity
        )
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A stage together with the context keys it touches.
#[derive(Clone, Copy)]
pub struct StageDescriptor {
    pub stage: Stage,
    pub reads: &'static [ContextKey],
    pub writes: &'static [ContextKey],
    pub run: StageFn,
}

impl fmt::Debug for StageDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StageDescriptor")
            .field("stage", &self.stage)
            .field("reads", &self.reads)
            .field("writes", &self.writes)
            .finish_non_exhaustive()
    }
}

/// Stages 1 through 6.
pub const DEFAULT_PIPELINE: [StageDescriptor; 6] = [
    StageDescriptor {
        stage: Stage::TopologyDimension,
        reads: &[],
        writes: &[ContextKey::TopologyDimension],
        run: stages::check_topology_dimension,
    },
    StageDescriptor {
        stage: Stage::ConnectivityAttributes,
        reads: &[ContextKey::TopologyDimension],
        writes: &[
            ContextKey::NEdges,
            ContextKey::NFaces,
            ContextKey::EdgeDimension,
            ContextKey::FaceDimension,
        ],
        run: stages::check_connectivity_attributes,
    },
    StageDescriptor {
        stage: Stage::NodeCoordinates,
        reads: &[],
        writes: &[ContextKey::UnresolvedNodeCoordinates],
        run: stages::check_node_coordinates,
    },
    StageDescriptor {
        stage: Stage::EdgeFaceConnectivity,
        reads: &[ContextKey::NEdges, ContextKey::NFaces],
        writes: &[],
        run: stages::check_edge_face_connectivity,
    },
    StageDescriptor {
        stage: Stage::FaceEdgeConnectivity,
        reads: &[ContextKey::NFaces],
        writes: &[],
        run: stages::check_face_edge_connectivity,
    },
    StageDescriptor {
        stage: Stage::FaceFaceConnectivity,
        reads: &[ContextKey::NFaces],
        writes: &[],
        run: stages::check_face_face_connectivity,
    },
];

/// Verifies every read is preceded by a write of the same key.
pub fn validate_pipeline(pipeline: &[StageDescriptor]) -> Result<(), UgridError> {
    let mut written: HashSet<ContextKey> = HashSet::new();
    for descriptor in pipeline {
        if let Some(&key) = descriptor.reads.iter().find(|key| !written.contains(*key)) {
            return Err(UgridError::StageOrder {
                stage: descriptor.stage.name(),
                key,
            });
        }
        written.extend(descriptor.writes.iter().copied());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pipeline_is_well_ordered() {
        validate_pipeline(&DEFAULT_PIPELINE).unwrap();
    }

    #[test]
    fn optional_stages_can_be_dropped_without_breaking_order() {
        let required: Vec<_> = DEFAULT_PIPELINE
            .into_iter()
            .filter(|d| !d.stage.is_optional())
            .collect();
        validate_pipeline(&required).unwrap();
    }

    #[test]
    fn reading_before_writing_is_rejected() {
        let mut reordered = DEFAULT_PIPELINE.to_vec();
        reordered.swap(1, 3);
        let err = validate_pipeline(&reordered).unwrap_err();
        assert_eq!(
            err,
            UgridError::StageOrder {
                stage: "edge_face_connectivity",
                key: ContextKey::NEdges,
            }
        );
    }

    #[test]
    fn topology_stage_must_come_first() {
        let without_first: Vec<_> = DEFAULT_PIPELINE[1..].to_vec();
        assert!(matches!(
            validate_pipeline(&without_first),
            Err(UgridError::StageOrder {
                key: ContextKey::TopologyDimension,
                ..
            })
        ));
    }
}
