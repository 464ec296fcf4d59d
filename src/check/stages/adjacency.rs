//! Stages 4-6: optional element adjacency arrays.

use crate::check::options::CheckOptions;
use crate::check::result::{CheckLevel, CheckResult};
use crate::check::stage::Stage;
use crate::dataset::{AttributeValue, DatasetView};
use crate::mesh::attributes::{MAX_NODES_PER_FACE, UgridAttribute};
use crate::mesh::context::MeshContext;
use crate::ugrid_error::UgridError;

/// `edge_face_connectivity` must be shaped `(nedges, 2)`.
///
/// Applies only once both `nedges` and `nfaces` have been derived.
pub fn check_edge_face_connectivity(
    dataset: &dyn DatasetView,
    ctx: &mut MeshContext,
    _options: &CheckOptions,
) -> CheckResult {
    let mut result = CheckResult::new(
        Stage::EdgeFaceConnectivity.name(),
        CheckLevel::Low,
        "array of faces sharing the same edge (optional)",
    )
    .for_mesh(ctx.name());

    let (Some(nedges), Some(_)) = (ctx.nedges(), ctx.nfaces()) else {
        return result;
    };
    let attribute = UgridAttribute::EdgeFaceConnectivity;
    let Some(value) = ctx.attribute(attribute) else {
        result.note(UgridError::MissingOptionalAttribute { attribute });
        return result;
    };
    result.record(&expect_array_shape(
        dataset,
        attribute,
        value,
        [nedges.size(), 2],
        format!("({}, 2)", nedges.name()),
    ));
    result
}

/// `face_edge_connectivity` must be shaped `(nfaces, maxnumnodesperface)`.
pub fn check_face_edge_connectivity(
    dataset: &dyn DatasetView,
    ctx: &mut MeshContext,
    _options: &CheckOptions,
) -> CheckResult {
    check_face_adjacency(
        dataset,
        ctx,
        Stage::FaceEdgeConnectivity,
        UgridAttribute::FaceEdgeConnectivity,
        "array pointing to every index of each edge of each face (optional)",
    )
}

/// `face_face_connectivity` must be shaped `(nfaces, maxnumnodesperface)`.
pub fn check_face_face_connectivity(
    dataset: &dyn DatasetView,
    ctx: &mut MeshContext,
    _options: &CheckOptions,
) -> CheckResult {
    check_face_adjacency(
        dataset,
        ctx,
        Stage::FaceFaceConnectivity,
        UgridAttribute::FaceFaceConnectivity,
        "array of every face sharing a face with any other face (optional)",
    )
}

// Skipped silently when the dataset has no maxnumnodesperface dimension.
fn check_face_adjacency(
    dataset: &dyn DatasetView,
    ctx: &MeshContext,
    stage: Stage,
    attribute: UgridAttribute,
    description: &str,
) -> CheckResult {
    let mut result =
        CheckResult::new(stage.name(), CheckLevel::Low, description).for_mesh(ctx.name());

    let Some(max_nodes) = dataset.dimension(MAX_NODES_PER_FACE) else {
        return result;
    };
    let Some(nfaces) = ctx.nfaces() else {
        result.note("Number of faces (nfaces) not defined");
        return result;
    };
    let Some(value) = ctx.attribute(attribute) else {
        result.note(UgridError::MissingOptionalAttribute { attribute });
        return result;
    };
    result.record(&expect_array_shape(
        dataset,
        attribute,
        value,
        [nfaces.size(), max_nodes.size()],
        format!("({}, {})", nfaces.name(), max_nodes.name()),
    ));
    result
}

fn expect_array_shape(
    dataset: &dyn DatasetView,
    attribute: UgridAttribute,
    value: &AttributeValue,
    expected: [usize; 2],
    expected_label: String,
) -> Result<(), UgridError> {
    let name = value
        .as_text()
        .map(str::trim)
        .ok_or_else(|| UgridError::InvalidAttributeValue {
            attribute,
            value: value.to_string(),
            kind: value.type_name(),
        })?;
    let variable = dataset
        .variable(name)
        .ok_or_else(|| UgridError::UnresolvedVariable {
            attribute,
            name: name.to_string(),
        })?;
    let shape = dataset.shape(variable)?;
    if shape == expected {
        Ok(())
    } else {
        Err(UgridError::ShapeMismatch {
            attribute,
            found: shape,
            expected: expected_label,
        })
    }
}
