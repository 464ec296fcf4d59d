//! Edge/face coordinate and ordering-dimension sub-checks run from stage 2.
//!
//! Both add their sub-checks to the stage-2 result they are handed.

use crate::check::result::CheckResult;
use crate::dataset::DatasetView;
use crate::mesh::attributes::{ConnectivityKind, UgridAttribute};
use crate::mesh::context::{ContextKey, MeshContext};
use crate::resolve::require_ordering_dimension;
use crate::ugrid_error::UgridError;

/// Checks `edge_coordinates`/`face_coordinates` for a connectivity kind.
///
/// Coordinates are optional: when absent only a note is added. When present,
/// every named variable must exist and be as long as the derived count
/// dimension; each name is one sub-check.
pub fn check_element_coordinates(
    result: &mut CheckResult,
    dataset: &dyn DatasetView,
    ctx: &MeshContext,
    kind: ConnectivityKind,
) {
    let Some(attribute) = kind.coordinates() else {
        return;
    };
    if ctx.attribute(kind.attribute()).is_none() {
        result.note(format!("No {kind}, {attribute} not applicable"));
        return;
    }
    let Some(value) = ctx.attribute(attribute) else {
        result.note(UgridError::MissingOptionalAttribute { attribute });
        return;
    };
    let Some(count) = ctx.count_dimension(kind) else {
        if let Some(key) = ContextKey::count_for(kind) {
            result.note(format!(
                "{attribute} cannot be verified because {key} was not derived from {kind}"
            ));
        }
        return;
    };

    let names = value.split_names();
    if names.is_empty() {
        result.fail(UgridError::InvalidAttributeValue {
            attribute,
            value: value.to_string(),
            kind: value.type_name(),
        });
        return;
    }
    for name in names {
        let outcome = coordinate_length(dataset, attribute, name).and_then(|len| {
            if len == count.size() {
                Ok(())
            } else {
                Err(UgridError::ShapeMismatch {
                    attribute,
                    found: vec![len],
                    expected: format!("length of {} ({})", count.name(), count.size()),
                })
            }
        });
        result.record(&outcome);
    }
}

fn coordinate_length(
    dataset: &dyn DatasetView,
    attribute: UgridAttribute,
    name: &str,
) -> Result<usize, UgridError> {
    let variable = dataset
        .variable(name)
        .ok_or_else(|| UgridError::UnresolvedVariable {
            attribute,
            name: name.to_string(),
        })?;
    dataset.len_of(variable)
}

/// Requires `edge_dimension`/`face_dimension` for a non-standard connectivity array.
pub fn check_ordering_dimension(
    result: &mut CheckResult,
    dataset: &dyn DatasetView,
    ctx: &mut MeshContext,
    kind: ConnectivityKind,
) {
    if let Some(which) = kind.ordering_dimension() {
        result.record(&require_ordering_dimension(dataset, ctx, which));
    }
}
