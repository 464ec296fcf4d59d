//! Stage 3: node coordinates.

use crate::check::options::CheckOptions;
use crate::check::result::{CheckLevel, CheckResult};
use crate::check::stage::Stage;
use crate::dataset::DatasetView;
use crate::mesh::attributes::UgridAttribute;
use crate::mesh::context::MeshContext;
use crate::ugrid_error::UgridError;

/// `node_coordinates` must name one existing variable per declared topology dimension.
///
/// A count mismatch is a single failing sub-check; otherwise each name is
/// one sub-check. Names that do not resolve are recorded in the context.
pub fn check_node_coordinates(
    dataset: &dyn DatasetView,
    ctx: &mut MeshContext,
    _options: &CheckOptions,
) -> CheckResult {
    let mut result = CheckResult::new(
        Stage::NodeCoordinates.name(),
        CheckLevel::High,
        "Node coordinates point to aux coordinate variables representing locations of nodes",
    )
    .for_mesh(ctx.name());
    ctx.reset_unresolved_node_coordinates();

    let Some(topology) = ctx.declared_topology_dimension() else {
        result.fail("Failed because no topology dimension exists");
        return result;
    };
    let attribute = UgridAttribute::NodeCoordinates;
    let Some(value) = ctx.attribute(attribute).cloned() else {
        result.fail(UgridError::MissingRequiredAttribute {
            mesh: ctx.name().to_string(),
            attribute,
        });
        return result;
    };

    let names = value.split_names();
    if usize::try_from(topology).ok() != Some(names.len()) {
        result.fail(format!(
            "The size of mesh's node coordinates ({}) does not match the topology dimension ({topology})",
            names.len()
        ));
        return result;
    }
    for name in names {
        if dataset.has_variable(name) {
            result.pass();
        } else {
            ctx.record_unresolved_node_coordinate(name);
            result.fail(UgridError::UnresolvedVariable {
                attribute,
                name: name.to_string(),
            });
        }
    }
    result
}
