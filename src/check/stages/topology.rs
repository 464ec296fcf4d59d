//! Stage 1: topology dimension.

use crate::check::options::CheckOptions;
use crate::check::result::{CheckLevel, CheckResult};
use crate::check::stage::Stage;
use crate::dataset::DatasetView;
use crate::mesh::attributes::UgridAttribute;
use crate::mesh::context::MeshContext;
use crate::ugrid_error::UgridError;

/// `topology_dimension` must be 1, 2 or 3. A valid value is recorded in the context.
pub fn check_topology_dimension(
    _dataset: &dyn DatasetView,
    ctx: &mut MeshContext,
    _options: &CheckOptions,
) -> CheckResult {
    let mut result = CheckResult::new(
        Stage::TopologyDimension.name(),
        CheckLevel::High,
        "The topology dimension is the highest dimension of the data",
    )
    .for_mesh(ctx.name());

    match declared_topology_dimension(ctx) {
        Ok(dimension) => {
            ctx.set_topology_dimension(dimension);
            result.pass();
        }
        Err(err) => result.fail(err),
    }
    result
}

fn declared_topology_dimension(ctx: &MeshContext) -> Result<u8, UgridError> {
    let attribute = UgridAttribute::TopologyDimension;
    let value = ctx
        .attribute(attribute)
        .ok_or_else(|| UgridError::MissingRequiredAttribute {
            mesh: ctx.name().to_string(),
            attribute,
        })?;
    value
        .as_integer()
        .and_then(|raw| u8::try_from(raw).ok())
        .filter(|dim| (1..=3).contains(dim))
        .ok_or_else(|| UgridError::InvalidAttributeValue {
            attribute,
            value: value.to_string(),
            kind: value.type_name(),
        })
}
