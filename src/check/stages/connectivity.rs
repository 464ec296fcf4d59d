//! Stage 2: node connectivity attributes.
//!
//! | topology | required                   | optional                           |
//! |----------|----------------------------|------------------------------------|
//! | 1        | `edge_node_connectivity`   |                                    |
//! | 2        | `face_node_connectivity`   | `edge_node_connectivity`           |
//! | 3        | `volume_node_connectivity` | `edge_`/`face_node_connectivity`   |

use crate::check::options::{CheckOptions, UnsupportedHandling};
use crate::check::result::{CheckLevel, CheckResult};
use crate::check::stage::Stage;
use crate::check::stages::coordinates::{check_element_coordinates, check_ordering_dimension};
use crate::dataset::DatasetView;
use crate::mesh::attributes::ConnectivityKind;
use crate::mesh::context::MeshContext;
use crate::resolve::{Orientation, resolve_connectivity_shape};

/// Validates every node connectivity array the mesh declares.
///
/// One sub-check per array present. A non-standard array adds one sub-check
/// for its `edge_dimension`/`face_dimension`, and `edge_coordinates`/
/// `face_coordinates` add one per coordinate variable named. The mandatory
/// array for the declared topology dimension short-circuits the stage when
/// it is missing. Without a declared `topology_dimension` the stage is a
/// single failing sub-check.
pub fn check_connectivity_attributes(
    dataset: &dyn DatasetView,
    ctx: &mut MeshContext,
    options: &CheckOptions,
) -> CheckResult {
    let mut result = CheckResult::new(
        Stage::ConnectivityAttributes.name(),
        CheckLevel::High,
        "Interconnectivity: connection between elements in the mesh",
    )
    .for_mesh(ctx.name());

    if ctx.declared_topology_dimension().is_none() {
        result.fail(
            "Mesh does not contain the required attribute \"topology_dimension\", therefore any defined connectivity cannot be verified.",
        );
        return result;
    }

    // An out-of-range dimension mandates nothing; present arrays are still checked.
    if let Some(topology) = ctx.topology_dimension() {
        if let Some(required) = ConnectivityKind::mandated_by(topology) {
            if ctx.attribute(required.attribute()).is_none() {
                result.fail(format!("dataset is {topology}D, so must have \"{required}\""));
                return result;
            }
        }
    }

    for kind in ConnectivityKind::ALL {
        match resolve_connectivity_shape(dataset, ctx, kind) {
            Ok(None) => continue,
            Ok(Some(orientation)) => {
                result.pass();
                if orientation == Orientation::NonStandard {
                    check_ordering_dimension(&mut result, dataset, ctx, kind);
                }
            }
            Err(err) if err.is_unsupported() => {
                log::warn!("mesh `{}`: {err}", ctx.name());
                match options.unsupported {
                    UnsupportedHandling::Report => result.note(&err),
                    UnsupportedHandling::Fail => result.fail(&err),
                }
                continue;
            }
            Err(err) => {
                result.fail(format!("Dataset contains invalid \"{kind}\" array: {err}"));
            }
        }
        check_element_coordinates(&mut result, dataset, ctx, kind);
    }
    result
}
