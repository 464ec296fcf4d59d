//! `edge_dimension` / `face_dimension` resolution.

use crate::dataset::{DatasetView, Dimension};
use crate::mesh::attributes::OrderingDimension;
use crate::mesh::context::MeshContext;
use crate::ugrid_error::UgridError;

/// Resolves the dimension named by `edge_dimension`/`face_dimension`.
///
/// Only required when a connectivity array is in non-standard order. On
/// success the dimension is recorded in `ctx`.
pub fn require_ordering_dimension(
    dataset: &dyn DatasetView,
    ctx: &mut MeshContext,
    which: OrderingDimension,
) -> Result<Dimension, UgridError> {
    let attribute = which.attribute();
    let value = ctx
        .attribute(attribute)
        .ok_or(UgridError::MissingRequiredWhenNonStandard { attribute })?;
    let name = value
        .as_text()
        .map(str::trim)
        .ok_or_else(|| UgridError::InvalidAttributeValue {
            attribute,
            value: value.to_string(),
            kind: value.type_name(),
        })?;
    let dimension = dataset
        .dimension(name)
        .cloned()
        .ok_or_else(|| UgridError::DanglingDimensionReference {
            attribute,
            dimension: name.to_string(),
        })?;
    ctx.set_ordering_dimension(which, dimension.clone());
    Ok(dimension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::InMemoryDataset;
    use crate::mesh::attributes::{MeshAttributes, MeshVariable, UgridAttribute};
    use crate::mesh::id::MeshId;

    fn context(edge_dimension: Option<&str>) -> MeshContext {
        let mut attrs = MeshAttributes::new();
        if let Some(name) = edge_dimension {
            attrs.insert(UgridAttribute::EdgeDimension, name.into());
        }
        MeshContext::seed(&MeshVariable::new(MeshId::from_index(0), "mesh", attrs))
    }

    #[test]
    fn resolves_and_records_dimension() {
        let ds = InMemoryDataset::new().with_dimension("nedges", 4);
        let mut ctx = context(Some("nedges"));
        let dim = require_ordering_dimension(&ds, &mut ctx, OrderingDimension::Edge).unwrap();
        assert_eq!(dim.size(), 4);
        assert_eq!(
            ctx.ordering_dimension(OrderingDimension::Edge).map(Dimension::name),
            Some("nedges")
        );
    }

    #[test]
    fn missing_attribute_is_required_under_nonstandard_order() {
        let ds = InMemoryDataset::new().with_dimension("nedges", 4);
        let mut ctx = context(None);
        let err = require_ordering_dimension(&ds, &mut ctx, OrderingDimension::Edge).unwrap_err();
        assert_eq!(
            err,
            UgridError::MissingRequiredWhenNonStandard {
                attribute: UgridAttribute::EdgeDimension
            }
        );
    }

    #[test]
    fn undefined_dimension_is_dangling() {
        let ds = InMemoryDataset::new().with_dimension("nedges", 4);
        let mut ctx = context(Some("n_edges"));
        let err = require_ordering_dimension(&ds, &mut ctx, OrderingDimension::Edge).unwrap_err();
        assert!(matches!(err, UgridError::DanglingDimensionReference { .. }));
        assert!(ctx.ordering_dimension(OrderingDimension::Edge).is_none());
    }
}
