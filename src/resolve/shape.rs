//! Shape and orientation of node connectivity arrays.
//!
//! UGRID lets a connectivity array list its axes either way round:
//! `(nedges, 2)` is regular, `(2, nedges)` is non-standard. The fixed axis
//! (2 nodes per edge, 3 per face) may coincidentally equal the count
//! dimension's size in tiny meshes, so the count axis is identified by
//! dimension *name* first and the fixed axis by *size*.

use crate::dataset::DatasetView;
use crate::mesh::attributes::ConnectivityKind;
use crate::mesh::context::MeshContext;
use crate::ugrid_error::UgridError;
use itertools::Itertools;
use std::fmt;

/// Axis order of a valid connectivity array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// `(count, fixed)`.
    Regular,
    /// `(fixed, count)`; requires `edge_dimension`/`face_dimension`.
    NonStandard,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Orientation::Regular => "regular",
            Orientation::NonStandard => "nonstd",
        })
    }
}

/// Validates the array a `*_node_connectivity` attribute points to.
///
/// Returns `Ok(None)` when the mesh does not carry the attribute, and
/// `Ok(Some(orientation))` when the array is valid, in which case the count
/// dimension (`nedges`/`nfaces`) is written into `ctx`. Volume connectivity
/// has no rule yet and always yields [`UgridError::Unsupported`].
pub fn resolve_connectivity_shape(
    dataset: &dyn DatasetView,
    ctx: &mut MeshContext,
    kind: ConnectivityKind,
) -> Result<Option<Orientation>, UgridError> {
    let attribute = kind.attribute();
    let Some(value) = ctx.attribute(attribute) else {
        return Ok(None);
    };
    let Some((count_name, fixed_size)) = kind.expected_shape() else {
        return Err(UgridError::Unsupported(attribute));
    };

    let array_name = value
        .as_text()
        .map(str::trim)
        .ok_or_else(|| UgridError::InvalidAttributeValue {
            attribute,
            value: value.to_string(),
            kind: value.type_name(),
        })?;
    let array = dataset
        .variable(array_name)
        .ok_or_else(|| UgridError::UnresolvedVariable {
            attribute,
            name: array_name.to_string(),
        })?;
    let dims = dataset.variable_dimensions(array)?;
    let expected = || format!("({count_name}, {fixed_size}) or ({fixed_size}, {count_name})");
    let Some((dim1, dim2)) = dims.iter().copied().collect_tuple() else {
        return Err(UgridError::ShapeMismatch {
            attribute,
            found: dims.iter().map(|d| d.size()).collect(),
            expected: expected(),
        });
    };

    let (orientation, count) = if dim1.name() == count_name && dim2.size() == fixed_size {
        (Orientation::Regular, dim1)
    } else if dim1.size() == fixed_size && dim2.name() == count_name {
        (Orientation::NonStandard, dim2)
    } else {
        return Err(UgridError::ShapeMismatch {
            attribute,
            found: vec![dim1.size(), dim2.size()],
            expected: expected(),
        });
    };

    ctx.set_count_dimension(kind, count.clone())?;
    Ok(Some(orientation))
}
