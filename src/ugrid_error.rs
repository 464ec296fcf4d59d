//! UgridError: Unified error type for ugrid-checker public APIs
//!
//! Resolvers return these as `Err` values. Check stages never propagate them;
//! each one becomes a message on the stage's [`CheckResult`](crate::check::CheckResult)
//! and lowers its score.

use crate::mesh::attributes::UgridAttribute;
use crate::mesh::context::ContextKey;
use thiserror::Error;

/// Unified error type for UGRID validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UgridError {
    /// A mandatory UGRID attribute is absent given the declared topology dimension.
    #[error("Mesh `{mesh}` does not contain the required attribute \"{attribute}\"")]
    MissingRequiredAttribute {
        mesh: String,
        attribute: UgridAttribute,
    },
    /// The attribute is present but its value is out of range.
    #[error("Invalid {attribute} \"{value}\" of type \"{kind}\"")]
    InvalidAttributeValue {
        attribute: UgridAttribute,
        value: String,
        kind: &'static str,
    },
    /// The attribute names a variable the dataset does not define.
    #[error("Variable \"{name}\" named by {attribute} is not defined in the dataset")]
    UnresolvedVariable {
        attribute: UgridAttribute,
        name: String,
    },
    /// A variable is declared over a dimension the dataset does not define.
    #[error("Dimension \"{dimension}\" of variable \"{variable}\" is not defined in the dataset")]
    UnresolvedDimension { variable: String, dimension: String },
    /// The array exists but its shape does not match what the convention requires.
    #[error("Incorrect shape {found:?} of {attribute} array, expected {expected}")]
    ShapeMismatch {
        attribute: UgridAttribute,
        found: Vec<usize>,
        expected: String,
    },
    /// An optional attribute is absent. Informational only.
    #[error("No {attribute} (optional)")]
    MissingOptionalAttribute { attribute: UgridAttribute },
    /// `edge_dimension`/`face_dimension` is absent although the connectivity
    /// array uses non-standard dimension ordering.
    #[error("Mesh does not contain {attribute}, required when connectivity in non-standard order.")]
    MissingRequiredWhenNonStandard { attribute: UgridAttribute },
    /// `edge_dimension`/`face_dimension` names a dimension the dataset lacks.
    #[error("{attribute} \"{dimension}\" defined in mesh, not defined in dataset dimensions.")]
    DanglingDimensionReference {
        attribute: UgridAttribute,
        dimension: String,
    },
    /// The checker has no rule for this attribute yet (volume connectivity).
    #[error("Validation of {0} is not implemented")]
    Unsupported(UgridAttribute),
    /// A stage reads a context key that no earlier stage writes.
    #[error("Stage `{stage}` reads {key} before any earlier stage writes it")]
    StageOrder {
        stage: &'static str,
        key: ContextKey,
    },
    /// Derived mesh context facts are inconsistent.
    #[error("Mesh context invariant violated: {0}")]
    ContextInvariant(String),
}

impl UgridError {
    /// True when the error marks a gap in the checker rather than a defect in the dataset.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, UgridError::Unsupported(_))
    }
}
