//! Read-only dataset view consumed by the checks.
//!
//! The checks never open files. A host hands them something implementing
//! [`DatasetView`]: named variables (with attributes and dimension names) and
//! named dimensions (with sizes). [`InMemoryDataset`] is the bundled
//! implementation, buildable in code or deserialized from JSON.

pub mod in_memory;
pub mod variable;

pub use in_memory::InMemoryDataset;
pub use variable::{AttributeValue, Dimension, Variable};

use crate::ugrid_error::UgridError;

/// Read access to the variables and dimensions of a parsed dataset.
///
/// Implementations must be safe to share between threads; nothing here ever
/// mutates the dataset.
pub trait DatasetView: Sync {
    /// Looks up a variable by name.
    fn variable(&self, name: &str) -> Option<&Variable>;

    /// Looks up a dimension by name.
    fn dimension(&self, name: &str) -> Option<&Dimension>;

    /// Names of every variable, in a stable order.
    fn variable_names(&self) -> Vec<&str>;

    /// Returns `true` if the dataset defines a variable called `name`.
    fn has_variable(&self, name: &str) -> bool {
        self.variable(name).is_some()
    }

    /// Resolves each of a variable's dimension names to its [`Dimension`].
    fn variable_dimensions(&self, variable: &Variable) -> Result<Vec<&Dimension>, UgridError> {
        variable
            .dimensions()
            .iter()
            .map(|name| {
                self.dimension(name)
                    .ok_or_else(|| UgridError::UnresolvedDimension {
                        variable: variable.name().to_string(),
                        dimension: name.clone(),
                    })
            })
            .collect()
    }

    /// Shape of a variable: the sizes of its dimensions, in order.
    fn shape(&self, variable: &Variable) -> Result<Vec<usize>, UgridError> {
        Ok(self
            .variable_dimensions(variable)?
            .into_iter()
            .map(Dimension::size)
            .collect())
    }

    /// Length of a variable along its first dimension (0 for scalars).
    fn len_of(&self, variable: &Variable) -> Result<usize, UgridError> {
        Ok(self.shape(variable)?.first().copied().unwrap_or(0))
    }
}
