//! In-memory [`DatasetView`] backed by ordered maps.
//!
//! Deserializes from the compact header form
//!
//! ```json
//! {
//!   "dimensions": { "nnodes": 5, "nedges": 4, "two": 2 },
//!   "variables": {
//!     "mesh": { "attributes": { "cf_role": "mesh_topology", "topology_dimension": 1 } },
//!     "edges": { "dimensions": ["nedges", "two"] }
//!   }
//! }
//! ```

use crate::dataset::DatasetView;
use crate::dataset::variable::{AttributeValue, Dimension, Variable};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Dataset header held entirely in memory.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "RawDataset")]
pub struct InMemoryDataset {
    dimensions: BTreeMap<String, Dimension>,
    variables: BTreeMap<String, Variable>,
}

impl InMemoryDataset {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a dimension.
    pub fn insert_dimension(&mut self, name: &str, size: usize) -> Option<Dimension> {
        self.dimensions
            .insert(name.to_string(), Dimension::new(name, size))
    }

    /// Adds or replaces a variable, keyed by its name.
    pub fn insert_variable(&mut self, variable: Variable) -> Option<Variable> {
        self.variables.insert(variable.name().to_string(), variable)
    }

    /// Builder form of [`InMemoryDataset::insert_dimension`].
    pub fn with_dimension(mut self, name: &str, size: usize) -> Self {
        self.insert_dimension(name, size);
        self
    }

    /// Builder form of [`InMemoryDataset::insert_variable`].
    pub fn with_variable(mut self, variable: Variable) -> Self {
        self.insert_variable(variable);
        self
    }
}

impl DatasetView for InMemoryDataset {
    fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    fn dimension(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.get(name)
    }

    fn variable_names(&self) -> Vec<&str> {
        self.variables.keys().map(String::as_str).collect()
    }
}

#[derive(Deserialize)]
struct RawDataset {
    #[serde(default)]
    dimensions: BTreeMap<String, usize>,
    #[serde(default)]
    variables: BTreeMap<String, RawVariable>,
}

#[derive(Deserialize)]
struct RawVariable {
    #[serde(default)]
    dimensions: Vec<String>,
    #[serde(default)]
    attributes: BTreeMap<String, AttributeValue>,
}

impl From<RawDataset> for InMemoryDataset {
    fn from(raw: RawDataset) -> Self {
        let dimensions = raw
            .dimensions
            .into_iter()
            .map(|(name, size)| {
                let dim = Dimension::new(name.clone(), size);
                (name, dim)
            })
            .collect();
        let variables = raw
            .variables
            .into_iter()
            .map(|(name, var)| {
                let variable = Variable::from_parts(name.clone(), var.dimensions, var.attributes);
                (name, variable)
            })
            .collect();
        Self {
            dimensions,
            variables,
        }
    }
}
