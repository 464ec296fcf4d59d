//! Graded check results.

use crate::mesh::registry::MeshRegistry;
use crate::ugrid_error::UgridError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckLevel {
    Low = 1,
    Medium = 2,
    High = 3,
}

impl CheckLevel {
    /// Numeric weight used when aggregating scores.
    pub const fn weight(self) -> u32 {
        self as u32
    }

    /// Report section heading for this level.
    pub const fn header(self) -> &'static str {
        match self {
            CheckLevel::High => "Highly Recommended",
            CheckLevel::Medium => "Recommended",
            CheckLevel::Low => "Suggested",
        }
    }
}

impl fmt::Display for CheckLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Outcome of one check stage for one mesh, or of the whole run.
///
/// `out_of == 0` means the check did not apply; it is neither a pass nor a failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub name: &'static str,
    pub mesh: Option<String>,
    pub level: CheckLevel,
    pub score: u32,
    pub out_of: u32,
    pub description: String,
    pub messages: Vec<String>,
}

impl CheckResult {
    /// Starts an empty result: nothing attempted, no messages.
    pub fn new(name: &'static str, level: CheckLevel, description: impl Into<String>) -> Self {
        Self {
            name,
            mesh: None,
            level,
            score: 0,
            out_of: 0,
            description: description.into(),
            messages: Vec::new(),
        }
    }

    /// Attaches the mesh the result is about.
    pub fn for_mesh(mut self, mesh: &str) -> Self {
        self.mesh = Some(mesh.to_string());
        self
    }

    /// Records a passing sub-check.
    pub fn pass(&mut self) {
        self.score += 1;
        self.out_of += 1;
    }

    /// Records a failing sub-check with its reason.
    pub fn fail(&mut self, reason: impl fmt::Display) {
        self.out_of += 1;
        self.messages.push(reason.to_string());
    }

    /// Records one sub-check from a resolver outcome.
    pub fn record<T>(&mut self, outcome: &Result<T, UgridError>) {
        match outcome {
            Ok(_) => self.pass(),
            Err(err) => self.fail(err),
        }
    }

    /// Adds a message without touching the score.
    pub fn note(&mut self, message: impl fmt::Display) {
        self.messages.push(message.to_string());
    }

    /// Whether any sub-check applied.
    pub fn is_applicable(&self) -> bool {
        self.out_of > 0
    }

    /// `Some(true)` when every sub-check passed; `None` when inapplicable.
    pub fn passed(&self) -> Option<bool> {
        self.is_applicable().then_some(self.score == self.out_of)
    }
}

/// Everything a run produces: ordered results and the final mesh contexts.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub results: Vec<CheckResult>,
    #[serde(skip)]
    pub registry: MeshRegistry,
}

impl CheckReport {
    /// Level-weighted `(score, out_of)` over applicable results.
    pub fn weighted_score(&self) -> (u32, u32) {
        self.results
            .iter()
            .filter(|result| result.is_applicable())
            .fold((0, 0), |(score, out_of), result| {
                let weight = result.level.weight();
                (score + weight * result.score, out_of + weight * result.out_of)
            })
    }

    /// Results that applied and did not fully pass.
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.results
            .iter()
            .filter(|result| result.passed() == Some(false))
    }

    /// Results about one mesh, in stage order.
    pub fn for_mesh<'a>(&'a self, mesh: &str) -> impl Iterator<Item = &'a CheckResult> {
        self.results
            .iter()
            .filter(move |result| result.mesh.as_deref() == Some(mesh))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::attributes::UgridAttribute;

    #[test]
    fn sub_checks_accumulate() {
        let mut result = CheckResult::new("demo", CheckLevel::High, "demo");
        result.pass();
        result.fail("bad");
        result.record::<()>(&Err(UgridError::Unsupported(
            UgridAttribute::VolumeNodeConnectivity,
        )));
        assert_eq!((result.score, result.out_of), (1, 3));
        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.passed(), Some(false));
    }

    #[test]
    fn notes_leave_result_inapplicable() {
        let mut result = CheckResult::new("demo", CheckLevel::Low, "demo");
        result.note("No edge_face_connectivity (optional)");
        assert!(!result.is_applicable());
        assert_eq!(result.passed(), None);
    }

    #[test]
    fn weighted_score_skips_inapplicable_results() {
        let mut high = CheckResult::new("a", CheckLevel::High, "a");
        high.pass();
        let mut low = CheckResult::new("b", CheckLevel::Low, "b");
        low.fail("nope");
        let skipped = CheckResult::new("c", CheckLevel::Medium, "c");
        let report = CheckReport {
            results: vec![high, low, skipped],
            registry: MeshRegistry::new(),
        };
        assert_eq!(report.weighted_score(), (3, 4));
        assert_eq!(report.failures().count(), 1);
    }

    #[test]
    fn levels_order_by_severity() {
        assert!(CheckLevel::High > CheckLevel::Medium);
        assert_eq!(CheckLevel::Low.header(), "Suggested");
        assert_eq!(CheckLevel::Medium.weight(), 2);
    }
}
