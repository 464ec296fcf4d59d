//! Checker configuration.

/// Optional toggles for a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOptions {
    /// Run the low-severity optional stages (edge-face, face-edge, face-face).
    pub include_optional: bool,
    /// How to score connectivity the checker has no rule for.
    pub unsupported: UnsupportedHandling,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            include_optional: true,
            unsupported: UnsupportedHandling::Report,
        }
    }
}

impl CheckOptions {
    /// Only the stages whose findings are highly recommended or recommended.
    pub fn required_only() -> Self {
        Self {
            include_optional: false,
            ..Self::default()
        }
    }

    /// Every stage, and unsupported connectivity counts against the score.
    pub fn strict() -> Self {
        Self {
            include_optional: true,
            unsupported: UnsupportedHandling::Fail,
        }
    }
}

/// Behavior for connectivity arrays the checker cannot validate (volumes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedHandling {
    /// Add a "not implemented" message and leave the array out of the score.
    Report,
    /// Add the message and count the array as a failed sub-check.
    Fail,
}
