//! Value types produced by password evaluation.

use serde::Serialize;

/// Minimum total score for [`PasswordStrength::Medium`].
pub const MEDIUM_MIN_SCORE: u8 = 3;

/// Minimum total score for [`PasswordStrength::Strong`].
pub const STRONG_MIN_SCORE: u8 = 5;

/// Total score of a password: one point per satisfied rule plus the
/// long-password bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct PasswordScore(u8);

impl PasswordScore {
    /// Highest reachable score: all five rules plus the bonus.
    pub const MAX: PasswordScore = PasswordScore(6);

    pub fn new(value: u8) -> Self {
        PasswordScore(value)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Strength tier derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// Maps a score to its tier. Thresholds are fixed and non-overlapping,
    /// so a higher score never yields a lower tier.
    pub fn from_score(score: PasswordScore) -> Self {
        if score.value() >= STRONG_MIN_SCORE {
            PasswordStrength::Strong
        } else if score.value() >= MEDIUM_MIN_SCORE {
            PasswordStrength::Medium
        } else {
            PasswordStrength::Weak
        }
    }
}

impl std::fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weak => write!(f, "Weak"),
            Self::Medium => write!(f, "Medium"),
            Self::Strong => write!(f, "Strong"),
        }
    }
}

/// Outcome of a single rule check.
#[derive(Debug, Clone, Serialize)]
pub struct RuleCheck {
    pub name: &'static str,
    pub passed: bool,
}

/// Result of evaluating one password.
///
/// `suggestions` holds exactly one entry per failed rule, in rule-table
/// order; satisfied rules contribute no entry. The bonus has no suggestion
/// of its own.
#[derive(Debug, Clone, Serialize)]
pub struct PasswordEvaluation {
    /// Password length in characters.
    pub length: usize,
    pub score: PasswordScore,
    /// Whether the long-password bonus point was awarded.
    pub bonus: bool,
    /// Per-rule outcomes, in rule-table order.
    pub checks: Vec<RuleCheck>,
    pub suggestions: Vec<&'static str>,
}

impl PasswordEvaluation {
    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_score(self.score)
    }
}
