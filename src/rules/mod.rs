//! Password rules.
//!
//! The rule table below is the single source both surfaces are built from:
//! the evaluator walks `check`, the generated browser meter embeds
//! `js_check` and `suggestion`. Keeping both in one table is what stops the
//! two implementations from drifting apart.

mod length;
mod variety;

pub use length::{has_length_bonus, has_min_length};
pub use variety::{has_digit, has_lowercase, has_special, has_uppercase};

use secrecy::SecretString;

/// Minimum length required by the length rule, in characters.
pub const MIN_LENGTH: usize = 8;

/// Length at which the bonus point is awarded, in characters.
pub const BONUS_LENGTH: usize = 12;

/// A single password rule.
pub struct Rule {
    /// Short name shown in the per-rule report breakdown.
    pub name: &'static str,
    pub check: fn(&SecretString) -> bool,
    /// JavaScript expression over a string `p`, equivalent to `check`.
    pub js_check: &'static str,
    /// Shown when the rule is not satisfied.
    pub suggestion: &'static str,
}

/// The five rules, in the order their suggestions are reported.
pub const RULES: [Rule; 5] = [
    Rule {
        name: "at least 8 characters",
        check: has_min_length,
        js_check: "[...p].length >= 8",
        suggestion: "Use at least 8 characters.",
    },
    Rule {
        name: "uppercase letter",
        check: has_uppercase,
        js_check: "/\\p{Lu}/u.test(p)",
        suggestion: "Add uppercase letters (A-Z).",
    },
    Rule {
        name: "lowercase letter",
        check: has_lowercase,
        js_check: "/\\p{Ll}/u.test(p)",
        suggestion: "Add lowercase letters (a-z).",
    },
    Rule {
        name: "digit",
        check: has_digit,
        js_check: "/[0-9]/.test(p)",
        suggestion: "Include numbers (0-9).",
    },
    Rule {
        name: "special character",
        check: has_special,
        js_check: "/[^\\p{L}\\p{N}]/u.test(p)",
        suggestion: "Include special characters (e.g., ! @ # $ % ^ & *).",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_order_matches_reported_suggestion_order() {
        let names: Vec<&str> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            [
                "at least 8 characters",
                "uppercase letter",
                "lowercase letter",
                "digit",
                "special character",
            ]
        );
    }

    #[test]
    fn test_rules_suggestions_are_distinct() {
        for (i, a) in RULES.iter().enumerate() {
            for b in &RULES[i + 1..] {
                assert_ne!(a.suggestion, b.suggestion);
            }
        }
    }

    #[test]
    fn test_length_rule_js_uses_the_same_threshold() {
        assert!(RULES[0].js_check.contains(&MIN_LENGTH.to_string()));
    }

    #[test]
    fn test_all_rules_pass_for_a_full_variety_password() {
        let pwd = SecretString::new("HasAll123!@#".to_string().into());
        for rule in &RULES {
            assert!((rule.check)(&pwd), "rule '{}' should pass", rule.name);
        }
    }

    #[test]
    fn test_all_rules_fail_for_the_empty_password() {
        let pwd = SecretString::new("".to_string().into());
        for rule in &RULES {
            assert!(!(rule.check)(&pwd), "rule '{}' should fail", rule.name);
        }
    }
}
