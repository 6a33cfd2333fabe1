//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::rules::{RULES, has_length_bonus};
use crate::types::{PasswordEvaluation, PasswordScore, RuleCheck};

/// Evaluates password strength against the rule table.
///
/// Each satisfied rule is worth one point; a bonus point is added for long
/// passwords. Every unsatisfied rule contributes exactly one suggestion, in
/// rule-table order. The function is total over strings and has no side
/// effects, so identical input always yields an identical result.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `PasswordEvaluation` with the score, per-rule outcomes and suggestions.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    let length = password.expose_secret().chars().count();

    let mut checks = Vec::with_capacity(RULES.len());
    let mut suggestions = Vec::new();
    let mut score: u8 = 0;

    for rule in &RULES {
        let passed = (rule.check)(password);
        if passed {
            score += 1;
        } else {
            suggestions.push(rule.suggestion);
        }
        checks.push(RuleCheck {
            name: rule.name,
            passed,
        });
    }

    let bonus = has_length_bonus(password);
    if bonus {
        score += 1;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(length, score, bonus, "password evaluation complete");

    PasswordEvaluation {
        length,
        score: PasswordScore::new(score),
        bonus,
        checks,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PasswordStrength;

    fn evaluate(pwd: &str) -> PasswordEvaluation {
        let pwd = SecretString::new(pwd.to_string().into());
        evaluate_password_strength(&pwd)
    }

    #[test]
    fn test_evaluate_empty_password() {
        let evaluation = evaluate("");
        assert_eq!(evaluation.score.value(), 0);
        assert_eq!(evaluation.strength(), PasswordStrength::Weak);
        assert_eq!(evaluation.suggestions.len(), RULES.len());
        assert!(!evaluation.bonus);
        assert_eq!(evaluation.length, 0);
    }

    #[test]
    fn test_evaluate_lowercase_only_at_minimum_length() {
        let evaluation = evaluate("password");
        // Length and lowercase pass, nothing else does.
        assert_eq!(evaluation.score.value(), 2);
        assert_eq!(evaluation.strength(), PasswordStrength::Weak);
        assert_eq!(
            evaluation.suggestions,
            vec![
                "Add uppercase letters (A-Z).",
                "Include numbers (0-9).",
                "Include special characters (e.g., ! @ # $ % ^ & *).",
            ]
        );
    }

    #[test]
    fn test_evaluate_full_variety_with_bonus() {
        let evaluation = evaluate("Pa$$w0rd1234");
        assert_eq!(evaluation.score.value(), 6);
        assert_eq!(evaluation.score, PasswordScore::MAX);
        assert_eq!(evaluation.strength(), PasswordStrength::Strong);
        assert!(evaluation.bonus);
        assert!(evaluation.suggestions.is_empty());
        assert!(evaluation.checks.iter().all(|c| c.passed));
    }

    #[test]
    fn test_evaluate_upper_and_digit_without_bonus() {
        let evaluation = evaluate("PASSWORD123");
        assert_eq!(evaluation.score.value(), 3);
        assert_eq!(evaluation.strength(), PasswordStrength::Medium);
        assert!(!evaluation.bonus);
        assert_eq!(
            evaluation.suggestions,
            vec![
                "Add lowercase letters (a-z).",
                "Include special characters (e.g., ! @ # $ % ^ & *).",
            ]
        );
    }

    #[test]
    fn test_bonus_is_independent_of_variety() {
        // Twelve lowercase letters: length rule, lowercase rule, and bonus.
        let evaluation = evaluate("aaaaaaaaaaaa");
        assert_eq!(evaluation.score.value(), 3);
        assert!(evaluation.bonus);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let first = evaluate("MyP@ssw0rd!");
        let second = evaluate("MyP@ssw0rd!");
        assert_eq!(first.score, second.score);
        assert_eq!(first.suggestions, second.suggestions);
    }

    #[test]
    fn test_adding_a_missing_class_never_lowers_the_score() {
        let before = evaluate("PASSWORD123");
        let after = evaluate("PASSWORD123a");
        assert!(after.score >= before.score);
    }

    #[test]
    fn test_suggestions_match_failed_checks() {
        let evaluation = evaluate("abc");
        let failed = evaluation.checks.iter().filter(|c| !c.passed).count();
        assert_eq!(evaluation.suggestions.len(), failed);
    }

    #[test]
    fn test_evaluation_serializes_to_json() {
        let evaluation = evaluate("Pa$$w0rd1234");
        let json = serde_json::to_value(&evaluation).unwrap();
        assert_eq!(json["score"], serde_json::json!(6));
        assert_eq!(json["bonus"], serde_json::json!(true));
        assert_eq!(json["suggestions"], serde_json::json!([]));
    }
}
