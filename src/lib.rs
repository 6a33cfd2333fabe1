//! Password strength evaluation library
//!
//! This library evaluates a password against five rules (minimum length,
//! uppercase, lowercase, digit, special character), awards a bonus point
//! for long passwords, and maps the total score to a strength tier with
//! one improvement suggestion per failed rule.
//!
//! The rule table in [`RULES`] is the single source for both surfaces:
//! the evaluator consumes it directly and [`render_meter_html`] generates
//! the browser meter page from it.
//!
//! # Features
//!
//! - `cli` (default): Enables the `pwd-meter` binary
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::evaluate_password_strength;
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//!
//! println!("Score: {}", evaluation.score.value());
//! println!("Strength: {}", evaluation.strength());
//! for suggestion in &evaluation.suggestions {
//!     println!("- {suggestion}");
//! }
//! ```

// Internal modules
mod evaluator;
mod meter;
mod rules;
mod types;

// Public API
pub use evaluator::evaluate_password_strength;
pub use meter::{MeterError, render_meter_html, write_meter};
pub use rules::{BONUS_LENGTH, MIN_LENGTH, RULES, Rule};
pub use types::{
    MEDIUM_MIN_SCORE, PasswordEvaluation, PasswordScore, PasswordStrength, RuleCheck,
    STRONG_MIN_SCORE,
};
