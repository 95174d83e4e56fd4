//! Password strength meter library
//!
//! This library evaluates a candidate password against five composition
//! rules and produces a strength level, remediation feedback and a per-rule
//! satisfaction map, together with the progress-bar mapping used to render
//! the result.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with
//!   cancellation support
//! - `serde`: Enables serialization of the result types
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_METER_DEBOUNCE_MS`: Debounce interval for async evaluation,
//!   in milliseconds (default: 300)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{evaluate, StrengthLevel};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd".to_string().into());
//! let evaluation = evaluate(&password);
//!
//! assert_eq!(evaluation.level, StrengthLevel::Strong);
//! assert!(evaluation.feedback.is_empty());
//! ```

// Internal modules
mod evaluator;
mod meter;
mod rules;
mod types;

// Public API
pub use evaluator::{MAX_LENGTH_FEEDBACK, MIN_LENGTH_FEEDBACK, evaluate};
pub use meter::{Meter, MeterColor, render_report};
pub use rules::{MAX_LENGTH, MIN_LENGTH, SPECIAL_CHARS};
pub use types::{EvaluationResult, ParseLevelError, Rule, RuleSet, StrengthLevel};

#[cfg(feature = "async")]
pub use evaluator::{debounce_duration, evaluate_tx};
