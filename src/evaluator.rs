//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::rules::within_max_length;
use crate::types::{EvaluationResult, Rule, RuleSet, StrengthLevel};

/// Feedback emitted when the password exceeds
/// [`MAX_LENGTH`](crate::MAX_LENGTH) characters.
pub const MAX_LENGTH_FEEDBACK: &str = "Password should not exceed 10 characters.";

/// Feedback emitted when the password is shorter than
/// [`MIN_LENGTH`](crate::MIN_LENGTH) characters.
pub const MIN_LENGTH_FEEDBACK: &str = "Password should be at least 8 characters long.";

/// Evaluates password strength and returns a detailed evaluation.
///
/// Passwords longer than the maximum are rejected outright: the result is
/// [`StrengthLevel::Invalid`] with an empty rule map. Otherwise all five
/// rules are checked; a password below the minimum length is capped at
/// [`StrengthLevel::Weak`] no matter what else it contains, and the level is
/// otherwise derived from the number of satisfied rules.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// An [`EvaluationResult`] with the strength level, remediation feedback
/// and the per-rule satisfaction map.
pub fn evaluate(password: &SecretString) -> EvaluationResult {
    let pwd = password.expose_secret();
    let mut feedback = Vec::new();

    if !within_max_length(pwd) {
        feedback.push(MAX_LENGTH_FEEDBACK.to_string());
        return EvaluationResult {
            level: StrengthLevel::Invalid,
            feedback,
            rules: RuleSet::new(),
        };
    }

    let rules: RuleSet = Rule::ALL
        .iter()
        .map(|&rule| (rule, rule.check(pwd)))
        .collect();

    // A short password never rises above Weak; the remaining rules are
    // still reported in the map but produce no suggestions.
    if !rules[&Rule::Length] {
        feedback.push(MIN_LENGTH_FEEDBACK.to_string());
        return EvaluationResult {
            level: StrengthLevel::Weak,
            feedback,
            rules,
        };
    }

    let strength = rules.values().filter(|&&passed| passed).count();
    for (rule, passed) in &rules {
        if !*passed {
            if let Some(suggestion) = rule.suggestion() {
                feedback.push(suggestion.to_string());
            }
        }
    }

    EvaluationResult {
        level: StrengthLevel::from_satisfied_count(strength),
        feedback,
        rules,
    }
}

#[cfg(feature = "async")]
const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Returns the debounce interval applied before each async evaluation.
///
/// Priority:
/// 1. Environment variable `PWD_METER_DEBOUNCE_MS`
/// 2. Default of 300 milliseconds
///
/// Values that do not parse as milliseconds fall back to the default.
#[cfg(feature = "async")]
pub fn debounce_duration() -> Duration {
    std::env::var("PWD_METER_DEBOUNCE_MS")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .map(Duration::from_millis)
        .unwrap_or_else(|| Duration::from_millis(DEFAULT_DEBOUNCE_MS))
}

/// Async version that sends the evaluation result via channel.
///
/// Waits for the debounce interval first, so rapid re-evaluations (one per
/// keystroke) can be cancelled through `token` before any work happens.
/// A cancelled evaluation sends nothing.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<EvaluationResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(debounce_duration()).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("evaluation cancelled before start");
        return;
    }

    let evaluation = evaluate(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
