//! Presentation mapping - progress meter, checklist labels, text report.
//!
//! Pure data for rendering an [`EvaluationResult`]: no I/O happens here,
//! the caller decides how to draw it.

use std::fmt;

use crate::types::{EvaluationResult, Rule, StrengthLevel};

/// Color of the strength progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MeterColor {
    Red,
    Yellow,
    Green,
}

impl MeterColor {
    /// CSS color name for this meter color.
    pub fn as_str(&self) -> &'static str {
        match self {
            MeterColor::Red => "red",
            MeterColor::Yellow => "yellow",
            MeterColor::Green => "green",
        }
    }
}

impl fmt::Display for MeterColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress-bar rendition of a strength level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Meter {
    /// Fill percentage, 0-100.
    pub percent: u8,
    /// Bar color.
    pub color: MeterColor,
}

impl StrengthLevel {
    /// Progress mapping for this level.
    ///
    /// [`StrengthLevel::Invalid`] has no progress mapping and is rendered
    /// as an error state instead.
    pub fn meter(&self) -> Option<Meter> {
        match self {
            StrengthLevel::Invalid => None,
            StrengthLevel::Weak => Some(Meter {
                percent: 33,
                color: MeterColor::Red,
            }),
            StrengthLevel::Moderate => Some(Meter {
                percent: 66,
                color: MeterColor::Yellow,
            }),
            StrengthLevel::Strong => Some(Meter {
                percent: 100,
                color: MeterColor::Green,
            }),
        }
    }
}

impl Rule {
    /// Checklist wording for this rule.
    pub fn label(&self) -> &'static str {
        match self {
            Rule::Length => "Minimum 8 characters",
            Rule::Uppercase => "At least one uppercase letter",
            Rule::Lowercase => "At least one lowercase letter",
            Rule::Digit => "At least one digit",
            Rule::Special => "At least one special character",
        }
    }
}

/// Renders an evaluation as a plain-text report.
///
/// Rejected passwords get an error banner with the reason; everything else
/// gets the strength line, the passed/not-met checklist and either the
/// suggestion list or a success line.
pub fn render_report(evaluation: &EvaluationResult) -> String {
    let mut out = String::new();

    let Some(meter) = evaluation.level.meter() else {
        out.push_str("Your password is invalid:\n");
        for suggestion in &evaluation.feedback {
            out.push_str(&format!("- {suggestion}\n"));
        }
        return out;
    };

    out.push_str(&format!(
        "Password Strength: {} ({}%)\n",
        evaluation.level, meter.percent
    ));

    out.push_str("\nValidation Rules:\n");
    for (rule, passed) in &evaluation.rules {
        let mark = if *passed { "x" } else { " " };
        out.push_str(&format!("[{mark}] {}\n", rule.label()));
    }

    if evaluation.feedback.is_empty() {
        out.push_str("\nYour password is strong!\n");
    } else {
        out.push_str("\nSuggestions to improve your password:\n");
        for suggestion in &evaluation.feedback {
            out.push_str(&format!("- {suggestion}\n"));
        }
    }

    out
}
