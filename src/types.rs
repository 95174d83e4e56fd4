//! Core value types for password evaluation.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::rules;

/// One composition rule checked against the candidate password.
///
/// The declaration order is the canonical check order; `Ord` follows it, so
/// a [`RuleSet`] always iterates rules in this order and feedback lines come
/// out in a stable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Rule {
    /// At least [`MIN_LENGTH`](crate::MIN_LENGTH) characters.
    Length,
    /// At least one `A`-`Z` character.
    Uppercase,
    /// At least one `a`-`z` character.
    Lowercase,
    /// At least one `0`-`9` character.
    Digit,
    /// At least one character from [`SPECIAL_CHARS`](crate::SPECIAL_CHARS).
    Special,
}

impl Rule {
    /// All rules in canonical check order.
    pub const ALL: [Rule; 5] = [
        Rule::Length,
        Rule::Uppercase,
        Rule::Lowercase,
        Rule::Digit,
        Rule::Special,
    ];

    /// Stable lowercase key for this rule.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Length => "length",
            Rule::Uppercase => "uppercase",
            Rule::Lowercase => "lowercase",
            Rule::Digit => "digit",
            Rule::Special => "special",
        }
    }

    /// Runs this rule's predicate against the password.
    pub fn check(&self, password: &str) -> bool {
        match self {
            Rule::Length => rules::meets_min_length(password),
            Rule::Uppercase => rules::has_uppercase(password),
            Rule::Lowercase => rules::has_lowercase(password),
            Rule::Digit => rules::has_digit(password),
            Rule::Special => rules::has_special(password),
        }
    }

    /// Remediation suggestion for when this rule is not met.
    ///
    /// `Length` has no suggestion; length violations produce their own
    /// dedicated feedback lines before the other rules are reported.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Rule::Length => None,
            Rule::Uppercase => Some("Add at least one uppercase letter."),
            Rule::Lowercase => Some("Add at least one lowercase letter."),
            Rule::Digit => Some("Add at least one digit."),
            Rule::Special => Some("Add at least one special character."),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-rule satisfaction map, ordered by canonical rule order.
///
/// Empty when the password was rejected outright; otherwise it always
/// contains all five rules.
pub type RuleSet = BTreeMap<Rule, bool>;

/// Overall strength classification of a password.
///
/// Levels are ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StrengthLevel {
    /// Rejected by policy before any rule was counted.
    Invalid,
    Weak,
    Moderate,
    Strong,
}

impl StrengthLevel {
    /// Maps the number of satisfied rules to a level.
    ///
    /// Never yields [`StrengthLevel::Invalid`]; policy rejection happens
    /// before rules are counted.
    pub fn from_satisfied_count(count: usize) -> Self {
        match count {
            0..=2 => StrengthLevel::Weak,
            3 => StrengthLevel::Moderate,
            _ => StrengthLevel::Strong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLevel::Invalid => "Invalid",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Moderate => "Moderate",
            StrengthLevel::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown strength level name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown strength level: {0}")]
pub struct ParseLevelError(String);

impl FromStr for StrengthLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "invalid" => Ok(StrengthLevel::Invalid),
            "weak" => Ok(StrengthLevel::Weak),
            "moderate" => Ok(StrengthLevel::Moderate),
            "strong" => Ok(StrengthLevel::Strong),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// Outcome of a single password evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluationResult {
    /// Overall classification.
    pub level: StrengthLevel,
    /// Remediation suggestions, in rule-check order.
    pub feedback: Vec<String>,
    /// Which rules passed; empty when the password was rejected outright.
    pub rules: RuleSet,
}

impl EvaluationResult {
    /// Number of rules the password satisfied.
    pub fn satisfied_count(&self) -> usize {
        self.rules.values().filter(|&&passed| passed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order_and_names() {
        let names: Vec<_> = Rule::ALL.iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            vec!["length", "uppercase", "lowercase", "digit", "special"]
        );
    }

    #[test]
    fn test_rule_set_iterates_in_check_order() {
        let rules: RuleSet = Rule::ALL.iter().map(|&r| (r, false)).collect();
        let keys: Vec<_> = rules.keys().copied().collect();
        assert_eq!(keys, Rule::ALL.to_vec());
    }

    #[test]
    fn test_level_from_satisfied_count() {
        assert_eq!(StrengthLevel::from_satisfied_count(0), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_satisfied_count(1), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_satisfied_count(2), StrengthLevel::Weak);
        assert_eq!(
            StrengthLevel::from_satisfied_count(3),
            StrengthLevel::Moderate
        );
        assert_eq!(
            StrengthLevel::from_satisfied_count(4),
            StrengthLevel::Strong
        );
        assert_eq!(
            StrengthLevel::from_satisfied_count(5),
            StrengthLevel::Strong
        );
    }

    #[test]
    fn test_level_display_from_str_round_trip() {
        for level in [
            StrengthLevel::Invalid,
            StrengthLevel::Weak,
            StrengthLevel::Moderate,
            StrengthLevel::Strong,
        ] {
            let parsed: StrengthLevel = level.to_string().parse().expect("should parse back");
            assert_eq!(parsed, level);
        }
        assert_eq!("WEAK".parse::<StrengthLevel>(), Ok(StrengthLevel::Weak));
    }

    #[test]
    fn test_level_from_str_unknown() {
        let err = "epic".parse::<StrengthLevel>().unwrap_err();
        assert_eq!(err.to_string(), "unknown strength level: epic");
    }

    #[test]
    fn test_length_rule_has_no_suggestion() {
        assert_eq!(Rule::Length.suggestion(), None);
        for rule in &Rule::ALL[1..] {
            assert!(rule.suggestion().is_some());
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    fn sample() -> EvaluationResult {
        EvaluationResult {
            level: StrengthLevel::Strong,
            feedback: vec!["Add at least one digit.".to_string()],
            rules: Rule::ALL.iter().map(|&r| (r, r != Rule::Digit)).collect(),
        }
    }

    #[test]
    fn test_serializes_with_lowercase_keys() {
        let json = serde_json::to_string(&sample()).expect("should serialize");
        assert!(json.contains("\"level\":\"strong\""));
        assert!(json.contains("\"length\":true"));
        assert!(json.contains("\"digit\":false"));
    }

    #[test]
    fn test_round_trip() {
        let json = serde_json::to_string(&sample()).expect("should serialize");
        let back: EvaluationResult = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(back, sample());
    }
}
