//! False-positive pattern detection
//!
//! Runs on every claim regardless of classification. Reports only the
//! first matching pattern.

use crate::patterns::FalsePositivePattern;
use crate::types::{ValidationCheck, ValidationResult, ValidationType};

const METHOD: &str = "false_positive_pattern_match";

/// Match a claim against an ordered pattern catalog
///
/// Returns `None` when no pattern matches.
#[must_use]
pub fn detect_false_positive(
    claim: &str,
    patterns: &[FalsePositivePattern],
    timestamp: f64,
) -> Option<ValidationCheck> {
    let (index, pattern) = patterns
        .iter()
        .enumerate()
        .find(|(_, p)| p.is_match(claim))?;

    Some(ValidationCheck::new(
        ValidationType::TechnicalClaimVerification,
        claim,
        ValidationResult::Failed,
        0.95,
        vec![
            format!("Matched false-positive pattern {index} ({})", pattern.name),
            format!("Pattern: {}", pattern.regex.as_str()),
        ],
        METHOD,
        timestamp,
    ))
}
