//! Fallback scoring for claims no specific validator recognizes

use crate::patterns::{CONFIDENT_WORDS, SPECIFICITY_WORDS, UNCERTAIN_WORDS};
use crate::types::{ValidationCheck, ValidationResult, ValidationType};

const METHOD: &str = "technical_claim_heuristic";

/// Score a claim from its wording alone
///
/// Scores are kept in tenths: neutral 5, confident wording +2, hedging -1,
/// a number with a specificity keyword +2.
#[must_use]
pub fn validate_general_claim(claim: &str, timestamp: f64) -> ValidationCheck {
    let lower = claim.to_lowercase();
    let mut tenths: u8 = 5;
    let mut evidence = Vec::new();

    if let Some(word) = first_word_in(&lower, CONFIDENT_WORDS) {
        tenths += 2;
        evidence.push(format!("Confident language: '{word}'"));
    }
    if let Some(word) = first_word_in(&lower, UNCERTAIN_WORDS) {
        tenths -= 1;
        evidence.push(format!("Uncertain language: '{word}'"));
    }
    if lower.chars().any(|c| c.is_ascii_digit()) {
        if let Some(word) = first_word_in(&lower, SPECIFICITY_WORDS) {
            tenths += 2;
            evidence.push(format!("Specific reference: numeric {word}"));
        }
    }

    let result = match tenths {
        8..=u8::MAX => ValidationResult::Verified,
        6..=7 => ValidationResult::PartiallyVerified,
        4..=5 => ValidationResult::UnableToVerify,
        _ => ValidationResult::Failed,
    };
    let confidence = (f64::from(tenths) / 10.0).min(1.0);
    evidence.push(format!("Heuristic score: {confidence:.1}"));

    ValidationCheck::new(
        ValidationType::TechnicalClaimVerification,
        claim,
        result,
        confidence,
        evidence,
        METHOD,
        timestamp,
    )
}

fn first_word_in<'a>(text: &str, words: &[&'a str]) -> Option<&'a str> {
    words.iter().copied().find(|w| text.contains(w))
}
