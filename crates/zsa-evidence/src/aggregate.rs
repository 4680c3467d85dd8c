//! Run aggregation
//!
//! Turns the flat list of checks into:
//! - A [`ValidationSummary`] with outcome counts and rates
//! - The validated / rejected claim partition
//! - The overall confidence score

use crate::types::{ValidationCheck, ValidationResult, ValidationSummary};
use std::collections::HashMap;

/// Count outcomes over all checks
///
/// With no checks the summary reports accuracy 0.0 and a false-positive
/// risk of 1.0.
#[must_use]
pub fn summarize(checks: &[ValidationCheck], validation_timestamp: f64) -> ValidationSummary {
    let mut summary = ValidationSummary {
        total_checks: checks.len(),
        verified_count: 0,
        failed_count: 0,
        partially_verified_count: 0,
        unable_to_verify_count: 0,
        overall_accuracy: 0.0,
        false_positive_risk: 1.0,
        validation_timestamp,
    };

    for check in checks {
        match check.result {
            ValidationResult::Verified => summary.verified_count += 1,
            ValidationResult::Failed => summary.failed_count += 1,
            ValidationResult::PartiallyVerified => summary.partially_verified_count += 1,
            ValidationResult::UnableToVerify => summary.unable_to_verify_count += 1,
        }
    }

    if summary.total_checks > 0 {
        let total = as_f64(summary.total_checks);
        summary.overall_accuracy = (as_f64(summary.verified_count)
            + 0.5 * as_f64(summary.partially_verified_count))
            / total;
        summary.false_positive_risk = as_f64(summary.failed_count) / total;
    }

    summary
}

/// Split claims into (validated, rejected)
///
/// A single failed check rejects its claim. Claims without checks, and
/// claims whose checks are merely inconclusive, are validated.
#[must_use]
pub fn categorize_claims(
    claims: &[String],
    checks: &[ValidationCheck],
) -> (Vec<String>, Vec<String>) {
    let mut by_claim: HashMap<&str, ClaimTally> = HashMap::new();
    for check in checks {
        let tally = by_claim.entry(check.claim.as_str()).or_default();
        tally.total += 1;
        match check.result {
            ValidationResult::Failed => tally.failed = true,
            ValidationResult::Verified => tally.verified += 1,
            ValidationResult::PartiallyVerified | ValidationResult::UnableToVerify => {}
        }
    }

    let mut validated = Vec::new();
    let mut rejected = Vec::new();

    for claim in claims {
        match by_claim.get(claim.as_str()) {
            None => validated.push(claim.clone()),
            Some(tally) if tally.failed => rejected.push(claim.clone()),
            Some(tally) if tally.verified_ratio() >= 0.5 => validated.push(claim.clone()),
            Some(_) => validated.push(claim.clone()),
        }
    }

    (validated, rejected)
}

/// Overall confidence of a run
///
/// `0.5 * accuracy + 0.3 * verification rate + 0.2 * mean check confidence`,
/// clamped to 0.0..=1.0.
#[must_use]
pub fn calculate_confidence(checks: &[ValidationCheck], summary: &ValidationSummary) -> f64 {
    if summary.total_checks == 0 || checks.is_empty() {
        return 0.0;
    }

    let verification_rate = as_f64(summary.verified_count) / as_f64(summary.total_checks);
    let avg_check_confidence =
        checks.iter().map(|c| c.confidence).sum::<f64>() / as_f64(checks.len());

    let overall = 0.5 * summary.overall_accuracy
        + 0.3 * verification_rate
        + 0.2 * avg_check_confidence;

    overall.clamp(0.0, 1.0)
}

#[derive(Debug, Default)]
struct ClaimTally {
    total: usize,
    verified: usize,
    failed: bool,
}

impl ClaimTally {
    fn verified_ratio(&self) -> f64 {
        as_f64(self.verified) / as_f64(self.total)
    }
}

#[allow(clippy::cast_precision_loss)]
fn as_f64(n: usize) -> f64 {
    n as f64
}
