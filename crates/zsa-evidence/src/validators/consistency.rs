//! Cross-source consistency
//!
//! A claim citing `[Jenkins:<job>:...]` must cite the job the
//! investigation actually identified.

use crate::investigation::InvestigationData;
use crate::patterns::JENKINS_CITATION;
use crate::types::{ValidationCheck, ValidationResult, ValidationType};
use serde_json::Value;

const METHOD: &str = "cross_source_comparison";

/// Compare cited Jenkins jobs with the identified job name
#[must_use]
pub fn validate_cross_source_consistency(
    claim: &str,
    data: &InvestigationData,
    timestamp: f64,
) -> ValidationCheck {
    let check = |result, confidence, evidence| {
        ValidationCheck::new(
            ValidationType::CrossSourceConsistency,
            claim,
            result,
            confidence,
            evidence,
            METHOD,
            timestamp,
        )
    };

    let Some(actual) = data.jenkins_job_name().map(|v| match v {
        Value::String(s) => s.trim().to_string(),
        other => other.to_string(),
    }) else {
        return check(
            ValidationResult::UnableToVerify,
            0.0,
            vec!["No identified Jenkins job to compare against".to_string()],
        );
    };

    let cited: Vec<&str> = JENKINS_CITATION
        .captures_iter(claim)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().trim())
        .collect();

    if cited.is_empty() {
        return check(
            ValidationResult::UnableToVerify,
            0.0,
            vec!["No Jenkins job cited in claim".to_string()],
        );
    }

    let mut matching = 0usize;
    let mut evidence = vec![format!("Identified Jenkins job: {actual}")];
    for job in &cited {
        if job.eq_ignore_ascii_case(&actual) {
            matching += 1;
            evidence.push(format!("Cited job '{job}' matches"));
        } else {
            evidence.push(format!("Cited job '{job}' differs from identified job"));
        }
    }

    let (result, confidence) = if matching == cited.len() {
        (ValidationResult::Verified, 0.9)
    } else if matching == 0 {
        (ValidationResult::Failed, 0.85)
    } else {
        (ValidationResult::PartiallyVerified, 0.6)
    };

    check(result, confidence, evidence)
}
