//! File extension validation
//!
//! Compares the extensions a claim mentions with the extensions of the
//! files the repository scan actually found. Only the text after the last
//! `.` of a file name counts, so `login.cy.js` is a `js` file. The `.cy.js`
//! vs `.js` misattribution gets its own verdict.

use crate::investigation::InvestigationData;
use crate::patterns::CLAIMED_EXTENSION;
use crate::types::{ValidationCheck, ValidationResult, ValidationType};
use std::collections::BTreeSet;

const METHOD: &str = "file_extension_analysis";

/// Validate the extensions named in a claim against the file inventory
#[must_use]
pub fn validate_extension_claim(
    claim: &str,
    data: &InvestigationData,
    timestamp: f64,
) -> ValidationCheck {
    let claimed = claimed_extensions(claim);
    let files = data.test_files_found();

    if files.is_empty() {
        return ValidationCheck::new(
            ValidationType::ExtensionVerification,
            claim,
            ValidationResult::UnableToVerify,
            0.0,
            vec!["No repository file data available for extension verification".to_string()],
            METHOD,
            timestamp,
        );
    }

    let actual = actual_extensions(&files);
    let mut evidence = vec![
        format!("Repository files: {}", files.join(", ")),
        format!("Actual extensions: {}", join_set(&actual)),
        format!("Claimed extensions: {}", join_set(&claimed)),
    ];

    let (result, confidence) =
        if claimed.contains("cy") && !actual.contains("cy") && actual.contains("js") {
            evidence.push("Extension mismatch detected: .cy.js vs .js".to_string());
            (ValidationResult::Failed, 0.9)
        } else if claimed.is_subset(&actual) {
            evidence.push("All claimed extensions present in repository".to_string());
            (ValidationResult::Verified, 0.95)
        } else {
            let missing: BTreeSet<String> = claimed.difference(&actual).cloned().collect();
            evidence.push(format!("Extensions not found in repository: {}", join_set(&missing)));
            (ValidationResult::Failed, 0.85)
        };

    ValidationCheck::new(
        ValidationType::ExtensionVerification,
        claim,
        result,
        confidence,
        evidence,
        METHOD,
        timestamp,
    )
}

/// Lowercased tokens following each `.` in the claim
fn claimed_extensions(claim: &str) -> BTreeSet<String> {
    CLAIMED_EXTENSION
        .captures_iter(claim)
        .map(|cap| cap[1].to_lowercase())
        .collect()
}

/// Lowercased text after the last `.` of each file name
fn actual_extensions(files: &[&str]) -> BTreeSet<String> {
    files
        .iter()
        .filter_map(|path| {
            let name = path.rsplit('/').next().unwrap_or(*path);
            name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase())
        })
        .filter(|ext| !ext.is_empty())
        .collect()
}

fn join_set(set: &BTreeSet<String>) -> String {
    if set.is_empty() {
        return "(none)".to_string();
    }
    set.iter().cloned().collect::<Vec<_>>().join(", ")
}
