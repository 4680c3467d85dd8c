//! File existence validation
//!
//! Paths named in a claim must appear in the repository inventory, either
//! exactly or as a suffix of an inventory path (claims often drop the
//! leading directories).

use crate::investigation::InvestigationData;
use crate::patterns::FILE_PATH;
use crate::types::{ValidationCheck, ValidationResult, ValidationType};

const METHOD: &str = "file_inventory_lookup";

/// Validate the repository paths named in a claim
#[must_use]
pub fn validate_file_existence(
    claim: &str,
    data: &InvestigationData,
    timestamp: f64,
) -> ValidationCheck {
    let check = |result, confidence, evidence| {
        ValidationCheck::new(
            ValidationType::FileExistence,
            claim,
            result,
            confidence,
            evidence,
            METHOD,
            timestamp,
        )
    };

    let files = data.test_files_found();
    if files.is_empty() {
        return check(
            ValidationResult::UnableToVerify,
            0.0,
            vec!["No repository file data available for existence check".to_string()],
        );
    }

    let claimed: Vec<&str> = FILE_PATH.find_iter(claim).map(|m| m.as_str()).collect();
    if claimed.is_empty() {
        return check(
            ValidationResult::UnableToVerify,
            0.0,
            vec!["No file paths found in claim".to_string()],
        );
    }

    let mut found = 0usize;
    let evidence: Vec<String> = claimed
        .iter()
        .map(|path| {
            if files.iter().any(|f| path_matches(f, path)) {
                found += 1;
                format!("{path}: present in repository")
            } else {
                format!("{path}: not found in repository")
            }
        })
        .collect();

    let (result, confidence) = if found == claimed.len() {
        (ValidationResult::Verified, 0.9)
    } else if found > 0 {
        (ValidationResult::PartiallyVerified, 0.6)
    } else {
        (ValidationResult::Failed, 0.85)
    };

    check(result, confidence, evidence)
}

/// Exact match, or `claimed` is a trailing path of `actual`
fn path_matches(actual: &str, claimed: &str) -> bool {
    let actual = actual.trim_start_matches("./");
    let claimed = claimed.trim_start_matches("./");
    actual == claimed
        || actual
            .strip_suffix(claimed)
            .is_some_and(|prefix| prefix.ends_with('/'))
        || claimed
            .strip_suffix(actual)
            .is_some_and(|prefix| prefix.ends_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn inventory() -> InvestigationData {
        InvestigationData::new(json!({
            "repository_analysis": {
                "test_files_found": ["cypress/e2e/login.cy.js", "cypress/support/commands.js"]
            }
        }))
    }

    #[test]
    fn all_paths_present_is_verified() {
        let check = validate_file_existence(
            "cypress/e2e/login.cy.js and support/commands.js were updated",
            &inventory(),
            1.0,
        );
        assert_eq!(check.result, ValidationResult::Verified);
        assert_eq!(check.evidence.len(), 2);
    }

    #[test]
    fn some_paths_present_is_partial() {
        let check = validate_file_existence(
            "e2e/login.cy.js and e2e/logout.cy.js fail",
            &inventory(),
            1.0,
        );
        assert_eq!(check.result, ValidationResult::PartiallyVerified);
    }

    #[test]
    fn no_paths_present_fails() {
        let check = validate_file_existence("src/store/user.ts is broken", &inventory(), 1.0);
        assert_eq!(check.result, ValidationResult::Failed);
    }

    #[test]
    fn missing_inventory_is_unable_to_verify() {
        let check =
            validate_file_existence("src/app.ts", &InvestigationData::empty(), 1.0);
        assert_eq!(check.result, ValidationResult::UnableToVerify);
    }

    #[test]
    fn suffix_must_align_on_directory() {
        assert!(path_matches("cypress/e2e/login.cy.js", "e2e/login.cy.js"));
        assert!(!path_matches("cypress/e2e/relogin.cy.js", "login.cy.js"));
        assert!(path_matches("./a/b.js", "a/b.js"));
    }
}
