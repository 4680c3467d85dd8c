//! Citation validation
//!
//! `[Jenkins:...]` citations need an identified CI job, `[Repo:...]`
//! citations need a cloned repository. Other citation tags are recognized
//! by the classifier but carry no checkable source here.

use crate::investigation::InvestigationData;
use crate::patterns::{JENKINS_CITATION, REPO_CITATION};
use crate::types::{ValidationCheck, ValidationResult, ValidationType};

const METHOD: &str = "citation_source_check";

/// Validate the Jenkins and repository citations of a claim
#[must_use]
pub fn validate_citation_claim(
    claim: &str,
    data: &InvestigationData,
    timestamp: f64,
) -> ValidationCheck {
    let jenkins_verified = data.jenkins_job_name().is_some();
    let repo_verified = data.repository_cloned();

    let citations: Vec<(&str, bool)> = JENKINS_CITATION
        .find_iter(claim)
        .map(|m| (m.as_str(), jenkins_verified))
        .chain(
            REPO_CITATION
                .find_iter(claim)
                .map(|m| (m.as_str(), repo_verified)),
        )
        .collect();

    if citations.is_empty() {
        return ValidationCheck::new(
            ValidationType::CitationVerification,
            claim,
            ValidationResult::UnableToVerify,
            0.0,
            vec!["No verifiable Jenkins or Repo citations found".to_string()],
            METHOD,
            timestamp,
        );
    }

    let evidence: Vec<String> = citations
        .iter()
        .map(|(citation, verified)| {
            if *verified {
                format!("{citation}: verified")
            } else {
                format!("{citation}: unverified")
            }
        })
        .collect();

    let total = citations.len();
    let verified_citations = citations.iter().filter(|(_, v)| *v).count();
    let unverified_citations = total - verified_citations;
    #[allow(clippy::cast_precision_loss)]
    let ratio = verified_citations as f64 / total as f64;

    let (result, confidence) = if verified_citations > 0 && unverified_citations > 0 {
        (ValidationResult::PartiallyVerified, 0.6 + ratio * 0.2)
    } else if ratio >= 0.8 {
        (ValidationResult::Verified, 0.9)
    } else if ratio >= 0.5 {
        (ValidationResult::PartiallyVerified, 0.7)
    } else {
        (ValidationResult::Failed, 0.5)
    };

    ValidationCheck::new(
        ValidationType::CitationVerification,
        claim,
        result,
        confidence,
        evidence,
        METHOD,
        timestamp,
    )
}
