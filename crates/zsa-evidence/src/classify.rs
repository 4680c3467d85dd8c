//! Claim classification
//!
//! Decides which validators apply to a claim. A claim may match several
//! classifiers; each match contributes an independent check.

use crate::config::EngineConfig;
use crate::patterns::{CITATION_CLAIM, DEPENDENCY_CLAIM, EXTENSION_CLAIM, FILE_PATH, JENKINS_CITATION};

/// True if the claim talks about file extensions or extension-typed files
#[must_use]
pub fn is_file_extension_claim(claim: &str) -> bool {
    EXTENSION_CLAIM.is_match(claim)
}

/// True if the claim talks about dependencies, manifests or framework versions
///
/// `tracked` are extra dependency keywords (lowercase) that also mark a
/// dependency claim.
#[must_use]
pub fn is_dependency_claim(claim: &str, tracked: &[String]) -> bool {
    if DEPENDENCY_CLAIM.is_match(claim) {
        return true;
    }
    let lower = claim.to_lowercase();
    tracked.iter().any(|keyword| lower.contains(keyword.as_str()))
}

/// True if the claim carries a bracketed source citation or a source URL
#[must_use]
pub fn is_citation_claim(claim: &str) -> bool {
    CITATION_CLAIM.is_match(claim)
}

/// True if the claim names a concrete repository path
#[must_use]
pub fn is_file_path_claim(claim: &str) -> bool {
    FILE_PATH.is_match(claim)
}

/// True if the claim cites a Jenkins job that can be cross-checked
#[must_use]
pub fn has_jenkins_citation(claim: &str) -> bool {
    JENKINS_CITATION.is_match(claim)
}

/// Which validators apply to one claim
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClaimClassification {
    /// Extension validator applies
    pub extension: bool,
    /// Dependency validator applies
    pub dependency: bool,
    /// Citation validator applies
    pub citation: bool,
    /// File existence validator applies (opt-in)
    pub file_path: bool,
    /// Cross-source consistency validator applies (opt-in)
    pub cross_source: bool,
}

impl ClaimClassification {
    /// Classify a claim under the given configuration
    #[must_use]
    pub fn of(claim: &str, config: &EngineConfig) -> Self {
        Self {
            extension: is_file_extension_claim(claim),
            dependency: is_dependency_claim(claim, &config.tracked_dependencies),
            citation: is_citation_claim(claim),
            file_path: config.file_existence_checks && is_file_path_claim(claim),
            cross_source: config.cross_source_checks && has_jenkins_citation(claim),
        }
    }

    /// Check if any type-specific validator applies
    #[inline]
    #[must_use]
    pub fn matched_any(&self) -> bool {
        self.extension || self.dependency || self.citation || self.file_path || self.cross_source
    }
}
