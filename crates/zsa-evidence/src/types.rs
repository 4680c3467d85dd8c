//! Core value types for evidence validation
//!
//! Defines:
//! - Check types and outcomes (closed enums)
//! - Per-claim check records
//! - Run summary and the aggregate result
//!
//! All records are plain data; the engine owns the logic.

use crate::error::EvidenceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of verification a check performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationType {
    /// Named file paths exist in the repository inventory
    FileExistence,
    /// Dependency claims against the dependency analysis
    DependencyVerification,
    /// Claimed file extensions against actual file extensions
    ExtensionVerification,
    /// Bracketed source citations against investigation sources
    CitationVerification,
    /// Generic technical claim scoring and false-positive shapes
    TechnicalClaimVerification,
    /// Cited identifiers agree with the investigated sources
    CrossSourceConsistency,
}

impl ValidationType {
    /// Wire name of the check type
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FileExistence => "file_existence",
            Self::DependencyVerification => "dependency_verification",
            Self::ExtensionVerification => "extension_verification",
            Self::CitationVerification => "citation_verification",
            Self::TechnicalClaimVerification => "technical_claim_verification",
            Self::CrossSourceConsistency => "cross_source_consistency",
        }
    }
}

impl fmt::Display for ValidationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationResult {
    /// Evidence confirms the claim
    Verified,
    /// Evidence contradicts the claim
    Failed,
    /// Evidence confirms part of the claim
    PartiallyVerified,
    /// Evidence needed to decide is missing
    UnableToVerify,
}

impl ValidationResult {
    /// Wire name of the outcome
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::Failed => "failed",
            Self::PartiallyVerified => "partially_verified",
            Self::UnableToVerify => "unable_to_verify",
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outcome for one claim under one check type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationCheck {
    /// Which verification ran
    pub check_type: ValidationType,
    /// The original claim text
    pub claim: String,
    /// Outcome
    pub result: ValidationResult,
    /// Confidence in the outcome, 0.0..=1.0
    pub confidence: f64,
    /// Human-readable trail explaining the decision
    pub evidence: Vec<String>,
    /// Tag naming the check implementation
    pub verification_method: String,
    /// Seconds since the Unix epoch
    pub timestamp: f64,
}

impl ValidationCheck {
    /// Create a check, clamping confidence into 0.0..=1.0
    #[must_use]
    pub fn new(
        check_type: ValidationType,
        claim: impl Into<String>,
        result: ValidationResult,
        confidence: f64,
        evidence: Vec<String>,
        verification_method: impl Into<String>,
        timestamp: f64,
    ) -> Self {
        Self {
            check_type,
            claim: claim.into(),
            result,
            confidence: confidence.clamp(0.0, 1.0),
            evidence,
            verification_method: verification_method.into(),
            timestamp,
        }
    }

    /// Check if this check vetoes its claim
    #[inline]
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.result == ValidationResult::Failed
    }
}

/// Aggregate counts over the checks of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// Number of checks (not unique claims)
    pub total_checks: usize,
    /// Checks with `verified`
    pub verified_count: usize,
    /// Checks with `failed`
    pub failed_count: usize,
    /// Checks with `partially_verified`
    pub partially_verified_count: usize,
    /// Checks with `unable_to_verify`
    pub unable_to_verify_count: usize,
    /// `(verified + 0.5 * partial) / total`
    pub overall_accuracy: f64,
    /// `failed / total`, 1.0 when there are no checks
    pub false_positive_risk: f64,
    /// Seconds since the Unix epoch
    pub validation_timestamp: f64,
}

impl ValidationSummary {
    /// Sum of the four outcome counters
    #[inline]
    #[must_use]
    pub fn counted(&self) -> usize {
        self.verified_count
            + self.failed_count
            + self.partially_verified_count
            + self.unable_to_verify_count
    }
}

/// Top-level output of a validation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceValidationResult {
    /// Every check across every claim, in production order
    pub checks: Vec<ValidationCheck>,
    /// Run summary
    pub summary: ValidationSummary,
    /// Claims accepted by the run
    pub validated_claims: Vec<String>,
    /// Claims vetoed by at least one failed check
    pub rejected_claims: Vec<String>,
    /// Trust in the run as a whole, 0.0..=1.0
    pub confidence_score: f64,
}

impl EvidenceValidationResult {
    /// Checks recorded for one claim (exact text match)
    pub fn checks_for<'a>(&'a self, claim: &'a str) -> impl Iterator<Item = &'a ValidationCheck> + 'a {
        self.checks.iter().filter(move |c| c.claim == claim)
    }

    /// Check if the claim was rejected
    #[must_use]
    pub fn is_rejected(&self, claim: &str) -> bool {
        self.rejected_claims.iter().any(|c| c == claim)
    }

    /// Rebuild a result from its `to_dict` JSON form
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, EvidenceError> {
        Ok(serde_json::from_value(value)?)
    }
}
