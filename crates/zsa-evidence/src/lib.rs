//! ZSA Evidence - Evidence Validation Engine
//!
//! Cross-checks the technical claims of an automated failure analysis
//! against the data its investigation phase collected:
//! - Classifies each claim (extension, dependency, citation, file path)
//! - Runs the matching validators against the investigation evidence
//! - Flags known false-positive inference shapes
//! - Partitions claims into validated and rejected
//! - Scores the run and gates it on trust thresholds
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use zsa_evidence::{EvidenceValidationEngine, InvestigationData};
//!
//! let engine = EvidenceValidationEngine::new();
//! let data = InvestigationData::new(json!({
//!     "repository_analysis": {
//!         "test_files_found": ["cypress/e2e/login.js"],
//!         "dependency_analysis": { "cypress": { "version": "12.0.0" } }
//!     }
//! }));
//!
//! let claims = vec!["MobX dependency issue breaks the store".to_string()];
//! let result = engine.validate_technical_claims(&claims, &data);
//!
//! assert!(result.is_rejected(&claims[0]));
//! ```

#![warn(unreachable_pub)]

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod investigation;
pub mod patterns;
pub mod report;
pub mod types;
pub mod validators;

// Re-exports for convenience
pub use aggregate::{calculate_confidence, categorize_claims, summarize};
pub use classify::ClaimClassification;
pub use config::{EngineConfig, PatternConfig, TrustThresholds};
pub use engine::{now_epoch_seconds, EvidenceValidationEngine};
pub use error::EvidenceError;
pub use investigation::InvestigationData;
pub use patterns::{FalsePositivePattern, FALSE_POSITIVE_CATALOG};
pub use report::{render_report, TrustDecision};
pub use types::{
    EvidenceValidationResult, ValidationCheck, ValidationResult, ValidationSummary,
    ValidationType,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for running validations
    pub use crate::{
        EngineConfig, EvidenceError, EvidenceValidationEngine, EvidenceValidationResult,
        InvestigationData, TrustDecision, TrustThresholds, ValidationCheck, ValidationResult,
        ValidationType,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
