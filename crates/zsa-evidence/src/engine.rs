//! Evidence Validation Engine
//!
//! Runs every claim through classification and the applicable validators,
//! then aggregates the checks into a single result.
//!
//! The engine holds only immutable tables, so one instance can serve any
//! number of threads.

use crate::aggregate::{calculate_confidence, categorize_claims, summarize};
use crate::classify::ClaimClassification;
use crate::config::EngineConfig;
use crate::error::EvidenceError;
use crate::investigation::InvestigationData;
use crate::patterns::{FalsePositivePattern, FALSE_POSITIVE_CATALOG};
use crate::types::{EvidenceValidationResult, ValidationCheck};
use crate::validators::{
    detect_false_positive, validate_citation_claim, validate_cross_source_consistency,
    validate_dependency_claim, validate_extension_claim, validate_file_existence,
    validate_general_claim,
};
use serde_json::Value;

/// Cross-checks claims against investigation evidence
#[derive(Debug, Clone)]
pub struct EvidenceValidationEngine {
    config: EngineConfig,
    /// Built-in catalog followed by configured extras
    false_positive_patterns: Vec<FalsePositivePattern>,
}

impl EvidenceValidationEngine {
    /// Create an engine with the built-in tables and default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            false_positive_patterns: FALSE_POSITIVE_CATALOG.clone(),
        }
    }

    /// Create an engine from configuration
    ///
    /// # Errors
    /// - `InvalidPattern` if an extra false-positive regex does not compile
    /// - `InvalidConfig` if thresholds or keywords are out of range
    pub fn with_config(config: EngineConfig) -> Result<Self, EvidenceError> {
        config.validate()?;

        let mut false_positive_patterns = FALSE_POSITIVE_CATALOG.clone();
        for extra in &config.extra_false_positive_patterns {
            let compiled = FalsePositivePattern::compile(extra.name.clone(), &extra.pattern)
                .map_err(|source| EvidenceError::InvalidPattern {
                    pattern: extra.pattern.clone(),
                    source,
                })?;
            false_positive_patterns.push(compiled);
        }

        let mut config = config;
        for keyword in &mut config.tracked_dependencies {
            *keyword = keyword.trim().to_lowercase();
        }

        Ok(Self {
            config,
            false_positive_patterns,
        })
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Active false-positive catalog, in match order
    #[inline]
    #[must_use]
    pub fn false_positive_patterns(&self) -> &[FalsePositivePattern] {
        &self.false_positive_patterns
    }

    /// Validate claims against evidence, stamping checks with the current time
    #[must_use]
    pub fn validate_technical_claims(
        &self,
        claims: &[String],
        investigation_data: &InvestigationData,
    ) -> EvidenceValidationResult {
        self.validate_technical_claims_at(claims, investigation_data, now_epoch_seconds())
    }

    /// Validate claims against evidence with an explicit run timestamp
    ///
    /// # Workflow
    /// 1. Classify each claim and run the applicable validators
    /// 2. Fall back to wording heuristics when nothing applied
    /// 3. Run the false-positive detector on every claim
    /// 4. Summarize, partition claims, score the run
    #[must_use]
    pub fn validate_technical_claims_at(
        &self,
        claims: &[String],
        investigation_data: &InvestigationData,
        timestamp: f64,
    ) -> EvidenceValidationResult {
        let mut checks = Vec::new();
        for claim in claims {
            self.check_claim(claim, investigation_data, timestamp, &mut checks);
        }

        let summary = summarize(&checks, timestamp);
        let (validated_claims, rejected_claims) = categorize_claims(claims, &checks);
        let confidence_score = calculate_confidence(&checks, &summary);

        tracing::info!(
            claims = claims.len(),
            checks = summary.total_checks,
            verified = summary.verified_count,
            failed = summary.failed_count,
            rejected = rejected_claims.len(),
            confidence = confidence_score,
            "Evidence validation complete"
        );

        EvidenceValidationResult {
            checks,
            summary,
            validated_claims,
            rejected_claims,
            confidence_score,
        }
    }

    /// Serialize a result to JSON with enums as their wire names
    pub fn to_dict(&self, validation_result: &EvidenceValidationResult) -> Result<Value, EvidenceError> {
        Ok(serde_json::to_value(validation_result)?)
    }

    fn check_claim(
        &self,
        claim: &str,
        data: &InvestigationData,
        timestamp: f64,
        checks: &mut Vec<ValidationCheck>,
    ) {
        let kinds = ClaimClassification::of(claim, &self.config);
        let start = checks.len();

        if kinds.extension {
            checks.push(validate_extension_claim(claim, data, timestamp));
        }
        if kinds.dependency {
            checks.push(validate_dependency_claim(
                claim,
                data,
                &self.config.tracked_dependencies,
                timestamp,
            ));
        }
        if kinds.citation {
            checks.push(validate_citation_claim(claim, data, timestamp));
        }
        if kinds.file_path {
            checks.push(validate_file_existence(claim, data, timestamp));
        }
        if kinds.cross_source {
            checks.push(validate_cross_source_consistency(claim, data, timestamp));
        }
        if !kinds.matched_any() {
            checks.push(validate_general_claim(claim, timestamp));
        }
        if let Some(check) = detect_false_positive(claim, &self.false_positive_patterns, timestamp) {
            checks.push(check);
        }

        for check in &checks[start..] {
            tracing::debug!(
                claim = claim,
                check_type = %check.check_type,
                result = %check.result,
                confidence = check.confidence,
                "Claim checked"
            );
        }
    }
}

impl Default for EvidenceValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Wall-clock time as fractional seconds since the Unix epoch
#[must_use]
pub fn now_epoch_seconds() -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let micros = chrono::Utc::now().timestamp_micros() as f64;
    micros / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ValidationResult, ValidationType};
    use serde_json::json;

    fn claims(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn empty_input_yields_well_formed_result() {
        let engine = EvidenceValidationEngine::new();
        let result = engine.validate_technical_claims(&[], &InvestigationData::empty());

        assert!(result.checks.is_empty());
        assert_eq!(result.summary.total_checks, 0);
        assert!(result.summary.overall_accuracy.abs() < f64::EPSILON);
        assert!((result.summary.false_positive_risk - 1.0).abs() < f64::EPSILON);
        assert!(result.confidence_score.abs() < f64::EPSILON);
    }

    #[test]
    fn check_order_is_type_specific_then_false_positive() {
        let engine = EvidenceValidationEngine::new();
        let data = InvestigationData::new(json!({
            "repository_analysis": { "test_files_found": ["a.js", "b.js"] }
        }));
        let result = engine.validate_technical_claims_at(
            &claims(&["Found .cy.js files when actual files are .js"]),
            &data,
            10.0,
        );

        let types: Vec<_> = result.checks.iter().map(|c| c.check_type).collect();
        assert_eq!(
            types,
            vec![
                ValidationType::ExtensionVerification,
                ValidationType::TechnicalClaimVerification,
            ]
        );
        assert!(result.checks.iter().all(|c| (c.timestamp - 10.0).abs() < f64::EPSILON));
    }

    #[test]
    fn unmatched_claim_gets_general_check_only() {
        let engine = EvidenceValidationEngine::new();
        let result = engine.validate_technical_claims(
            &claims(&["The build timed out"]),
            &InvestigationData::empty(),
        );
        assert_eq!(result.checks.len(), 1);
        assert_eq!(result.checks[0].verification_method, "technical_claim_heuristic");
        assert_eq!(result.validated_claims, claims(&["The build timed out"]));
    }

    #[test]
    fn extra_patterns_extend_catalog() {
        let config = EngineConfig::default().with_false_positive_pattern("guess", "guessed.*without.*logs");
        let engine = EvidenceValidationEngine::with_config(config).unwrap();
        assert_eq!(engine.false_positive_patterns().len(), FALSE_POSITIVE_CATALOG.len() + 1);

        let result = engine.validate_technical_claims(
            &claims(&["Root cause GUESSED without reading logs"]),
            &InvestigationData::empty(),
        );
        assert_eq!(result.rejected_claims.len(), 1);
        let failed = result.checks.iter().find(|c| c.result == ValidationResult::Failed).unwrap();
        assert!(failed.evidence[0].contains("guess"));
    }

    #[test]
    fn invalid_extra_pattern_is_rejected() {
        let config = EngineConfig::default().with_false_positive_pattern("broken", "([a-z");
        let err = EvidenceValidationEngine::with_config(config).unwrap_err();
        assert!(matches!(err, EvidenceError::InvalidPattern { .. }));
    }

    #[test]
    fn tracked_keywords_are_normalized() {
        let config = EngineConfig::default().with_tracked_dependencies([" Redux "]);
        let engine = EvidenceValidationEngine::with_config(config).unwrap();
        assert_eq!(engine.config().tracked_dependencies, vec!["redux"]);
    }

    #[test]
    fn to_dict_uses_wire_names() {
        let engine = EvidenceValidationEngine::new();
        let result = engine.validate_technical_claims(
            &claims(&["The build timed out"]),
            &InvestigationData::empty(),
        );
        let dict = engine.to_dict(&result).unwrap();
        assert_eq!(dict["checks"][0]["check_type"], "technical_claim_verification");
        assert_eq!(dict["checks"][0]["result"], "unable_to_verify");
    }

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EvidenceValidationEngine>();
    }
}
