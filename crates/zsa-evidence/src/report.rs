//! Trust gate and human-readable report

use crate::config::TrustThresholds;
use crate::types::{EvidenceValidationResult, ValidationResult};
use serde::{Deserialize, Serialize};

/// Whether downstream consumers should act on a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustDecision {
    /// Both thresholds were met
    pub trusted: bool,
    /// One entry per violated threshold; empty when trusted
    pub reasons: Vec<String>,
}

impl EvidenceValidationResult {
    /// Gate the run against confidence and false-positive thresholds
    #[must_use]
    pub fn trust_decision(&self, thresholds: &TrustThresholds) -> TrustDecision {
        let mut reasons = Vec::new();

        if self.confidence_score < thresholds.min_confidence {
            reasons.push(format!(
                "confidence {:.2} below minimum {:.2}",
                self.confidence_score, thresholds.min_confidence
            ));
        }
        if self.summary.false_positive_risk > thresholds.max_false_positive_risk {
            reasons.push(format!(
                "false-positive risk {:.2} above maximum {:.2}",
                self.summary.false_positive_risk, thresholds.max_false_positive_risk
            ));
        }

        TrustDecision {
            trusted: reasons.is_empty(),
            reasons,
        }
    }
}

/// Render a markdown report of a run
#[must_use]
pub fn render_report(result: &EvidenceValidationResult) -> String {
    let summary = &result.summary;
    let mut out = String::new();

    out.push_str("# Evidence Validation Report\n\n");
    out.push_str("| Metric | Value |\n");
    out.push_str("|---|---|\n");
    out.push_str(&format!("| Total checks | {} |\n", summary.total_checks));
    out.push_str(&format!("| Verified | {} |\n", summary.verified_count));
    out.push_str(&format!(
        "| Partially verified | {} |\n",
        summary.partially_verified_count
    ));
    out.push_str(&format!(
        "| Unable to verify | {} |\n",
        summary.unable_to_verify_count
    ));
    out.push_str(&format!("| Failed | {} |\n", summary.failed_count));
    out.push_str(&format!(
        "| Overall accuracy | {:.2} |\n",
        summary.overall_accuracy
    ));
    out.push_str(&format!(
        "| False-positive risk | {:.2} |\n",
        summary.false_positive_risk
    ));
    out.push_str(&format!("| Confidence | {:.2} |\n", result.confidence_score));

    out.push_str(&format!(
        "\n## Rejected claims ({})\n\n",
        result.rejected_claims.len()
    ));
    if result.rejected_claims.is_empty() {
        out.push_str("None.\n");
    }
    for claim in &result.rejected_claims {
        out.push_str(&format!("- {claim}\n"));
        for check in result
            .checks_for(claim)
            .filter(|c| c.result == ValidationResult::Failed)
        {
            out.push_str(&format!(
                "  - {} ({}, {:.2})\n",
                check.check_type, check.verification_method, check.confidence
            ));
            for line in &check.evidence {
                out.push_str(&format!("    - {line}\n"));
            }
        }
    }

    out.push_str(&format!(
        "\n## Validated claims ({})\n\n",
        result.validated_claims.len()
    ));
    if result.validated_claims.is_empty() {
        out.push_str("None.\n");
    }
    for claim in &result.validated_claims {
        out.push_str(&format!("- {claim}\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::summarize;
    use crate::types::{ValidationCheck, ValidationType};

    fn result_with(confidence_score: f64, failed: usize, verified: usize) -> EvidenceValidationResult {
        let mut checks = Vec::new();
        for i in 0..failed {
            checks.push(ValidationCheck::new(
                ValidationType::DependencyVerification,
                format!("bad {i}"),
                ValidationResult::Failed,
                0.9,
                vec!["MobX not found in dependency analysis".to_string()],
                "dependency_analysis_check",
                0.0,
            ));
        }
        for i in 0..verified {
            checks.push(ValidationCheck::new(
                ValidationType::CitationVerification,
                format!("good {i}"),
                ValidationResult::Verified,
                0.95,
                vec![],
                "citation_source_check",
                0.0,
            ));
        }
        let summary = summarize(&checks, 0.0);
        EvidenceValidationResult {
            rejected_claims: (0..failed).map(|i| format!("bad {i}")).collect(),
            validated_claims: (0..verified).map(|i| format!("good {i}")).collect(),
            checks,
            summary,
            confidence_score,
        }
    }

    #[test]
    fn clean_confident_run_is_trusted() {
        let decision = result_with(0.9, 0, 4).trust_decision(&TrustThresholds::default());
        assert!(decision.trusted);
        assert!(decision.reasons.is_empty());
    }

    #[test]
    fn each_violation_is_reported() {
        let decision = result_with(0.5, 1, 1).trust_decision(&TrustThresholds::default());
        assert!(!decision.trusted);
        assert_eq!(decision.reasons.len(), 2);
        assert!(decision.reasons[0].starts_with("confidence 0.50"));
        assert!(decision.reasons[1].starts_with("false-positive risk 0.50"));
    }

    #[test]
    fn empty_run_is_untrusted() {
        let result = result_with(0.0, 0, 0);
        let decision = result.trust_decision(&TrustThresholds::default());
        assert!(!decision.trusted);
    }

    #[test]
    fn report_lists_failed_evidence_under_rejected_claim() {
        let report = render_report(&result_with(0.4, 1, 1));
        assert!(report.contains("## Rejected claims (1)"));
        assert!(report.contains("- bad 0"));
        assert!(report.contains("    - MobX not found in dependency analysis"));
        assert!(report.contains("## Validated claims (1)"));
        assert!(report.contains("| Failed | 1 |"));
    }

    #[test]
    fn report_marks_empty_sections() {
        let report = render_report(&result_with(0.0, 0, 0));
        assert_eq!(report.matches("None.").count(), 2);
    }

    #[test]
    fn report_layout_is_stable() {
        let report = render_report(&result_with(0.4, 1, 0));
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines[0], "# Evidence Validation Report");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "| Metric | Value |");
        assert_eq!(lines[11], "| Confidence | 0.40 |");
        assert_eq!(&lines[12..16], ["", "## Rejected claims (1)", "", "- bad 0"]);
        assert_eq!(lines[16], "  - dependency_verification (dependency_analysis_check, 0.90)");
        assert!(report.ends_with("## Validated claims (0)\n\nNone.\n"));
    }
}
