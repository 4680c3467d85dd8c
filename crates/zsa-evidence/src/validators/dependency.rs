//! Dependency claim validation
//!
//! A claim that names a tracked dependency the dependency analysis never
//! mentions is failed outright. Framework claims are matched against the
//! detected framework.

use crate::investigation::InvestigationData;
use crate::types::{ValidationCheck, ValidationResult, ValidationType};
use serde_json::Value;

const METHOD: &str = "dependency_analysis_check";

/// Validate a dependency claim against the dependency analysis
///
/// `tracked` keywords are expected lowercase.
#[must_use]
pub fn validate_dependency_claim(
    claim: &str,
    data: &InvestigationData,
    tracked: &[String],
    timestamp: f64,
) -> ValidationCheck {
    let check = |result, confidence, evidence| {
        ValidationCheck::new(
            ValidationType::DependencyVerification,
            claim,
            result,
            confidence,
            evidence,
            METHOD,
            timestamp,
        )
    };

    let Some(analysis) = data.dependency_analysis() else {
        return check(
            ValidationResult::UnableToVerify,
            0.0,
            vec!["No dependency analysis data available".to_string()],
        );
    };

    let claim_lower = claim.to_lowercase();
    let analysis_text = Value::Object(analysis.clone()).to_string().to_lowercase();

    if let Some(missing) = tracked
        .iter()
        .find(|k| claim_lower.contains(k.as_str()) && !analysis_text.contains(k.as_str()))
    {
        return check(
            ValidationResult::Failed,
            0.9,
            vec![
                format!("{} not found in dependency analysis", display_name(missing)),
                format!("Dependency analysis: {analysis_text}"),
            ],
        );
    }

    let framework = analysis
        .get("framework")
        .and_then(Value::as_str)
        .map(str::to_lowercase);

    if claim_lower.contains("cypress") && framework.as_deref().is_some_and(|f| f.contains("cypress")) {
        let version = analysis
            .get("version")
            .map_or_else(|| "unknown".to_string(), render_scalar);
        return check(
            ValidationResult::Verified,
            0.9,
            vec![format!("Cypress framework confirmed (version {version})")],
        );
    }

    check(
        ValidationResult::PartiallyVerified,
        0.6,
        vec![format!(
            "Dependency analysis present but claim not specifically confirmed (framework: {})",
            framework.as_deref().unwrap_or("unknown")
        )],
    )
}

/// Known display casing for tracked keywords
fn display_name(keyword: &str) -> String {
    match keyword {
        "mobx" => "MobX".to_string(),
        other => other.to_string(),
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
