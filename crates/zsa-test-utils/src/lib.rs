//! Testing utilities for the evidence validation workspace
//!
//! Investigation fixtures, canonical claim sets, and result assertions.

#![allow(missing_docs)]

use serde_json::{json, Map, Value};
use zsa_evidence::{EvidenceValidationResult, InvestigationData, ValidationResult};

/// Builder for investigation JSON documents
#[derive(Debug, Clone, Default)]
pub struct InvestigationBuilder {
    job_name: Option<Value>,
    repository_cloned: Option<bool>,
    test_files: Option<Vec<String>>,
    dependency_analysis: Option<Map<String, Value>>,
}

impl InvestigationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jenkins_job(mut self, name: &str) -> Self {
        self.job_name = Some(Value::String(name.to_string()));
        self
    }

    pub fn repository_cloned(mut self, cloned: bool) -> Self {
        self.repository_cloned = Some(cloned);
        self
    }

    pub fn test_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.test_files = Some(files.into_iter().map(Into::into).collect());
        self
    }

    pub fn dependency(mut self, key: &str, value: Value) -> Self {
        self.dependency_analysis
            .get_or_insert_with(Map::new)
            .insert(key.to_string(), value);
        self
    }

    pub fn to_value(&self) -> Value {
        let mut root = Map::new();

        if let Some(job) = &self.job_name {
            root.insert(
                "jenkins_intelligence".to_string(),
                json!({ "metadata": { "job_name": job } }),
            );
        }

        let mut repo = Map::new();
        if let Some(cloned) = self.repository_cloned {
            repo.insert("repository_cloned".to_string(), Value::Bool(cloned));
        }
        if let Some(files) = &self.test_files {
            repo.insert("test_files_found".to_string(), json!(files));
        }
        if let Some(deps) = &self.dependency_analysis {
            repo.insert("dependency_analysis".to_string(), Value::Object(deps.clone()));
        }
        if !repo.is_empty() {
            root.insert("repository_analysis".to_string(), Value::Object(repo));
        }

        Value::Object(root)
    }

    pub fn build(&self) -> InvestigationData {
        InvestigationData::new(self.to_value())
    }
}

/// A fully populated Cypress investigation
pub fn cypress_investigation() -> InvestigationData {
    InvestigationBuilder::new()
        .jenkins_job("test-pipeline")
        .repository_cloned(true)
        .test_files(["cypress/e2e/login.js", "cypress/e2e/cluster.js"])
        .dependency("framework", json!("cypress"))
        .dependency("version", json!("12.17.4"))
        .build()
}

/// Claims the engine must reject against [`cypress_investigation`]
pub fn known_false_claims() -> Vec<String> {
    claims(&[
        "Tests use .cy.js extension when actual files are .js",
        "MobX dependency issue breaks the store",
    ])
}

/// Claims the engine must accept against [`cypress_investigation`]
pub fn known_true_claims() -> Vec<String> {
    claims(&[
        "[Jenkins:test-pipeline:123:FAILURE] build failed",
        "[Repo:main:cypress/e2e/login.js:10] login test fails",
        "Cypress framework version 12.17.4 is installed",
    ])
}

pub fn claims(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Count of checks with the given outcome
pub fn count_results(result: &EvidenceValidationResult, outcome: ValidationResult) -> usize {
    result.checks.iter().filter(|c| c.result == outcome).count()
}

/// Assert the validated and rejected lists partition the input claims
pub fn assert_partition(claims: &[String], result: &EvidenceValidationResult) {
    assert_eq!(
        result.validated_claims.len() + result.rejected_claims.len(),
        claims.len(),
        "every claim lands in exactly one list"
    );
    for claim in claims {
        let validated = result.validated_claims.contains(claim);
        let rejected = result.rejected_claims.contains(claim);
        assert!(validated ^ rejected, "claim {claim:?} must be in exactly one list");
    }
}

/// Assert every counter, rate and score is well formed
pub fn assert_well_formed(result: &EvidenceValidationResult) {
    let summary = &result.summary;
    assert_eq!(summary.total_checks, result.checks.len());
    assert_eq!(summary.counted(), summary.total_checks);
    for value in [
        summary.overall_accuracy,
        summary.false_positive_risk,
        result.confidence_score,
    ] {
        assert!((0.0..=1.0).contains(&value), "{value} out of range");
    }
    for check in &result.checks {
        assert!((0.0..=1.0).contains(&check.confidence));
    }
}
