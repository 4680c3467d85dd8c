//! Invariants over arbitrary claims and evidence shapes

use proptest::prelude::*;
use serde_json::{json, Value};
use zsa_evidence::{EngineConfig, EvidenceValidationEngine, InvestigationData, ValidationResult};
use zsa_test_utils::{assert_partition, assert_well_formed};

/// Claim fragments that steer claims into every classifier
const FRAGMENTS: &[&str] = &[
    ".cy.js",
    ".js",
    "file extension",
    "MobX",
    "dependency",
    "package.json",
    "without",
    "verification",
    "[Jenkins:test-pipeline:1:FAILURE]",
    "[Repo:main:src/a.js:3]",
    "cypress/e2e/login.js",
    "verified",
    "probably",
    "version 12",
    "when actual",
];

fn claim_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z .:/\\[\\]0-9-]{0,60}",
        proptest::collection::vec(proptest::sample::select(FRAGMENTS), 1..6)
            .prop_map(|parts| parts.join(" ")),
    ]
}

fn evidence_strategy() -> impl Strategy<Value = Value> {
    let files = proptest::collection::vec("[a-z/]{1,12}\\.(js|cy\\.js|ts)", 0..5);
    let job = prop_oneof![Just(Value::Null), Just(json!("")), Just(json!("test-pipeline"))];
    let deps = prop_oneof![
        Just(Value::Null),
        Just(json!({})),
        Just(json!({ "framework": "cypress", "version": "12.0.0" })),
        Just(json!({ "mobx": "6.0.0" })),
        Just(json!(["not", "a", "map"])),
    ];
    (files, job, deps, any::<bool>()).prop_map(|(files, job, deps, cloned)| {
        json!({
            "jenkins_intelligence": { "metadata": { "job_name": job } },
            "repository_analysis": {
                "repository_cloned": cloned,
                "test_files_found": files,
                "dependency_analysis": deps
            }
        })
    })
}

proptest! {
    #[test]
    fn prop_claims_are_partitioned(
        claims in proptest::collection::vec(claim_strategy(), 0..12),
        evidence in evidence_strategy(),
    ) {
        let engine = EvidenceValidationEngine::new();
        let result = engine.validate_technical_claims(&claims, &InvestigationData::new(evidence));
        assert_partition(&claims, &result);
    }

    #[test]
    fn prop_counts_and_scores_are_well_formed(
        claims in proptest::collection::vec(claim_strategy(), 0..12),
        evidence in evidence_strategy(),
        file_checks in any::<bool>(),
        cross_checks in any::<bool>(),
    ) {
        let config = EngineConfig::default()
            .with_file_existence_checks(file_checks)
            .with_cross_source_checks(cross_checks);
        let engine = EvidenceValidationEngine::with_config(config).unwrap();
        let result = engine.validate_technical_claims(&claims, &InvestigationData::new(evidence));
        assert_well_formed(&result);
    }

    #[test]
    fn prop_rejection_requires_failed_check(
        claims in proptest::collection::vec(claim_strategy(), 0..12),
        evidence in evidence_strategy(),
    ) {
        let engine = EvidenceValidationEngine::new();
        let result = engine.validate_technical_claims(&claims, &InvestigationData::new(evidence));
        for claim in &result.rejected_claims {
            prop_assert!(result
                .checks_for(claim)
                .any(|c| c.result == ValidationResult::Failed));
        }
        for claim in &result.validated_claims {
            prop_assert!(result.checks_for(claim).all(|c| !c.is_failed()));
        }
    }

    #[test]
    fn prop_arbitrary_json_never_panics(
        claims in proptest::collection::vec(claim_strategy(), 0..6),
        key in "[a-z_]{1,20}",
        scalar in any::<i64>(),
    ) {
        let engine = EvidenceValidationEngine::new();
        let evidence = json!({
            key.clone(): scalar,
            "repository_analysis": { key: [scalar] },
            "jenkins_intelligence": scalar
        });
        let result = engine.validate_technical_claims(&claims, &InvestigationData::new(evidence));
        assert_well_formed(&result);
    }
}
