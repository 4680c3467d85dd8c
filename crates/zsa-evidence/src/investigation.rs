//! Investigation evidence
//!
//! Wraps the structured facts gathered by upstream investigation
//! (CI metadata, repository scan, dependency analysis). Every accessor is
//! total: a missing or mistyped field reads as absent.

use crate::error::EvidenceError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Dot path of the identified CI job name
pub const JENKINS_JOB_NAME: &str = "jenkins_intelligence.metadata.job_name";
/// Dot path of the repository clone flag
pub const REPOSITORY_CLONED: &str = "repository_analysis.repository_cloned";
/// Dot path of the repository test file inventory
pub const TEST_FILES_FOUND: &str = "repository_analysis.test_files_found";
/// Dot path of the dependency analysis mapping
pub const DEPENDENCY_ANALYSIS: &str = "repository_analysis.dependency_analysis";

/// Structured investigation evidence
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvestigationData {
    root: Value,
}

impl InvestigationData {
    /// Wrap a JSON value
    #[inline]
    #[must_use]
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Evidence with no facts at all
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Value::Object(Map::new()))
    }

    /// Parse investigation JSON; the document root must be an object
    pub fn from_json_str(s: &str) -> Result<Self, EvidenceError> {
        match serde_json::from_str::<Value>(s)? {
            root @ Value::Object(_) => Ok(Self::new(root)),
            other => Err(EvidenceError::InvalidInput(format!(
                "investigation data must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Underlying JSON tree
    #[inline]
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Get value at path (dot notation)
    #[must_use]
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut current = &self.root;
        for segment in path.split('.') {
            match current {
                Value::Object(map) => current = map.get(segment)?,
                _ => return None,
            }
        }
        Some(current)
    }

    /// Identified CI job name, if truthy
    #[must_use]
    pub fn jenkins_job_name(&self) -> Option<&Value> {
        self.get_path(JENKINS_JOB_NAME).filter(|v| is_truthy(v))
    }

    /// Whether the repository source was fetched
    #[must_use]
    pub fn repository_cloned(&self) -> bool {
        self.get_path(REPOSITORY_CLONED).is_some_and(is_truthy)
    }

    /// Repository file inventory; non-string entries are skipped
    #[must_use]
    pub fn test_files_found(&self) -> Vec<&str> {
        match self.get_path(TEST_FILES_FOUND) {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Dependency analysis mapping, `None` when absent or empty
    #[must_use]
    pub fn dependency_analysis(&self) -> Option<&Map<String, Value>> {
        match self.get_path(DEPENDENCY_ANALYSIS) {
            Some(Value::Object(map)) if !map.is_empty() => Some(map),
            _ => None,
        }
    }
}

impl From<Value> for InvestigationData {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}

/// JSON truthiness: null, false, zero, and empty string/array/object are false
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
