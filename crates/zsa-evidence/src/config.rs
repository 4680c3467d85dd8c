//! Engine configuration
//!
//! Every field has a default, so an empty config file (or none at all)
//! yields the stock engine. Files are TOML or YAML, picked by extension.

use crate::error::EvidenceError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Evidence engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Dependency keywords that fail a claim when absent from the dependency analysis
    pub tracked_dependencies: Vec<String>,
    /// Patterns appended after the built-in false-positive catalog
    pub extra_false_positive_patterns: Vec<PatternConfig>,
    /// Run the file existence validator on path-bearing claims
    pub file_existence_checks: bool,
    /// Cross-check cited Jenkins jobs against the investigated job
    pub cross_source_checks: bool,
    /// Thresholds for the trust gate
    pub trust: TrustThresholds,
}

impl EngineConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With tracked dependency keywords
    #[must_use]
    pub fn with_tracked_dependencies<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tracked_dependencies = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// With an extra false-positive pattern
    #[must_use]
    pub fn with_false_positive_pattern(
        mut self,
        name: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Self {
        self.extra_false_positive_patterns.push(PatternConfig {
            name: name.into(),
            pattern: pattern.into(),
        });
        self
    }

    /// With file existence checks toggled
    #[inline]
    #[must_use]
    pub fn with_file_existence_checks(mut self, enabled: bool) -> Self {
        self.file_existence_checks = enabled;
        self
    }

    /// With cross-source consistency checks toggled
    #[inline]
    #[must_use]
    pub fn with_cross_source_checks(mut self, enabled: bool) -> Self {
        self.cross_source_checks = enabled;
        self
    }

    /// With trust gate thresholds
    #[inline]
    #[must_use]
    pub fn with_trust(mut self, trust: TrustThresholds) -> Self {
        self.trust = trust;
        self
    }

    /// Parse TOML configuration
    pub fn from_toml_str(s: &str) -> Result<Self, EvidenceError> {
        let config: Self = toml::from_str(s)?;
        config.normalized()
    }

    /// Parse YAML configuration
    pub fn from_yaml_str(s: &str) -> Result<Self, EvidenceError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.normalized()
    }

    /// Load configuration from a `.toml`, `.yaml` or `.yml` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EvidenceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let config = match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&content)?,
            Some("yaml" | "yml") => Self::from_yaml_str(&content)?,
            other => {
                return Err(EvidenceError::InvalidConfig(format!(
                    "unsupported config format: {}",
                    other.unwrap_or("<none>")
                )))
            }
        };

        tracing::debug!(path = %path.display(), "Loaded engine configuration");
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), EvidenceError> {
        self.trust.validate()?;
        if let Some(blank) = self
            .tracked_dependencies
            .iter()
            .find(|k| k.trim().is_empty())
        {
            return Err(EvidenceError::InvalidConfig(format!(
                "tracked dependency keyword must not be blank: {blank:?}"
            )));
        }
        Ok(())
    }

    /// Lowercase tracked keywords and validate
    fn normalized(mut self) -> Result<Self, EvidenceError> {
        for keyword in &mut self.tracked_dependencies {
            *keyword = keyword.trim().to_lowercase();
        }
        self.validate()?;
        Ok(self)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tracked_dependencies: vec!["mobx".to_string()],
            extra_false_positive_patterns: Vec::new(),
            file_existence_checks: false,
            cross_source_checks: false,
            trust: TrustThresholds::default(),
        }
    }
}

/// A named user-supplied false-positive regex
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternConfig {
    /// Identifier reported in evidence
    pub name: String,
    /// Regex source; matched case-insensitively
    pub pattern: String,
}

/// Trust gate thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustThresholds {
    /// Minimum run confidence to trust output
    pub min_confidence: f64,
    /// Maximum tolerated fraction of failed checks
    pub max_false_positive_risk: f64,
}

impl TrustThresholds {
    /// Check both thresholds lie in 0.0..=1.0
    pub fn validate(&self) -> Result<(), EvidenceError> {
        for (name, value) in [
            ("min_confidence", self.min_confidence),
            ("max_false_positive_risk", self.max_false_positive_risk),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(EvidenceError::InvalidConfig(format!(
                    "{name} must be within 0.0..=1.0, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for TrustThresholds {
    fn default() -> Self {
        Self {
            min_confidence: 0.7,
            max_false_positive_risk: 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_toml_is_default() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn toml_overrides_fields() {
        let config = EngineConfig::from_toml_str(
            r#"
            tracked_dependencies = ["MobX", " redux "]
            file_existence_checks = true

            [[extra_false_positive_patterns]]
            name = "guess"
            pattern = "guessed.*without.*logs"

            [trust]
            min_confidence = 0.5
            "#,
        )
        .unwrap();

        assert_eq!(config.tracked_dependencies, vec!["mobx", "redux"]);
        assert!(config.file_existence_checks);
        assert!(!config.cross_source_checks);
        assert_eq!(config.extra_false_positive_patterns.len(), 1);
        assert!((config.trust.min_confidence - 0.5).abs() < f64::EPSILON);
        assert!((config.trust.max_false_positive_risk - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn yaml_is_supported() {
        let config = EngineConfig::from_yaml_str("cross_source_checks: true\n").unwrap();
        assert!(config.cross_source_checks);
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let err = EngineConfig::from_toml_str("[trust]\nmin_confidence = 1.5\n").unwrap_err();
        assert!(matches!(err, EvidenceError::InvalidConfig(_)));
    }

    #[test]
    fn blank_keyword_is_rejected() {
        let err = EngineConfig::from_toml_str("tracked_dependencies = [\"  \"]\n").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn syntax_error_is_parse_error() {
        let err = EngineConfig::from_toml_str("tracked_dependencies = [").unwrap_err();
        assert!(matches!(err, EvidenceError::ConfigParse(_)));
    }

    #[test]
    fn load_picks_format_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "file_existence_checks: true").unwrap();
        let config = EngineConfig::load(file.path()).unwrap();
        assert!(config.file_existence_checks);

        let other = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
        let err = EngineConfig::load(other.path()).unwrap_err();
        assert!(matches!(err, EvidenceError::InvalidConfig(_)));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = EngineConfig::load("/nonexistent/zsa-evidence.toml").unwrap_err();
        assert!(matches!(err, EvidenceError::Io(_)));
    }
}
