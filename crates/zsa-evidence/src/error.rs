//! Error types for the evidence engine
//!
//! Evidence problems never surface here: a missing file inventory or an
//! absent CI job becomes an `unable_to_verify` check. These errors cover
//! the genuine failure sources only:
//! - Serialization of results
//! - Invalid engine configuration (bad regexes, out-of-range thresholds)
//! - Config file loading
//! - Malformed caller input at the binary boundary

/// Main engine error type
#[derive(Debug, thiserror::Error)]
pub enum EvidenceError {
    /// Result could not be converted to or from JSON
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An extra false-positive pattern failed to compile
    #[error("invalid false-positive pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern text
        pattern: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// Configuration values are out of range or unsupported
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file has a syntax error
    #[error("configuration parse error: {0}")]
    ConfigParse(String),

    /// Filesystem error while loading configuration
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Caller-supplied input has the wrong shape
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl EvidenceError {
    /// Check if the error originates from configuration
    #[inline]
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPattern { .. } | Self::InvalidConfig(_) | Self::ConfigParse(_)
        )
    }
}

impl From<toml::de::Error> for EvidenceError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigParse(err.to_string())
    }
}

impl From<serde_yaml::Error> for EvidenceError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::ConfigParse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_are_classified() {
        assert!(EvidenceError::InvalidConfig("x".into()).is_config_error());
        assert!(EvidenceError::ConfigParse("x".into()).is_config_error());
        assert!(!EvidenceError::InvalidInput("x".into()).is_config_error());
    }

    #[test]
    fn invalid_pattern_message_names_pattern() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = EvidenceError::InvalidPattern {
            pattern: "(".to_string(),
            source,
        };
        assert!(err.to_string().contains("'('"));
    }
}
