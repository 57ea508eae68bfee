//! Flow configuration, loadable from TOML.
//!
//! ```toml
//! label = "signup"
//! trace_steps = true
//! record_timeline = false
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Name used in log events
    pub label: String,
    /// Emit a `tracing` event for every executor call
    pub trace_steps: bool,
    /// Keep a [`Timeline`](crate::timeline::Timeline) of executor calls
    pub record_timeline: bool,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            label: "flow".to_string(),
            trace_steps: true,
            record_timeline: true,
        }
    }
}

impl FlowConfig {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_trace_steps(mut self, enabled: bool) -> Self {
        self.trace_steps = enabled;
        self
    }

    pub fn with_timeline(mut self, enabled: bool) -> Self {
        self.record_timeline = enabled;
        self
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = FlowConfig::from_toml_str(r#"label = "signup""#).unwrap();
        assert_eq!(config.label, "signup");
        assert!(config.trace_steps);
        assert!(config.record_timeline);
    }

    #[test]
    fn test_invalid_toml() {
        let err = FlowConfig::from_toml_str("trace_steps = \"sometimes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "label = \"checkout\"\nrecord_timeline = false").unwrap();

        let config = FlowConfig::from_path(file.path()).unwrap();
        assert_eq!(config, FlowConfig::new("checkout").with_timeline(false));
    }

    #[test]
    fn test_missing_file() {
        let err = FlowConfig::from_path("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
