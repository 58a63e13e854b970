//! Runtime Configuration

use anyhow::Context;

const DEFAULT_LOG_FILTER: &str = "info";

/// Settings read from the function environment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,

    /// Colored log output. Off by default: log collectors store raw escapes.
    pub log_ansi: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.into(),
            log_ansi: false,
        }
    }
}

impl RuntimeConfig {
    /// Read `RUST_LOG` and `ADVISOR_LOG_ANSI`
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(filter) = lookup("RUST_LOG").filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        if let Some(raw) = lookup("ADVISOR_LOG_ANSI") {
            config.log_ansi = raw
                .trim()
                .parse()
                .with_context(|| format!("ADVISOR_LOG_ANSI must be true or false, got {raw:?}"))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = RuntimeConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.log_filter, "info");
        assert!(!config.log_ansi);
    }

    #[test]
    fn test_overrides() {
        let config = RuntimeConfig::from_lookup(lookup(&[
            ("RUST_LOG", "robo_advisor=debug"),
            ("ADVISOR_LOG_ANSI", "true"),
        ]))
        .unwrap();
        assert_eq!(config.log_filter, "robo_advisor=debug");
        assert!(config.log_ansi);
    }

    #[test]
    fn test_blank_filter_keeps_default() {
        let config = RuntimeConfig::from_lookup(lookup(&[("RUST_LOG", "  ")])).unwrap();
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_bad_ansi_flag() {
        let err = RuntimeConfig::from_lookup(lookup(&[("ADVISOR_LOG_ANSI", "yes")])).unwrap_err();
        assert!(err.to_string().contains("ADVISOR_LOG_ANSI"));
    }
}
