//! Layered configuration for the demo binary.
//!
//! Sources, later ones winning:
//! 1) built-in defaults -> 2) YAML file (if provided) -> 3) env (`SHARING_DEMO__*`)

use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use product_sharing::ProductSharingConfig;
use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "SHARING_DEMO__";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct DemoConfig {
    pub logging: LoggingConfig,
    pub sharing: ProductSharingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

impl DemoConfig {
    /// Loads defaults, then the optional YAML file, then environment overrides.
    ///
    /// # Errors
    /// Returns an error if the file is unreadable or a value has the wrong shape.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment
            .extract()
            .context("failed to load demo configuration")
    }

    /// Overrides the log level from `-v` flags: one means debug, more means trace.
    pub fn apply_verbosity(&mut self, verbose: u8) {
        match verbose {
            0 => {}
            1 => "debug".clone_into(&mut self.logging.level),
            _ => "trace".clone_into(&mut self.logging.level),
        }
    }

    /// Renders the effective configuration.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = DemoConfig::default();
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.sharing.policy, "contains");
        assert!(!cfg.sharing.log_decisions);
    }

    #[test]
    fn test_yaml_and_env_layering() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "demo.yaml",
                "logging:\n  level: warn\nsharing:\n  log_decisions: true\n",
            )?;
            jail.set_env("SHARING_DEMO__LOGGING__LEVEL", "error");

            let cfg = DemoConfig::load(Some(Path::new("demo.yaml")))
                .map_err(|e| figment::Error::from(e.to_string()))?;
            assert_eq!(cfg.logging.level, "error");
            assert!(cfg.sharing.log_decisions);
            assert_eq!(cfg.sharing.policy, "contains");
            Ok(())
        });
    }

    #[test]
    fn test_unknown_key_rejected() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("demo.yaml", "sharing:\n  matcher: regex\n")?;
            assert!(DemoConfig::load(Some(Path::new("demo.yaml"))).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_apply_verbosity() {
        let mut cfg = DemoConfig::default();
        cfg.apply_verbosity(0);
        assert_eq!(cfg.logging.level, "info");
        cfg.apply_verbosity(1);
        assert_eq!(cfg.logging.level, "debug");
        cfg.apply_verbosity(3);
        assert_eq!(cfg.logging.level, "trace");
    }
}
