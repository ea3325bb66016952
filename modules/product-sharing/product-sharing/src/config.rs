//! Configuration for the Product Sharing module.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::policy::{self, ContainsPolicy, PolicyEvaluatorRef};

/// Configuration for the Product Sharing module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ProductSharingConfig {
    /// Name of the built-in access evaluator.
    /// Default: `"contains"` (owner or shared subject).
    pub policy: String,

    /// Emit a `debug` event for every access decision.
    pub log_decisions: bool,
}

impl Default for ProductSharingConfig {
    fn default() -> Self {
        Self {
            policy: ContainsPolicy::NAME.to_owned(),
            log_decisions: false,
        }
    }
}

impl ProductSharingConfig {
    /// Resolves the configured evaluator.
    ///
    /// # Errors
    ///
    /// Returns `UnknownPolicy` if `policy` names no built-in evaluator.
    pub fn build_policy(&self) -> Result<PolicyEvaluatorRef, ConfigError> {
        policy::builtin(&self.policy).ok_or_else(|| ConfigError::UnknownPolicy(self.policy.clone()))
    }
}

/// Errors raised while turning configuration into a registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown access policy: {0}")]
    UnknownPolicy(String),
}
