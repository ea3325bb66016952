//! Access decision strategies.
//!
//! A [`PolicyEvaluator`] maps `(subject, resource snapshot, action)` to an
//! allow/deny decision. Evaluators only ever see a detached [`Resource`], so
//! a decision in progress cannot observe a half-applied share or unshare.

use std::sync::Arc;

use product_sharing_sdk::Resource;

/// Type alias for a reference-counted policy evaluator
pub type PolicyEvaluatorRef = Arc<dyn PolicyEvaluator>;

/// Pure access decision function.
///
/// Implementations must be side-effect free and must not fail: a
/// well-formed request always yields `true` or `false`.
pub trait PolicyEvaluator: Send + Sync {
    /// Identifier used to select this evaluator from configuration.
    fn name(&self) -> &'static str;

    fn evaluate(&self, subject: &str, resource: &Resource, action: &str) -> bool;
}

/// Owner-or-shared rule.
///
/// `allow <=> subject == owner || contains(shared_with, subject)`.
/// The action is accepted but not inspected: owner and shared subjects get
/// the same rights for every verb.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContainsPolicy;

impl ContainsPolicy {
    pub const NAME: &'static str = "contains";
}

impl PolicyEvaluator for ContainsPolicy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn evaluate(&self, subject: &str, resource: &Resource, _action: &str) -> bool {
        resource.is_owned_by(subject) || resource.is_shared_with(subject)
    }
}

/// Returns the built-in evaluator registered under `name`.
#[must_use]
pub fn builtin(name: &str) -> Option<PolicyEvaluatorRef> {
    match name {
        ContainsPolicy::NAME => Some(Arc::new(ContainsPolicy)),
        _ => None,
    }
}
