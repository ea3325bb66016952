//! Product Sharing module.
//!
//! In-memory authorization core deciding whether a subject may act on a
//! resource it owns or that its owner has shared with it.
//!
//! - [`domain::record::ResourceRecord`]: one resource and its guarded share set
//! - [`domain::policy::PolicyEvaluator`]: pluggable allow/deny rule
//! - [`domain::registry::ResourceRegistry`]: id uniqueness, ownership checks, queries
//! - [`local_client::ProductSharingLocalClient`]: `ProductSharingApi` over a registry

pub mod config;
pub mod domain;
pub mod local_client;

pub use config::{ConfigError, ProductSharingConfig};
pub use domain::error::DomainError;
pub use domain::policy::{ContainsPolicy, PolicyEvaluator, PolicyEvaluatorRef};
pub use domain::registry::ResourceRegistry;
pub use local_client::ProductSharingLocalClient;
