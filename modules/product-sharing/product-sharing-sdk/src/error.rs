//! Public error types for the `product-sharing` module.
//!
//! These errors are safe to expose to other modules and consumers.
//! Access checks never produce them: an unknown resource and a denied
//! subject both surface as `false` from `can_access`.

use thiserror::Error;

/// Errors that can be returned by the `ProductSharingApi`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductSharingError {
    /// A resource with the same id is already registered.
    #[error("Resource already exists: {0}")]
    DuplicateId(String),

    /// The requested resource was not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The requester does not own the resource.
    #[error("Subject {subject} is not the owner of resource {resource_id}")]
    NotOwner {
        resource_id: String,
        subject: String,
    },

    /// The owner tried to share the resource with themself.
    #[error("Resource {resource_id} cannot be shared with its owner {subject}")]
    SelfShare {
        resource_id: String,
        subject: String,
    },

    /// The target subject is already in the share set.
    #[error("Resource {resource_id} is already shared with {subject}")]
    AlreadyShared {
        resource_id: String,
        subject: String,
    },

    /// The target subject is not in the share set.
    #[error("Resource {resource_id} is not shared with {subject}")]
    NotShared {
        resource_id: String,
        subject: String,
    },
}

impl ProductSharingError {
    /// Creates a `DuplicateId` error.
    #[must_use]
    pub fn duplicate_id(resource_id: impl Into<String>) -> Self {
        Self::DuplicateId(resource_id.into())
    }

    /// Creates a `NotFound` error.
    #[must_use]
    pub fn not_found(resource_id: impl Into<String>) -> Self {
        Self::NotFound(resource_id.into())
    }

    /// Returns `true` if this is a duplicate id error.
    #[must_use]
    pub const fn is_duplicate_id(&self) -> bool {
        matches!(self, Self::DuplicateId(_))
    }

    /// Returns `true` if this is a not found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns `true` if the requester was not the owner.
    #[must_use]
    pub const fn is_not_owner(&self) -> bool {
        matches!(self, Self::NotOwner { .. })
    }

    /// Returns `true` if this is a self-share rejection.
    #[must_use]
    pub const fn is_self_share(&self) -> bool {
        matches!(self, Self::SelfShare { .. })
    }

    /// Returns `true` if the subject was already in the share set.
    #[must_use]
    pub const fn is_already_shared(&self) -> bool {
        matches!(self, Self::AlreadyShared { .. })
    }

    /// Returns `true` if the subject was missing from the share set.
    #[must_use]
    pub const fn is_not_shared(&self) -> bool {
        matches!(self, Self::NotShared { .. })
    }
}
