//! Domain error types for the Product Sharing module.

use product_sharing_sdk::ProductSharingError;
use thiserror::Error;

/// Domain-level errors for the Product Sharing module.
///
/// Every variant is local to the failing call: the registry and the
/// affected record are left exactly as they were.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
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

impl DomainError {
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

    /// Creates a `NotOwner` error.
    #[must_use]
    pub fn not_owner(resource_id: impl Into<String>, subject: impl Into<String>) -> Self {
        Self::NotOwner {
            resource_id: resource_id.into(),
            subject: subject.into(),
        }
    }

    /// Creates a `SelfShare` error.
    #[must_use]
    pub fn self_share(resource_id: impl Into<String>, subject: impl Into<String>) -> Self {
        Self::SelfShare {
            resource_id: resource_id.into(),
            subject: subject.into(),
        }
    }

    /// Creates an `AlreadyShared` error.
    #[must_use]
    pub fn already_shared(resource_id: impl Into<String>, subject: impl Into<String>) -> Self {
        Self::AlreadyShared {
            resource_id: resource_id.into(),
            subject: subject.into(),
        }
    }

    /// Creates a `NotShared` error.
    #[must_use]
    pub fn not_shared(resource_id: impl Into<String>, subject: impl Into<String>) -> Self {
        Self::NotShared {
            resource_id: resource_id.into(),
            subject: subject.into(),
        }
    }
}

impl From<DomainError> for ProductSharingError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::DuplicateId(id) => Self::DuplicateId(id),
            DomainError::NotFound(id) => Self::NotFound(id),
            DomainError::NotOwner {
                resource_id,
                subject,
            } => Self::NotOwner {
                resource_id,
                subject,
            },
            DomainError::SelfShare {
                resource_id,
                subject,
            } => Self::SelfShare {
                resource_id,
                subject,
            },
            DomainError::AlreadyShared {
                resource_id,
                subject,
            } => Self::AlreadyShared {
                resource_id,
                subject,
            },
            DomainError::NotShared {
                resource_id,
                subject,
            } => Self::NotShared {
                resource_id,
                subject,
            },
        }
    }
}
