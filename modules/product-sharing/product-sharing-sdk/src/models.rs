//! Public models for the `product-sharing` module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the `product-sharing` module and its consumers. Every value here
//! is a detached copy: mutating it never touches registry state.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Point-in-time snapshot of a registered resource.
///
/// `shared_with` never needs to contain the owner; ownership alone grants
/// access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Unique resource identifier, fixed at creation.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Owning subject.
    pub owner: String,
    /// Subjects the owner has granted access to.
    pub shared_with: BTreeSet<String>,
}

impl Resource {
    /// Creates a snapshot with an empty share set.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            owner: owner.into(),
            shared_with: BTreeSet::new(),
        }
    }

    /// Returns `true` if `subject` owns this resource.
    #[must_use]
    pub fn is_owned_by(&self, subject: &str) -> bool {
        self.owner == subject
    }

    /// Returns `true` if `subject` is in the share set.
    #[must_use]
    pub fn is_shared_with(&self, subject: &str) -> bool {
        self.shared_with.contains(subject)
    }
}

/// Resources visible to one subject, split by relation.
///
/// The two lists are disjoint. A resource the subject owns is reported in
/// `owned` only, even if the subject also appears in its share set.
/// Ordering within each list is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectResources {
    pub owned: Vec<Resource>,
    pub shared_with_me: Vec<Resource>,
}

impl SubjectResources {
    /// Returns `true` if the subject can see no resources at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owned.is_empty() && self.shared_with_me.is_empty()
    }
}
