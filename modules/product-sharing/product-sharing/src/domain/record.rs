//! Single resource with its own share-set guard.

use std::collections::BTreeSet;

use parking_lot::RwLock;
use product_sharing_sdk::Resource;

use super::error::DomainError;

/// One registered resource.
///
/// Identity fields are immutable after construction and read without
/// locking. The share set sits behind its own `RwLock`, so every operation
/// below is linearizable against the others on the same record and never
/// contends with other records.
///
/// Only [`ResourceRegistry`](super::registry::ResourceRegistry) constructs
/// records.
#[derive(Debug)]
pub struct ResourceRecord {
    id: String,
    name: String,
    owner: String,
    shared_with: RwLock<BTreeSet<String>>,
}

impl ResourceRecord {
    pub(crate) fn new(id: String, name: String, owner: String) -> Self {
        Self {
            id,
            name,
            owner,
            shared_with: RwLock::new(BTreeSet::new()),
        }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Adds `subject` to the share set.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyShared` if the subject is already present; the set is
    /// left untouched.
    pub fn add_shared_subject(&self, subject: &str) -> Result<(), DomainError> {
        let mut shared = self.shared_with.write();
        if !shared.insert(subject.to_owned()) {
            return Err(DomainError::already_shared(&self.id, subject));
        }
        Ok(())
    }

    /// Removes `subject` from the share set.
    ///
    /// # Errors
    ///
    /// Returns `NotShared` if the subject is absent; the set is left
    /// untouched.
    pub fn remove_shared_subject(&self, subject: &str) -> Result<(), DomainError> {
        let mut shared = self.shared_with.write();
        if !shared.remove(subject) {
            return Err(DomainError::not_shared(&self.id, subject));
        }
        Ok(())
    }

    #[must_use]
    pub fn is_shared_with(&self, subject: &str) -> bool {
        self.shared_with.read().contains(subject)
    }

    /// Returns a detached copy of the share set.
    #[must_use]
    pub fn snapshot_shared_subjects(&self) -> BTreeSet<String> {
        self.shared_with.read().clone()
    }

    #[must_use]
    pub fn shared_count(&self) -> usize {
        self.shared_with.read().len()
    }

    /// Captures identity and share set under a single read guard.
    #[must_use]
    pub fn snapshot(&self) -> Resource {
        Resource {
            id: self.id.clone(),
            name: self.name.clone(),
            owner: self.owner.clone(),
            shared_with: self.snapshot_shared_subjects(),
        }
    }
}
