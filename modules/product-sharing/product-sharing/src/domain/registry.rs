//! Resource registry: identity, ownership checks, and access queries.
//!
//! Locking is two-tier. The registry `RwLock` guards only the id -> record
//! map and is always released before a record's own share-set lock is
//! taken, so registry and record locks can never form a cycle. Different
//! resources are shared and unshared without contending with each other.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use product_sharing_sdk::{Resource, SubjectResources};

use super::error::DomainError;
use super::policy::{ContainsPolicy, PolicyEvaluatorRef};
use super::record::ResourceRecord;
use crate::config::{ConfigError, ProductSharingConfig};

/// Process-wide owner of every [`ResourceRecord`].
///
/// Records never leave the registry; callers only ever receive detached
/// [`Resource`] snapshots.
pub struct ResourceRegistry {
    resources: RwLock<HashMap<String, Arc<ResourceRecord>>>,
    policy: PolicyEvaluatorRef,
    log_decisions: bool,
}

impl Default for ResourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceRegistry {
    /// Creates an empty registry using the owner-or-shared rule.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(Arc::new(ContainsPolicy))
    }

    /// Creates an empty registry that delegates decisions to `policy`.
    #[must_use]
    pub fn with_policy(policy: PolicyEvaluatorRef) -> Self {
        Self {
            resources: RwLock::new(HashMap::new()),
            policy,
            log_decisions: false,
        }
    }

    /// Creates an empty registry from module configuration.
    ///
    /// # Errors
    ///
    /// Returns `UnknownPolicy` if the configured evaluator name is not a
    /// built-in.
    pub fn from_config(config: &ProductSharingConfig) -> Result<Self, ConfigError> {
        let mut registry = Self::with_policy(config.build_policy()?);
        registry.log_decisions = config.log_decisions;
        Ok(registry)
    }

    /// Name of the evaluator consulted by [`can_access`](Self::can_access).
    #[must_use]
    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Registers a new resource with an empty share set.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if `id` is already registered; the existing
    /// resource is left untouched.
    pub fn create(&self, id: &str, name: &str, owner: &str) -> Result<Resource, DomainError> {
        {
            let mut resources = self.resources.write();
            if resources.contains_key(id) {
                tracing::debug!(resource_id = %id, "create rejected: duplicate id");
                return Err(DomainError::duplicate_id(id));
            }
            resources.insert(
                id.to_owned(),
                Arc::new(ResourceRecord::new(
                    id.to_owned(),
                    name.to_owned(),
                    owner.to_owned(),
                )),
            );
        }

        tracing::info!(resource_id = %id, name = %name, owner = %owner, "resource created");
        Ok(Resource::new(id, name, owner))
    }

    /// Returns a snapshot of the resource registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no such resource exists.
    pub fn get(&self, id: &str) -> Result<Resource, DomainError> {
        self.lookup(id).map(|record| record.snapshot())
    }

    /// Grants `target` access to a resource owned by `requester`.
    ///
    /// # Errors
    ///
    /// `NotFound`, `NotOwner`, `SelfShare`, or `AlreadyShared`, checked in
    /// that order. On error nothing changes.
    pub fn share(&self, id: &str, requester: &str, target: &str) -> Result<(), DomainError> {
        let result = self.lookup(id).and_then(|record| {
            Self::ensure_owner(&record, requester)?;
            if requester == target {
                return Err(DomainError::self_share(id, target));
            }
            record.add_shared_subject(target)
        });

        match &result {
            Ok(()) => tracing::info!(
                resource_id = %id,
                owner = %requester,
                subject = %target,
                "resource shared"
            ),
            Err(e) => tracing::debug!(
                resource_id = %id,
                requester = %requester,
                subject = %target,
                error = %e,
                "share rejected"
            ),
        }
        result
    }

    /// Revokes the share previously granted to `target`.
    ///
    /// # Errors
    ///
    /// `NotFound`, `NotOwner`, or `NotShared`, checked in that order. On
    /// error nothing changes.
    pub fn unshare(&self, id: &str, requester: &str, target: &str) -> Result<(), DomainError> {
        let result = self.lookup(id).and_then(|record| {
            Self::ensure_owner(&record, requester)?;
            record.remove_shared_subject(target)
        });

        match &result {
            Ok(()) => tracing::info!(
                resource_id = %id,
                owner = %requester,
                subject = %target,
                "resource unshared"
            ),
            Err(e) => tracing::debug!(
                resource_id = %id,
                requester = %requester,
                subject = %target,
                error = %e,
                "unshare rejected"
            ),
        }
        result
    }

    /// Decides whether `subject` may perform `action` on resource `id`.
    ///
    /// An unknown resource is indistinguishable from a denied one: both
    /// yield `false`.
    #[must_use]
    pub fn can_access(&self, subject: &str, id: &str, action: &str) -> bool {
        let Some(record) = self.find(id) else {
            if self.log_decisions {
                tracing::debug!(
                    subject = %subject,
                    resource_id = %id,
                    action = %action,
                    allowed = false,
                    "access decision: unknown resource"
                );
            }
            return false;
        };

        let snapshot = record.snapshot();
        let allowed = self.policy.evaluate(subject, &snapshot, action);
        if self.log_decisions {
            tracing::debug!(
                subject = %subject,
                resource_id = %id,
                action = %action,
                policy = self.policy.name(),
                allowed,
                "access decision"
            );
        }
        allowed
    }

    /// Splits all known resources into those `subject` owns and those shared
    /// with them.
    #[must_use]
    pub fn list_by_subject(&self, subject: &str) -> SubjectResources {
        let records: Vec<Arc<ResourceRecord>> = self.resources.read().values().cloned().collect();

        let mut listing = SubjectResources::default();
        for record in records {
            if record.owner() == subject {
                listing.owned.push(record.snapshot());
                continue;
            }
            let snapshot = record.snapshot();
            if snapshot.is_shared_with(subject) {
                listing.shared_with_me.push(snapshot);
            }
        }
        listing
    }

    /// Number of registered resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.read().is_empty()
    }

    fn find(&self, id: &str) -> Option<Arc<ResourceRecord>> {
        self.resources.read().get(id).cloned()
    }

    fn lookup(&self, id: &str) -> Result<Arc<ResourceRecord>, DomainError> {
        self.find(id).ok_or_else(|| DomainError::not_found(id))
    }

    fn ensure_owner(record: &ResourceRecord, requester: &str) -> Result<(), DomainError> {
        if record.owner() != requester {
            return Err(DomainError::not_owner(record.id(), requester));
        }
        Ok(())
    }
}
