//! `ProductSharingApi` trait definition.
//!
//! This trait defines the public API for the `product-sharing` module.

use async_trait::async_trait;

use crate::error::ProductSharingError;
use crate::models::{Resource, SubjectResources};

/// Public API trait for the `product-sharing` module.
///
/// ```ignore
/// let client: Arc<dyn ProductSharingApi> = Arc::new(ProductSharingLocalClient::new(registry));
/// client.share("prod_001", "alice", "bob").await?;
/// ```
#[async_trait]
pub trait ProductSharingApi: Send + Sync {
    /// Register a new resource with an empty share set.
    ///
    /// # Errors
    ///
    /// * `DuplicateId` - If a resource with the same id already exists
    async fn create(
        &self,
        id: &str,
        name: &str,
        owner: &str,
    ) -> Result<Resource, ProductSharingError>;

    /// Retrieve a snapshot of a single resource.
    ///
    /// # Errors
    ///
    /// * `NotFound` - If no resource with the given id exists
    async fn get(&self, id: &str) -> Result<Resource, ProductSharingError>;

    /// Grant `target` access to a resource owned by `requester`.
    ///
    /// # Errors
    ///
    /// * `NotFound` - If the resource does not exist
    /// * `NotOwner` - If `requester` does not own the resource
    /// * `SelfShare` - If `requester` and `target` are the same subject
    /// * `AlreadyShared` - If `target` already has a share
    async fn share(
        &self,
        id: &str,
        requester: &str,
        target: &str,
    ) -> Result<(), ProductSharingError>;

    /// Revoke a share previously granted to `target`.
    ///
    /// # Errors
    ///
    /// * `NotFound` - If the resource does not exist
    /// * `NotOwner` - If `requester` does not own the resource
    /// * `NotShared` - If `target` has no share to revoke
    async fn unshare(
        &self,
        id: &str,
        requester: &str,
        target: &str,
    ) -> Result<(), ProductSharingError>;

    /// Decide whether `subject` may perform `action` on the resource.
    ///
    /// Unknown resources are denied; this never reports an error.
    async fn can_access(&self, subject: &str, id: &str, action: &str) -> bool;

    /// List the resources `subject` owns and the ones shared with them.
    async fn list_by_subject(&self, subject: &str) -> SubjectResources;
}
