//! Local client implementing the `ProductSharingApi` trait.

use std::sync::Arc;

use async_trait::async_trait;
use product_sharing_sdk::{ProductSharingApi, ProductSharingError, Resource, SubjectResources};

use crate::domain::registry::ResourceRegistry;

/// Local client for the Product Sharing module.
///
/// Implements `ProductSharingApi` by delegating to an in-process
/// [`ResourceRegistry`]. No registry operation blocks on I/O, so each call
/// completes without yielding.
pub struct ProductSharingLocalClient {
    registry: Arc<ResourceRegistry>,
}

impl ProductSharingLocalClient {
    /// Creates a new local client over the given registry.
    #[must_use]
    pub fn new(registry: Arc<ResourceRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl ProductSharingApi for ProductSharingLocalClient {
    async fn create(
        &self,
        id: &str,
        name: &str,
        owner: &str,
    ) -> Result<Resource, ProductSharingError> {
        self.registry
            .create(id, name, owner)
            .map_err(ProductSharingError::from)
    }

    async fn get(&self, id: &str) -> Result<Resource, ProductSharingError> {
        self.registry.get(id).map_err(ProductSharingError::from)
    }

    async fn share(
        &self,
        id: &str,
        requester: &str,
        target: &str,
    ) -> Result<(), ProductSharingError> {
        self.registry
            .share(id, requester, target)
            .map_err(ProductSharingError::from)
    }

    async fn unshare(
        &self,
        id: &str,
        requester: &str,
        target: &str,
    ) -> Result<(), ProductSharingError> {
        self.registry
            .unshare(id, requester, target)
            .map_err(ProductSharingError::from)
    }

    async fn can_access(&self, subject: &str, id: &str, action: &str) -> bool {
        self.registry.can_access(subject, id, action)
    }

    async fn list_by_subject(&self, subject: &str) -> SubjectResources {
        self.registry.list_by_subject(subject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_client() -> ProductSharingLocalClient {
        ProductSharingLocalClient::new(Arc::new(ResourceRegistry::new()))
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let client = create_client();
        let created = client.create("prod_001", "iPhone 15", "alice").await.unwrap();

        let fetched = client.get("prod_001").await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_errors_are_mapped() {
        let client = create_client();
        client.create("prod_001", "iPhone 15", "alice").await.unwrap();

        let err = client.create("prod_001", "iPhone 15", "alice").await.unwrap_err();
        assert!(err.is_duplicate_id());

        let err = client.get("prod_404").await.unwrap_err();
        assert!(err.is_not_found());

        let err = client.share("prod_001", "bob", "carol").await.unwrap_err();
        assert!(err.is_not_owner());

        let err = client.share("prod_001", "alice", "alice").await.unwrap_err();
        assert!(err.is_self_share());

        let err = client.unshare("prod_001", "alice", "bob").await.unwrap_err();
        assert!(err.is_not_shared());
    }

    #[tokio::test]
    async fn test_share_cycle_through_trait_object() {
        let client: Arc<dyn ProductSharingApi> = Arc::new(create_client());
        client.create("prod_001", "iPhone 15", "alice").await.unwrap();

        assert!(!client.can_access("bob", "prod_001", "read").await);
        client.share("prod_001", "alice", "bob").await.unwrap();
        assert!(client.can_access("bob", "prod_001", "write").await);

        let err = client.share("prod_001", "alice", "bob").await.unwrap_err();
        assert!(err.is_already_shared());

        let listing = client.list_by_subject("bob").await;
        assert!(listing.owned.is_empty());
        assert_eq!(listing.shared_with_me.len(), 1);

        client.unshare("prod_001", "alice", "bob").await.unwrap();
        assert!(!client.can_access("bob", "prod_001", "read").await);
        assert!(client.list_by_subject("bob").await.is_empty());
    }
}
