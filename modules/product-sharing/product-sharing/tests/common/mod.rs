#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common test utilities for product-sharing integration tests

use std::sync::Arc;

use product_sharing::{ProductSharingLocalClient, ResourceRegistry};

pub const ACTIONS: &[&str] = &["read", "write", "delete", "publish"];

pub fn create_registry() -> Arc<ResourceRegistry> {
    Arc::new(ResourceRegistry::new())
}

pub fn create_client() -> ProductSharingLocalClient {
    ProductSharingLocalClient::new(create_registry())
}

/// Registry pre-populated with the three demo products:
/// `prod_001` and `prod_002` owned by `user1`, `prod_003` owned by `user2`.
pub fn seeded_registry() -> Arc<ResourceRegistry> {
    let registry = create_registry();
    registry.create("prod_001", "iPhone 15", "user1").unwrap();
    registry.create("prod_002", "MacBook Pro", "user1").unwrap();
    registry.create("prod_003", "iPad Pro", "user2").unwrap();
    registry
}
