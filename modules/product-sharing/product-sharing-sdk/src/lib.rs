//! Product Sharing SDK
//!
//! This crate provides the public API for the `product-sharing` module:
//! - `ProductSharingApi` trait for inter-module communication
//! - `Resource` snapshot model and `SubjectResources` listing
//! - `ProductSharingError` for error handling
//!
//! ## Usage
//!
//! ```ignore
//! use product_sharing_sdk::ProductSharingApi;
//!
//! let product = client.create("prod_001", "iPhone 15", "alice").await?;
//! client.share(&product.id, "alice", "bob").await?;
//!
//! assert!(client.can_access("bob", &product.id, "read").await);
//!
//! let listing = client.list_by_subject("bob").await;
//! assert_eq!(listing.shared_with_me.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod error;
pub mod models;

pub use api::ProductSharingApi;
pub use error::ProductSharingError;
pub use models::{Resource, SubjectResources};
