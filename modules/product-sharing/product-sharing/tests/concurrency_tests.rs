#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Parallel callers against a shared registry.

mod common;

use std::collections::BTreeSet;
use std::sync::Arc;

use common::{create_client, create_registry};
use product_sharing_sdk::ProductSharingApi;

const SUBJECTS: usize = 64;

#[test]
fn test_parallel_shares_on_one_resource_lose_no_updates() {
    let registry = create_registry();
    registry.create("prod_001", "iPhone 15", "alice").unwrap();

    std::thread::scope(|s| {
        for i in 0..SUBJECTS {
            let registry = &registry;
            s.spawn(move || {
                registry
                    .share("prod_001", "alice", &format!("user_{i}"))
                    .unwrap();
            });
        }
    });

    let resource = registry.get("prod_001").unwrap();
    assert_eq!(resource.shared_with.len(), SUBJECTS);
    for i in 0..SUBJECTS {
        assert!(registry.can_access(&format!("user_{i}"), "prod_001", "read"));
    }
}

#[test]
fn test_parallel_duplicate_share_succeeds_exactly_once() {
    let registry = create_registry();
    registry.create("prod_001", "iPhone 15", "alice").unwrap();

    let successes: usize = std::thread::scope(|s| {
        let handles: Vec<_> = (0..16)
            .map(|_| s.spawn(|| registry.share("prod_001", "alice", "bob").is_ok()))
            .collect();
        handles
            .into_iter()
            .map(|h| usize::from(h.join().unwrap()))
            .sum()
    });

    assert_eq!(successes, 1);
    assert_eq!(registry.get("prod_001").unwrap().shared_with.len(), 1);
}

#[test]
fn test_parallel_creates_with_same_id_admit_one_owner() {
    let registry = create_registry();

    let winners: Vec<String> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let registry = &registry;
                s.spawn(move || {
                    let owner = format!("owner_{i}");
                    registry
                        .create("prod_001", "Contested", &owner)
                        .ok()
                        .map(|r| r.owner)
                })
            })
            .collect();
        handles
            .into_iter()
            .filter_map(|h| h.join().unwrap())
            .collect()
    });

    assert_eq!(winners.len(), 1);
    assert_eq!(registry.get("prod_001").unwrap().owner, winners[0]);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_independent_resources_shared_concurrently() {
    let registry = create_registry();
    for r in 0..8 {
        registry
            .create(&format!("prod_{r}"), "Product", &format!("owner_{r}"))
            .unwrap();
    }

    std::thread::scope(|s| {
        for r in 0..8 {
            let registry = &registry;
            s.spawn(move || {
                let id = format!("prod_{r}");
                let owner = format!("owner_{r}");
                for i in 0..SUBJECTS {
                    registry.share(&id, &owner, &format!("user_{i}")).unwrap();
                }
                for i in (0..SUBJECTS).step_by(2) {
                    registry.unshare(&id, &owner, &format!("user_{i}")).unwrap();
                }
            });
        }
        // readers race the writers; every observed listing must stay consistent
        s.spawn(|| {
            for _ in 0..100 {
                let listing = registry.list_by_subject("user_1");
                assert!(listing.owned.is_empty());
                assert!(listing.shared_with_me.len() <= 8);
            }
        });
    });

    for r in 0..8 {
        let resource = registry.get(&format!("prod_{r}")).unwrap();
        let expected: BTreeSet<String> = (1..SUBJECTS)
            .step_by(2)
            .map(|i| format!("user_{i}"))
            .collect();
        assert_eq!(resource.shared_with, expected);
    }
    assert_eq!(registry.list_by_subject("user_1").shared_with_me.len(), 8);
    assert!(registry.list_by_subject("user_0").is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_shares_through_client() {
    let client: Arc<dyn ProductSharingApi> = Arc::new(create_client());
    client.create("prod_001", "iPhone 15", "alice").await.unwrap();

    let tasks: Vec<_> = (0..SUBJECTS)
        .map(|i| {
            let client = Arc::clone(&client);
            tokio::spawn(async move {
                client
                    .share("prod_001", "alice", &format!("user_{i}"))
                    .await
            })
        })
        .collect();

    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let resource = client.get("prod_001").await.unwrap();
    assert_eq!(resource.shared_with.len(), SUBJECTS);
}
