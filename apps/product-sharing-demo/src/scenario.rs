//! Scripted walkthrough: create, check, share, list, unshare.

use std::io::Write;

use anyhow::Result;
use product_sharing_sdk::{ProductSharingApi, Resource};

pub const USER1: &str = "user1@example.com";
pub const USER2: &str = "user2@example.com";
pub const USER3: &str = "user3@example.com";

/// Runs the walkthrough against `client`, narrating every step to `out`.
///
/// Share and unshare failures are reported and the walkthrough continues;
/// a failed create aborts it.
///
/// # Errors
/// Returns an error if a product cannot be created or `out` cannot be written.
pub async fn run(client: &dyn ProductSharingApi, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "=== Product Sharing Example ===")?;
    writeln!(out)?;

    writeln!(out, "1. Creating products...")?;
    let iphone = create(client, out, "prod_001", "iPhone 15", USER1).await?;
    let macbook = create(client, out, "prod_002", "MacBook Pro", USER1).await?;
    let ipad = create(client, out, "prod_003", "iPad Pro", USER2).await?;
    writeln!(out)?;

    writeln!(out, "2. Testing permission control...")?;
    check(client, out, USER1, &iphone, "read", "").await?;
    check(client, out, USER1, &iphone, "write", "").await?;
    check(client, out, USER2, &iphone, "read", "").await?;
    check(client, out, USER3, &ipad, "read", "").await?;
    writeln!(out)?;

    writeln!(out, "3. Sharing products...")?;
    share(client, out, &iphone, USER2).await?;
    share(client, out, &macbook, USER3).await?;
    writeln!(out)?;

    writeln!(out, "4. Testing permissions after sharing...")?;
    check(client, out, USER2, &iphone, "read", "shared ").await?;
    check(client, out, USER2, &iphone, "write", "shared ").await?;
    check(client, out, USER3, &macbook, "read", "shared ").await?;
    writeln!(out)?;

    writeln!(out, "5. Listing user products...")?;
    list(client, out, USER1).await?;
    list(client, out, USER2).await?;
    writeln!(out)?;

    writeln!(out, "6. Unsharing products...")?;
    match client.unshare(&iphone.id, USER1, USER2).await {
        Ok(()) => writeln!(
            out,
            "Product {} has been unshared with user {USER2}",
            iphone.name
        )?,
        Err(e) => {
            tracing::warn!(error = %e, "failed to unshare product");
            writeln!(out, "Failed to unshare product: {e}")?;
        }
    }
    check(client, out, USER2, &iphone, "read", "unshared ").await?;
    writeln!(out)?;

    writeln!(out, "=== Example completed ===")?;
    Ok(())
}

async fn create(
    client: &dyn ProductSharingApi,
    out: &mut dyn Write,
    id: &str,
    name: &str,
    owner: &str,
) -> Result<Resource> {
    let product = client.create(id, name, owner).await?;
    writeln!(out, "Product {} created, owner: {}", product.name, product.owner)?;
    Ok(product)
}

async fn check(
    client: &dyn ProductSharingApi,
    out: &mut dyn Write,
    subject: &str,
    product: &Resource,
    action: &str,
    qualifier: &str,
) -> Result<()> {
    let allowed = client.can_access(subject, &product.id, action).await;
    writeln!(
        out,
        "User {subject} accessing {qualifier}product {} ({action}): {allowed}",
        product.name
    )?;
    Ok(())
}

async fn share(
    client: &dyn ProductSharingApi,
    out: &mut dyn Write,
    product: &Resource,
    target: &str,
) -> Result<()> {
    match client.share(&product.id, &product.owner, target).await {
        Ok(()) => writeln!(
            out,
            "Product {} has been shared with user {target}",
            product.name
        )?,
        Err(e) => {
            tracing::warn!(error = %e, "failed to share product");
            writeln!(out, "Failed to share product: {e}")?;
        }
    }
    Ok(())
}

async fn list(client: &dyn ProductSharingApi, out: &mut dyn Write, subject: &str) -> Result<()> {
    let mut listing = client.list_by_subject(subject).await;
    listing.owned.sort_by(|a, b| a.id.cmp(&b.id));
    listing.shared_with_me.sort_by(|a, b| a.id.cmp(&b.id));

    writeln!(out, "User {subject} owned products: {}", listing.owned.len())?;
    for p in &listing.owned {
        writeln!(out, "  - {} (ID: {})", p.name, p.id)?;
    }
    writeln!(
        out,
        "User {subject} shared products: {}",
        listing.shared_with_me.len()
    )?;
    for p in &listing.shared_with_me {
        writeln!(out, "  - {} (ID: {}, Owner: {})", p.name, p.id, p.owner)?;
    }
    Ok(())
}
