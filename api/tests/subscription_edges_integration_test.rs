//! Integration tests for the user subscription edge mutations
//!
//! These tests verify:
//! - subscribeTo linking both relation directions
//! - unsubscribeFrom removing both directions
//! - Edge uniqueness per (subscriber, author) pair
//! - Self-subscription being accepted

mod common;

use common::{create_user, data, execute_with_vars, setup_test_environment, subscribe};

async fn subscribed_ids(
    ctx: &common::TestContext,
    user_id: &str,
    field: &str,
) -> anyhow::Result<Vec<String>> {
    let document = format!("query($id: UUID!) {{ user(id: $id) {{ {field} {{ id }} }} }}");
    let response = execute_with_vars(&ctx.schema, &document, serde_json::json!({ "id": user_id })).await;
    let data = data(response)?;

    Ok(data["user"][field]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_str().unwrap().to_string())
        .collect())
}

#[tokio::test]
async fn subscribe_links_both_directions() -> anyhow::Result<()> {
    let ctx = setup_test_environment().await?;

    let follower = create_user(&ctx.schema, "follower", 0.0).await?;
    let author = create_user(&ctx.schema, "author", 0.0).await?;
    subscribe(&ctx.schema, &follower, &author).await?;

    assert_eq!(
        subscribed_ids(&ctx, &follower, "userSubscribedTo").await?,
        vec![author.clone()]
    );
    assert_eq!(
        subscribed_ids(&ctx, &author, "subscribedToUser").await?,
        vec![follower]
    );

    Ok(())
}

#[tokio::test]
async fn subscribe_returns_the_subscriber() -> anyhow::Result<()> {
    let ctx = setup_test_environment().await?;

    let follower = create_user(&ctx.schema, "follower", 0.0).await?;
    let author = create_user(&ctx.schema, "author", 0.0).await?;

    let response = execute_with_vars(
        &ctx.schema,
        "mutation($userId: UUID!, $authorId: UUID!) { subscribeTo(userId: $userId, authorId: $authorId) { id name } }",
        serde_json::json!({ "userId": follower, "authorId": author }),
    )
    .await;
    let data = data(response)?;

    assert_eq!(data["subscribeTo"]["id"], follower.as_str());
    assert_eq!(data["subscribeTo"]["name"], "follower");

    Ok(())
}

#[tokio::test]
async fn unsubscribe_removes_both_directions() -> anyhow::Result<()> {
    let ctx = setup_test_environment().await?;

    let follower = create_user(&ctx.schema, "follower", 0.0).await?;
    let author = create_user(&ctx.schema, "author", 0.0).await?;
    subscribe(&ctx.schema, &follower, &author).await?;

    let response = execute_with_vars(
        &ctx.schema,
        "mutation($userId: UUID!, $authorId: UUID!) { unsubscribeFrom(userId: $userId, authorId: $authorId) }",
        serde_json::json!({ "userId": follower, "authorId": author }),
    )
    .await;
    assert_eq!(data(response)?["unsubscribeFrom"], true);

    assert!(subscribed_ids(&ctx, &follower, "userSubscribedTo").await?.is_empty());
    assert!(subscribed_ids(&ctx, &author, "subscribedToUser").await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn duplicate_subscription_is_a_field_error() -> anyhow::Result<()> {
    let ctx = setup_test_environment().await?;

    let follower = create_user(&ctx.schema, "follower", 0.0).await?;
    let author = create_user(&ctx.schema, "author", 0.0).await?;
    subscribe(&ctx.schema, &follower, &author).await?;

    let response = execute_with_vars(
        &ctx.schema,
        "mutation($userId: UUID!, $authorId: UUID!) { subscribeTo(userId: $userId, authorId: $authorId) { id } }",
        serde_json::json!({ "userId": follower, "authorId": author }),
    )
    .await;

    assert!(!response.errors.is_empty(), "edge is unique per pair");

    Ok(())
}

#[tokio::test]
async fn self_subscription_is_accepted() -> anyhow::Result<()> {
    let ctx = setup_test_environment().await?;

    let narcissus = create_user(&ctx.schema, "narcissus", 0.0).await?;
    subscribe(&ctx.schema, &narcissus, &narcissus).await?;

    assert_eq!(
        subscribed_ids(&ctx, &narcissus, "userSubscribedTo").await?,
        vec![narcissus.clone()]
    );
    assert_eq!(
        subscribed_ids(&ctx, &narcissus, "subscribedToUser").await?,
        vec![narcissus]
    );

    Ok(())
}

#[tokio::test]
async fn unsubscribe_of_absent_edge_reports_true() -> anyhow::Result<()> {
    let ctx = setup_test_environment().await?;

    let a = create_user(&ctx.schema, "a", 0.0).await?;
    let b = create_user(&ctx.schema, "b", 0.0).await?;

    // No edge exists; the boolean contract masks that
    let response = execute_with_vars(
        &ctx.schema,
        "mutation($userId: UUID!, $authorId: UUID!) { unsubscribeFrom(userId: $userId, authorId: $authorId) }",
        serde_json::json!({ "userId": a, "authorId": b }),
    )
    .await;

    assert_eq!(data(response)?["unsubscribeFrom"], true);

    Ok(())
}
