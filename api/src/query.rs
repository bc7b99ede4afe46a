//! GraphQL query root and resolver implementations

use async_graphql::{Context, Object, Result};
use feedhub_api_types::{MemberTypeId, Uuid};
use feedhub_db_entity::{
    aggregation::{fetch_users_with_subscriptions, SubscriptionInclude},
    member_type, post, profile, user,
};
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::{
    errors,
    types::{MemberType, Post, Profile, User},
};

/// Root query type providing read-only access to the stored entities
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Retrieve all membership tiers
    async fn member_types(&self, ctx: &Context<'_>) -> Result<Vec<MemberType>> {
        let db = ctx.data::<DatabaseConnection>()?;

        let tiers = member_type::Entity::find()
            .all(db)
            .await
            .map_err(|e| errors::query_failed("member type listing", e))?;

        Ok(tiers.into_iter().map(MemberType::from).collect())
    }

    /// Retrieve a membership tier by id, or null if absent
    async fn member_type(&self, ctx: &Context<'_>, id: MemberTypeId) -> Result<Option<MemberType>> {
        let db = ctx.data::<DatabaseConnection>()?;

        let tier = member_type::Entity::find_by_id(id.as_db_str())
            .one(db)
            .await
            .map_err(|e| errors::query_failed("member type lookup", e))?;

        Ok(tier.map(MemberType::from))
    }

    /// Retrieve all users
    ///
    /// Before touching storage the resolver computes, from the parsed
    /// selection set, which subscription relations the client actually
    /// requested under the returned users, and asks the batch loader to
    /// attach exactly those in the same round trip. Without this, each
    /// returned user would trigger one additional query per visited
    /// subscription field.
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let db = ctx.data::<DatabaseConnection>()?;

        let include = requested_subscription_relations(ctx);
        let rows = fetch_users_with_subscriptions(db, include)
            .await
            .map_err(|e| errors::query_failed("user listing", e))?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    /// Retrieve a user by id, or null if absent
    async fn user(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<User>> {
        let db = ctx.data::<DatabaseConnection>()?;

        let found = user::Entity::find_by_id(id.into_string())
            .one(db)
            .await
            .map_err(|e| errors::query_failed("user lookup", e))?;

        Ok(found.map(User::from))
    }

    /// Retrieve all posts
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let db = ctx.data::<DatabaseConnection>()?;

        let posts = post::Entity::find()
            .all(db)
            .await
            .map_err(|e| errors::query_failed("post listing", e))?;

        Ok(posts.into_iter().map(Post::from).collect())
    }

    /// Retrieve a post by id, or null if absent
    async fn post(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<Post>> {
        let db = ctx.data::<DatabaseConnection>()?;

        let found = post::Entity::find_by_id(id.into_string())
            .one(db)
            .await
            .map_err(|e| errors::query_failed("post lookup", e))?;

        Ok(found.map(Post::from))
    }

    /// Retrieve all profiles
    async fn profiles(&self, ctx: &Context<'_>) -> Result<Vec<Profile>> {
        let db = ctx.data::<DatabaseConnection>()?;

        let profiles = profile::Entity::find()
            .all(db)
            .await
            .map_err(|e| errors::query_failed("profile listing", e))?;

        Ok(profiles.into_iter().map(Profile::from).collect())
    }

    /// Retrieve a profile by id, or null if absent
    async fn profile(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<Profile>> {
        let db = ctx.data::<DatabaseConnection>()?;

        let found = profile::Entity::find_by_id(id.into_string())
            .one(db)
            .await
            .map_err(|e| errors::query_failed("profile lookup", e))?;

        Ok(found.map(Profile::from))
    }

    /// Health check endpoint
    ///
    /// Returns "ok" to indicate the service is running
    async fn health(&self) -> &str {
        "ok"
    }

    /// API version information
    ///
    /// Returns the current version of the feedhub-api package
    async fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }
}

/// The explicit requested-relations set for the `users` field
///
/// Computed once per query from the look-ahead selection; only the two
/// subscription relations participate in eager loading.
fn requested_subscription_relations(ctx: &Context<'_>) -> SubscriptionInclude {
    let selection = ctx.look_ahead();

    SubscriptionInclude {
        subscribed_to: selection.field("userSubscribedTo").exists(),
        subscribers: selection.field("subscribedToUser").exists(),
    }
}
