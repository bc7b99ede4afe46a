//! GraphQL mutation root and resolver implementations
//!
//! Every mutation is a single storage operation. Create and change surface
//! storage constraint violations as field errors. The delete family reports
//! a bare boolean and swallows storage errors, so a missing row and a
//! failed deletion are indistinguishable to the caller; existing clients
//! depend on that boolean contract.

use async_graphql::{Context, Object, Result};
use feedhub_api_types::{
    ChangePostInput, ChangeProfileInput, ChangeUserInput, CreatePostInput, CreateProfileInput,
    CreateUserInput, Uuid,
};
use feedhub_db_entity::{post, profile, subscription, user};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::{errors, types::{Post, Profile, User}};

/// Root mutation type providing create/change/delete per entity plus
/// subscription management between users
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a user from the given attributes
    async fn create_user(&self, ctx: &Context<'_>, dto: CreateUserInput) -> Result<User> {
        let db = ctx.data::<DatabaseConnection>()?;

        let row = user::ActiveModel {
            id: Set(Uuid::new_v4().into_string()),
            name: Set(dto.name),
            balance: Set(dto.balance),
        };

        let created = row
            .insert(db)
            .await
            .map_err(|e| errors::query_failed("user create", e))?;

        Ok(User::from(created))
    }

    /// Replace the given attributes on an existing user
    async fn change_user(&self, ctx: &Context<'_>, id: Uuid, dto: ChangeUserInput) -> Result<User> {
        let db = ctx.data::<DatabaseConnection>()?;

        let existing = user::Entity::find_by_id(id.as_str().to_string())
            .one(db)
            .await
            .map_err(|e| errors::query_failed("user lookup", e))?
            .ok_or_else(|| errors::not_found("User", id.as_str()))?;

        let mut row: user::ActiveModel = existing.into();
        if let Some(name) = dto.name {
            row.name = Set(name);
        }
        if let Some(balance) = dto.balance {
            row.balance = Set(balance);
        }

        let updated = row
            .update(db)
            .await
            .map_err(|e| errors::query_failed("user update", e))?;

        Ok(User::from(updated))
    }

    /// Delete a user; true when the storage call succeeded
    async fn delete_user(&self, ctx: &Context<'_>, id: Uuid) -> bool {
        let Ok(db) = ctx.data::<DatabaseConnection>() else {
            return false;
        };

        user::Entity::delete_by_id(id.into_string())
            .exec(db)
            .await
            .is_ok()
    }

    /// Create a post; fails when the author does not exist
    async fn create_post(&self, ctx: &Context<'_>, dto: CreatePostInput) -> Result<Post> {
        let db = ctx.data::<DatabaseConnection>()?;

        let row = post::ActiveModel {
            id: Set(Uuid::new_v4().into_string()),
            title: Set(dto.title),
            content: Set(dto.content),
            author_id: Set(dto.author_id.into_string()),
        };

        let created = row
            .insert(db)
            .await
            .map_err(|e| errors::query_failed("post create", e))?;

        Ok(Post::from(created))
    }

    /// Replace the given attributes on an existing post
    async fn change_post(&self, ctx: &Context<'_>, id: Uuid, dto: ChangePostInput) -> Result<Post> {
        let db = ctx.data::<DatabaseConnection>()?;

        let existing = post::Entity::find_by_id(id.as_str().to_string())
            .one(db)
            .await
            .map_err(|e| errors::query_failed("post lookup", e))?
            .ok_or_else(|| errors::not_found("Post", id.as_str()))?;

        let mut row: post::ActiveModel = existing.into();
        if let Some(title) = dto.title {
            row.title = Set(title);
        }
        if let Some(content) = dto.content {
            row.content = Set(content);
        }

        let updated = row
            .update(db)
            .await
            .map_err(|e| errors::query_failed("post update", e))?;

        Ok(Post::from(updated))
    }

    /// Delete a post; true when the storage call succeeded
    async fn delete_post(&self, ctx: &Context<'_>, id: Uuid) -> bool {
        let Ok(db) = ctx.data::<DatabaseConnection>() else {
            return false;
        };

        post::Entity::delete_by_id(id.into_string())
            .exec(db)
            .await
            .is_ok()
    }

    /// Create a profile; fails when the user or tier does not exist, or
    /// when the user already has a profile
    async fn create_profile(&self, ctx: &Context<'_>, dto: CreateProfileInput) -> Result<Profile> {
        let db = ctx.data::<DatabaseConnection>()?;

        let row = profile::ActiveModel {
            id: Set(Uuid::new_v4().into_string()),
            is_male: Set(dto.is_male),
            year_of_birth: Set(dto.year_of_birth),
            user_id: Set(dto.user_id.into_string()),
            member_type_id: Set(dto.member_type_id.as_db_str().to_string()),
        };

        let created = row
            .insert(db)
            .await
            .map_err(|e| errors::query_failed("profile create", e))?;

        Ok(Profile::from(created))
    }

    /// Replace the given attributes on an existing profile
    async fn change_profile(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
        dto: ChangeProfileInput,
    ) -> Result<Profile> {
        let db = ctx.data::<DatabaseConnection>()?;

        let existing = profile::Entity::find_by_id(id.as_str().to_string())
            .one(db)
            .await
            .map_err(|e| errors::query_failed("profile lookup", e))?
            .ok_or_else(|| errors::not_found("Profile", id.as_str()))?;

        let mut row: profile::ActiveModel = existing.into();
        if let Some(is_male) = dto.is_male {
            row.is_male = Set(is_male);
        }
        if let Some(year_of_birth) = dto.year_of_birth {
            row.year_of_birth = Set(year_of_birth);
        }
        if let Some(member_type_id) = dto.member_type_id {
            row.member_type_id = Set(member_type_id.as_db_str().to_string());
        }

        let updated = row
            .update(db)
            .await
            .map_err(|e| errors::query_failed("profile update", e))?;

        Ok(Profile::from(updated))
    }

    /// Delete a profile; true when the storage call succeeded
    async fn delete_profile(&self, ctx: &Context<'_>, id: Uuid) -> bool {
        let Ok(db) = ctx.data::<DatabaseConnection>() else {
            return false;
        };

        profile::Entity::delete_by_id(id.into_string())
            .exec(db)
            .await
            .is_ok()
    }

    /// Subscribe a user to an author's posts and return the subscriber
    ///
    /// A duplicate subscription violates the edge table's composite key and
    /// surfaces as a field error. Self-subscription is not rejected.
    async fn subscribe_to(&self, ctx: &Context<'_>, user_id: Uuid, author_id: Uuid) -> Result<User> {
        let db = ctx.data::<DatabaseConnection>()?;

        let edge = subscription::ActiveModel {
            subscriber_id: Set(user_id.as_str().to_string()),
            author_id: Set(author_id.into_string()),
        };

        subscription::Entity::insert(edge)
            .exec_without_returning(db)
            .await
            .map_err(|e| errors::query_failed("subscription create", e))?;

        let subscriber = user::Entity::find_by_id(user_id.as_str().to_string())
            .one(db)
            .await
            .map_err(|e| errors::query_failed("user lookup", e))?
            .ok_or_else(|| errors::not_found("User", user_id.as_str()))?;

        Ok(User::from(subscriber))
    }

    /// Remove a subscription edge; true when the storage call succeeded
    async fn unsubscribe_from(&self, ctx: &Context<'_>, user_id: Uuid, author_id: Uuid) -> bool {
        let Ok(db) = ctx.data::<DatabaseConnection>() else {
            return false;
        };

        subscription::Entity::delete_by_id((user_id.into_string(), author_id.into_string()))
            .exec(db)
            .await
            .is_ok()
    }
}
