use async_graphql::{Context, Object, Result};
use feedhub_api_types::Uuid;
use feedhub_db_entity::{aggregation::UserWithSubscriptions, post, profile, user};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter};

use crate::{
    errors,
    types::{Post, Profile},
};

/// A registered user
///
/// The two subscription relations may arrive preloaded from the batch
/// loader behind the `users` query; their resolvers then serve the
/// preloaded arrays instead of querying again. Users fetched any other way
/// resolve those relations lazily, one query per visited field.
#[derive(Clone, Debug)]
pub struct User {
    model: user::Model,
    subscribed_to: Option<Vec<user::Model>>,
    subscribers: Option<Vec<user::Model>>,
}

impl From<user::Model> for User {
    fn from(model: user::Model) -> Self {
        Self {
            model,
            subscribed_to: None,
            subscribers: None,
        }
    }
}

impl From<UserWithSubscriptions> for User {
    fn from(row: UserWithSubscriptions) -> Self {
        Self {
            model: row.user,
            subscribed_to: row.subscribed_to,
            subscribers: row.subscribers,
        }
    }
}

#[Object]
impl User {
    async fn id(&self) -> Uuid {
        Uuid::from(self.model.id.as_str())
    }

    async fn name(&self) -> &str {
        &self.model.name
    }

    async fn balance(&self) -> f64 {
        self.model.balance
    }

    /// The user's profile, or null when none was created
    async fn profile(&self, ctx: &Context<'_>) -> Result<Option<Profile>> {
        let db = ctx.data::<DatabaseConnection>()?;

        let profile = profile::Entity::find()
            .filter(profile::Column::UserId.eq(self.model.id.as_str()))
            .one(db)
            .await
            .map_err(|e| errors::query_failed("profile lookup", e))?;

        Ok(profile.map(Profile::from))
    }

    /// Posts authored by this user
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let db = ctx.data::<DatabaseConnection>()?;

        let posts = post::Entity::find()
            .filter(post::Column::AuthorId.eq(self.model.id.as_str()))
            .all(db)
            .await
            .map_err(|e| errors::query_failed("posts lookup", e))?;

        Ok(posts.into_iter().map(Post::from).collect())
    }

    /// Authors this user is subscribed to
    async fn user_subscribed_to(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        if let Some(authors) = &self.subscribed_to {
            return Ok(authors.iter().cloned().map(User::from).collect());
        }

        let db = ctx.data::<DatabaseConnection>()?;

        let authors = self
            .model
            .find_linked(user::SubscribedToAuthors)
            .all(db)
            .await
            .map_err(|e| errors::query_failed("subscribed authors lookup", e))?;

        Ok(authors.into_iter().map(User::from).collect())
    }

    /// Users subscribed to this user
    async fn subscribed_to_user(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        if let Some(subscribers) = &self.subscribers {
            return Ok(subscribers.iter().cloned().map(User::from).collect());
        }

        let db = ctx.data::<DatabaseConnection>()?;

        let subscribers = self
            .model
            .find_linked(user::SubscribedByUsers)
            .all(db)
            .await
            .map_err(|e| errors::query_failed("subscribers lookup", e))?;

        Ok(subscribers.into_iter().map(User::from).collect())
    }
}
