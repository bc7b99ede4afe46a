//! Batch loading of users together with their subscription relations.
//!
//! The `users` query resolver threads the set of relation fields the client
//! actually selected into [`fetch_users_with_subscriptions`]. When neither
//! relation was selected this costs a single query; when at least one was,
//! one additional query fetches every subscription edge and the relation
//! arrays are stitched in memory. Instead of 1 + (N * 2) queries for N
//! users, the worst case is 2 queries total.

use std::collections::HashMap;

use sea_orm::{DatabaseConnection, EntityTrait};

use crate::{subscription, user};

/// Which subscription relations of `User` the client selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubscriptionInclude {
    /// `userSubscribedTo`: authors the user follows.
    pub subscribed_to: bool,
    /// `subscribedToUser`: followers of the user.
    pub subscribers: bool,
}

impl SubscriptionInclude {
    pub fn any(&self) -> bool {
        self.subscribed_to || self.subscribers
    }
}

/// A user row with its optionally preloaded subscription relations.
///
/// A `None` relation means it was not requested and a later resolver call
/// must fetch it itself; `Some(vec![])` means it was requested and is empty.
#[derive(Debug, Clone)]
pub struct UserWithSubscriptions {
    pub user: user::Model,
    pub subscribed_to: Option<Vec<user::Model>>,
    pub subscribers: Option<Vec<user::Model>>,
}

/// Fetch all users, eagerly attaching the requested subscription relations.
pub async fn fetch_users_with_subscriptions(
    db: &DatabaseConnection,
    include: SubscriptionInclude,
) -> Result<Vec<UserWithSubscriptions>, sea_orm::DbErr> {
    let users = user::Entity::find().all(db).await?;

    if !include.any() || users.is_empty() {
        return Ok(users
            .into_iter()
            .map(|user| UserWithSubscriptions {
                user,
                subscribed_to: None,
                subscribers: None,
            })
            .collect());
    }

    let edges = subscription::Entity::find().all(db).await?;

    Ok(attach_subscriptions(users, &edges, include))
}

/// Stitch subscription edges onto the user list.
///
/// Related users are resolved from the fetched list itself: both endpoints
/// of every edge are rows of the `user` table, and the list holds all of
/// them. Edges pointing at ids missing from the list are skipped.
pub fn attach_subscriptions(
    users: Vec<user::Model>,
    edges: &[subscription::Model],
    include: SubscriptionInclude,
) -> Vec<UserWithSubscriptions> {
    let by_id: HashMap<String, user::Model> =
        users.iter().map(|u| (u.id.clone(), u.clone())).collect();

    let mut authors_by_subscriber: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut subscribers_by_author: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in edges {
        authors_by_subscriber
            .entry(edge.subscriber_id.as_str())
            .or_default()
            .push(edge.author_id.as_str());
        subscribers_by_author
            .entry(edge.author_id.as_str())
            .or_default()
            .push(edge.subscriber_id.as_str());
    }

    let resolve = |ids: Option<&Vec<&str>>| -> Vec<user::Model> {
        ids.map(|ids| {
            ids.iter()
                .filter_map(|id| by_id.get(*id).cloned())
                .collect()
        })
        .unwrap_or_default()
    };

    users
        .into_iter()
        .map(|user| {
            let subscribed_to = include
                .subscribed_to
                .then(|| resolve(authors_by_subscriber.get(user.id.as_str())));
            let subscribers = include
                .subscribers
                .then(|| resolve(subscribers_by_author.get(user.id.as_str())));
            UserWithSubscriptions {
                user,
                subscribed_to,
                subscribers,
            }
        })
        .collect()
}
