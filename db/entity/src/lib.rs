//! SeaORM entity definitions for the feedhub relational model.
//!
//! Five tables: `member_type` (closed tier set), `user`, `profile`,
//! `post`, and the `subscribers_on_authors` edge table recording which
//! user follows which author.

pub mod aggregation;
pub mod member_type;
pub mod post;
pub mod profile;
pub mod subscription;
pub mod user;

pub mod prelude {
    pub use super::{
        member_type::Entity as MemberType, post::Entity as Post, profile::Entity as Profile,
        subscription::Entity as Subscription, user::Entity as User,
    };
}
