//! SeaORM entity for the `user` table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub balance: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::profile::Entity")]
    Profile,
    #[sea_orm(has_many = "super::post::Entity")]
    Posts,
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Posts.def()
    }
}

/// Authors this user is subscribed to, reached through the edge table.
pub struct SubscribedToAuthors;

impl Linked for SubscribedToAuthors {
    type FromEntity = Entity;
    type ToEntity = Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::subscription::Relation::Subscriber.def().rev(),
            super::subscription::Relation::Author.def(),
        ]
    }
}

/// Users subscribed to this user.
pub struct SubscribedByUsers;

impl Linked for SubscribedByUsers {
    type FromEntity = Entity;
    type ToEntity = Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::subscription::Relation::Author.def().rev(),
            super::subscription::Relation::Subscriber.def(),
        ]
    }
}

impl ActiveModelBehavior for ActiveModel {}
