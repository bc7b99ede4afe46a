use async_graphql::SimpleObject;
use feedhub_api_types::Uuid;
use feedhub_db_entity::post;

/// A post written by a user
#[derive(SimpleObject, Clone, Debug)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Identifier of the authoring user
    pub author_id: Uuid,
}

impl From<post::Model> for Post {
    fn from(model: post::Model) -> Self {
        Self {
            id: Uuid::from(model.id),
            title: model.title,
            content: model.content,
            author_id: Uuid::from(model.author_id),
        }
    }
}
