use async_graphql::{Context, Object, Result};
use feedhub_api_types::{MemberTypeId, Uuid};
use feedhub_db_entity::{member_type, profile};
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::{errors, types::MemberType};

/// A user's profile; at most one exists per user
#[derive(Clone, Debug)]
pub struct Profile {
    model: profile::Model,
}

impl From<profile::Model> for Profile {
    fn from(model: profile::Model) -> Self {
        Self { model }
    }
}

#[Object]
impl Profile {
    async fn id(&self) -> Uuid {
        Uuid::from(self.model.id.as_str())
    }

    async fn is_male(&self) -> bool {
        self.model.is_male
    }

    async fn year_of_birth(&self) -> i32 {
        self.model.year_of_birth
    }

    /// Identifier of the owning user
    async fn user_id(&self) -> Uuid {
        Uuid::from(self.model.user_id.as_str())
    }

    async fn member_type_id(&self) -> Result<MemberTypeId> {
        MemberTypeId::from_db_str(&self.model.member_type_id)
            .ok_or_else(|| errors::invalid_db_data("profile.member_type_id", &self.model.member_type_id))
    }

    /// The membership tier this profile belongs to
    async fn member_type(&self, ctx: &Context<'_>) -> Result<Option<MemberType>> {
        let db = ctx.data::<DatabaseConnection>()?;

        let tier = member_type::Entity::find_by_id(self.model.member_type_id.clone())
            .one(db)
            .await
            .map_err(|e| errors::query_failed("member type lookup", e))?;

        Ok(tier.map(MemberType::from))
    }
}
