use async_graphql::{Context, Object, Result};
use feedhub_api_types::MemberTypeId;
use feedhub_db_entity::{member_type, profile};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::{errors, types::Profile};

/// A membership tier
#[derive(Clone, Debug)]
pub struct MemberType {
    model: member_type::Model,
}

impl From<member_type::Model> for MemberType {
    fn from(model: member_type::Model) -> Self {
        Self { model }
    }
}

#[Object]
impl MemberType {
    async fn id(&self) -> Result<MemberTypeId> {
        MemberTypeId::from_db_str(&self.model.id)
            .ok_or_else(|| errors::invalid_db_data("member_type.id", &self.model.id))
    }

    /// Discount rate granted by the tier, in percent
    async fn discount(&self) -> f64 {
        self.model.discount
    }

    /// How many posts a member of this tier may publish per month
    async fn posts_limit_per_month(&self) -> i32 {
        self.model.posts_limit_per_month
    }

    /// Profiles currently assigned to this tier
    async fn profiles(&self, ctx: &Context<'_>) -> Result<Vec<Profile>> {
        let db = ctx.data::<DatabaseConnection>()?;

        let profiles = profile::Entity::find()
            .filter(profile::Column::MemberTypeId.eq(self.model.id.as_str()))
            .all(db)
            .await
            .map_err(|e| errors::query_failed("member type profiles lookup", e))?;

        Ok(profiles.into_iter().map(Profile::from).collect())
    }
}
