//! GraphQL schema builder for the feedhub API

use async_graphql::{EmptySubscription, Schema};
use sea_orm::DatabaseConnection;

use crate::{mutation::MutationRoot, query::QueryRoot};

/// The executable feedhub schema type
pub type FeedhubSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the async-graphql schema with the database connection injected
///
/// This creates a GraphQL schema with:
/// - Read queries (list and get-by-id per entity)
/// - Mutations (create/change/delete per entity, subscribe/unsubscribe)
/// - No GraphQL subscriptions (EmptySubscription)
///
/// The schema is configured with:
/// - Database connection injected as context data
/// - Query depth limit (10 levels) to prevent excessive nesting
/// - Query complexity limit (100 points) to prevent expensive operations
pub fn build_schema(db: DatabaseConnection) -> FeedhubSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .limit_depth(10)
        .limit_complexity(100)
        .data(db)
        .finish()
}

/// Export the GraphQL schema to SDL (Schema Definition Language) format
///
/// The SDL depends only on the type definitions, not on context data, so no
/// database connection is required.
pub fn export_schema_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}
