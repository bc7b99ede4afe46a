//! Common test utilities and setup functions for API integration tests
//!
//! The main function `setup_test_environment` connects an in-memory SQLite
//! database, applies the migrations, and builds the GraphQL schema. Tests
//! drive the schema directly with GraphQL documents, the same way the HTTP
//! handler does.

use anyhow::Context as _;
use async_graphql::{Request, Response, Variables};
use feedhub_api::schema::{build_schema, FeedhubSchema};
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

/// Test context containing the executable schema and the backing database
#[allow(unused)]
pub struct TestContext {
    pub schema: FeedhubSchema,
    pub db: DatabaseConnection,
}

/// Set up a migrated in-memory database and the GraphQL schema on top of it
#[allow(unused)]
pub async fn setup_test_environment() -> anyhow::Result<TestContext> {
    let _ = env_logger::builder().is_test(true).try_init();

    let db = Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;

    let schema = build_schema(db.clone());

    Ok(TestContext { schema, db })
}

/// Execute a GraphQL document without variables
#[allow(unused)]
pub async fn execute(schema: &FeedhubSchema, document: &str) -> Response {
    schema.execute(document).await
}

/// Execute a GraphQL document with a JSON variables object
#[allow(unused)]
pub async fn execute_with_vars(
    schema: &FeedhubSchema,
    document: &str,
    variables: serde_json::Value,
) -> Response {
    let request = Request::new(document).variables(Variables::from_json(variables));
    schema.execute(request).await
}

/// Unwrap a response into its JSON data, failing on any GraphQL error
#[allow(unused)]
pub fn data(response: Response) -> anyhow::Result<serde_json::Value> {
    anyhow::ensure!(
        response.errors.is_empty(),
        "unexpected GraphQL errors: {:?}",
        response.errors
    );
    Ok(response.data.into_json()?)
}

/// Create a user through the mutation root, returning its id
#[allow(unused)]
pub async fn create_user(schema: &FeedhubSchema, name: &str, balance: f64) -> anyhow::Result<String> {
    let response = execute_with_vars(
        schema,
        "mutation($dto: CreateUserInput!) { createUser(dto: $dto) { id } }",
        serde_json::json!({ "dto": { "name": name, "balance": balance } }),
    )
    .await;

    let data = data(response)?;
    let id = data["createUser"]["id"]
        .as_str()
        .context("createUser returned no id")?;
    Ok(id.to_string())
}

/// Create a post through the mutation root, returning its id
#[allow(unused)]
pub async fn create_post(
    schema: &FeedhubSchema,
    title: &str,
    content: &str,
    author_id: &str,
) -> anyhow::Result<String> {
    let response = execute_with_vars(
        schema,
        "mutation($dto: CreatePostInput!) { createPost(dto: $dto) { id } }",
        serde_json::json!({ "dto": { "title": title, "content": content, "authorId": author_id } }),
    )
    .await;

    let data = data(response)?;
    let id = data["createPost"]["id"]
        .as_str()
        .context("createPost returned no id")?;
    Ok(id.to_string())
}

/// Create a profile through the mutation root, returning its id
#[allow(unused)]
pub async fn create_profile(
    schema: &FeedhubSchema,
    user_id: &str,
    member_type_id: &str,
    is_male: bool,
    year_of_birth: i32,
) -> anyhow::Result<String> {
    let response = execute_with_vars(
        schema,
        "mutation($dto: CreateProfileInput!) { createProfile(dto: $dto) { id } }",
        serde_json::json!({
            "dto": {
                "isMale": is_male,
                "yearOfBirth": year_of_birth,
                "userId": user_id,
                "memberTypeId": member_type_id,
            }
        }),
    )
    .await;

    let data = data(response)?;
    let id = data["createProfile"]["id"]
        .as_str()
        .context("createProfile returned no id")?;
    Ok(id.to_string())
}

/// Subscribe `user_id` to `author_id` through the mutation root
#[allow(unused)]
pub async fn subscribe(
    schema: &FeedhubSchema,
    user_id: &str,
    author_id: &str,
) -> anyhow::Result<()> {
    let response = execute_with_vars(
        schema,
        "mutation($userId: UUID!, $authorId: UUID!) { subscribeTo(userId: $userId, authorId: $authorId) { id } }",
        serde_json::json!({ "userId": user_id, "authorId": author_id }),
    )
    .await;

    data(response)?;
    Ok(())
}
