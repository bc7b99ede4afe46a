//! Error types and utilities for the feedhub API
//!
//! This module provides:
//! - Server-level errors (ApiError enum) for infrastructure failures
//! - GraphQL error codes and message templates for API responses
//! - Builder functions creating field errors with a consistent `code` extension

use async_graphql::ErrorExtensions;
use thiserror::Error;

// ============================================================================
// Server-Level Errors
// ============================================================================

/// API-related errors for server infrastructure
#[derive(Debug, Error)]
pub enum ApiError {
    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

// ============================================================================
// GraphQL Error Codes
// ============================================================================

/// Error codes for GraphQL API errors
///
/// All GraphQL error responses use these standardized codes for consistent
/// client-side error handling.
pub mod codes {
    /// Context retrieval errors (database connection, config, etc.)
    pub const CONTEXT_ERROR: &str = "CONTEXT_ERROR";

    /// Database query execution failures
    pub const QUERY_FAILED: &str = "QUERY_FAILED";

    /// Resource not found errors
    pub const NOT_FOUND: &str = "NOT_FOUND";

    /// Malformed data in database
    pub const INVALID_DB_DATA: &str = "INVALID_DB_DATA";
}

// ============================================================================
// GraphQL Error Message Templates
// ============================================================================

/// Message templates for common error scenarios
pub mod messages {
    /// Database query error message
    pub fn query_error(operation: &str, error: impl std::fmt::Display) -> String {
        format!("Database query failed during {}: {}", operation, error)
    }

    /// Resource not found error message
    pub fn not_found(resource_type: &str, identifier: impl std::fmt::Display) -> String {
        format!("{} not found: {}", resource_type, identifier)
    }

    /// Invalid database data error message
    pub fn invalid_db_data(field: &str, value: &str) -> String {
        format!("Invalid data in database field '{}': {}", field, value)
    }
}

// ============================================================================
// GraphQL Error Builder Functions
// ============================================================================

fn with_code(error: async_graphql::Error, code: &'static str) -> async_graphql::Error {
    error.extend_with(|_, e| e.set("code", code))
}

/// Creates a field error for database query failures
pub fn query_failed(operation: &str, error: impl std::fmt::Display) -> async_graphql::Error {
    with_code(
        async_graphql::Error::new(messages::query_error(operation, error)),
        codes::QUERY_FAILED,
    )
}

/// Creates a field error for resource not found
pub fn not_found(resource_type: &str, identifier: impl std::fmt::Display) -> async_graphql::Error {
    with_code(
        async_graphql::Error::new(messages::not_found(resource_type, identifier)),
        codes::NOT_FOUND,
    )
}

/// Creates a field error for invalid database data
pub fn invalid_db_data(field: &str, value: &str) -> async_graphql::Error {
    with_code(
        async_graphql::Error::new(messages::invalid_db_data(field, value)),
        codes::INVALID_DB_DATA,
    )
}
