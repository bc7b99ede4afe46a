//! GraphQL type definitions for the feedhub API
//!
//! This crate contains pure GraphQL type definitions that can be reused
//! by clients without depending on the full API server implementation:
//! the `UUID` scalar, the member tier enum, and the input objects accepted
//! by the mutation root.

use std::fmt;

use async_graphql::{
    Enum, InputObject, InputValueError, InputValueResult, Scalar, ScalarType, Value,
};

/// Entity identifier exposed as the `UUID` scalar.
///
/// Output serialization passes the stored string through unchanged. Input
/// parsing rejects anything that is not a well-formed UUID, so resolvers
/// never see a malformed identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Uuid(String);

#[Scalar(name = "UUID")]
impl ScalarType for Uuid {
    fn parse(value: Value) -> InputValueResult<Self> {
        match value {
            Value::String(s) => {
                if uuid::Uuid::parse_str(&s).is_err() {
                    return Err(InputValueError::custom(format!("invalid UUID: {s}")));
                }
                Ok(Uuid(s))
            }
            other => Err(InputValueError::expected_type(other)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.clone())
    }
}

impl Uuid {
    /// Mint a fresh v4 identifier for a newly created row.
    pub fn new_v4() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifiers read back from storage are trusted; rows are only ever
/// created with ids minted by [`Uuid::new_v4`].
impl From<String> for Uuid {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for Uuid {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Membership tier identifier, a closed set
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum MemberTypeId {
    #[graphql(name = "BASIC")]
    Basic,
    #[graphql(name = "BUSINESS")]
    Business,
}

impl MemberTypeId {
    /// Storage representation of the tier id.
    pub fn as_db_str(&self) -> &'static str {
        match self {
            MemberTypeId::Basic => "basic",
            MemberTypeId::Business => "business",
        }
    }

    /// Map a stored tier id back onto the enum; `None` for unknown values.
    pub fn from_db_str(value: &str) -> Option<Self> {
        match value {
            "basic" => Some(MemberTypeId::Basic),
            "business" => Some(MemberTypeId::Business),
            _ => None,
        }
    }
}

/// Attributes required to create a user
#[derive(InputObject, Clone, Debug)]
pub struct CreateUserInput {
    pub name: String,
    pub balance: f64,
}

/// Mutable user attributes; absent fields keep their prior values
#[derive(InputObject, Clone, Debug, Default)]
pub struct ChangeUserInput {
    pub name: Option<String>,
    pub balance: Option<f64>,
}

/// Attributes required to create a post
#[derive(InputObject, Clone, Debug)]
pub struct CreatePostInput {
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
}

/// Mutable post attributes; absent fields keep their prior values
#[derive(InputObject, Clone, Debug, Default)]
pub struct ChangePostInput {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Attributes required to create a profile
#[derive(InputObject, Clone, Debug)]
pub struct CreateProfileInput {
    pub is_male: bool,
    pub year_of_birth: i32,
    pub user_id: Uuid,
    pub member_type_id: MemberTypeId,
}

/// Mutable profile attributes; absent fields keep their prior values.
/// The owning user of a profile never changes.
#[derive(InputObject, Clone, Debug, Default)]
pub struct ChangeProfileInput {
    pub is_male: Option<bool>,
    pub year_of_birth: Option<i32>,
    pub member_type_id: Option<MemberTypeId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_scalar_round_trips_valid_input() {
        let input = Value::String("6f9619ff-8b86-d011-b42d-00c04fc964ff".to_string());
        let parsed = <Uuid as ScalarType>::parse(input.clone()).unwrap();
        assert_eq!(parsed.to_value(), input);
    }

    #[test]
    fn uuid_scalar_rejects_malformed_string() {
        let result = <Uuid as ScalarType>::parse(Value::String("not-a-uuid".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn uuid_scalar_rejects_non_string_value() {
        let result = <Uuid as ScalarType>::parse(Value::Number(42.into()));
        assert!(result.is_err());
    }

    #[test]
    fn minted_uuid_parses_as_valid() {
        let id = Uuid::new_v4();
        assert!(<Uuid as ScalarType>::parse(Value::String(id.to_string())).is_ok());
    }

    #[test]
    fn member_type_id_maps_to_storage_and_back() {
        assert_eq!(MemberTypeId::Basic.as_db_str(), "basic");
        assert_eq!(MemberTypeId::Business.as_db_str(), "business");
        assert_eq!(
            MemberTypeId::from_db_str("basic"),
            Some(MemberTypeId::Basic)
        );
        assert_eq!(
            MemberTypeId::from_db_str("business"),
            Some(MemberTypeId::Business)
        );
        assert_eq!(MemberTypeId::from_db_str("platinum"), None);
    }
}
