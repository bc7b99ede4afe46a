//! GraphQL entity output types
//!
//! One type per storage table. Scalar attributes pass straight through from
//! the fetched row; relation fields issue one follow-up query scoped by a
//! key taken from the parent. `User` additionally carries optionally
//! preloaded subscription relations filled in by the eager-include path of
//! the `users` query.

mod member_type;
mod post;
mod profile;
mod user;

pub use member_type::MemberType;
pub use post::Post;
pub use profile::Profile;
pub use user::User;
