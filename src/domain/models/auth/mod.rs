pub mod authenticated_user;
pub mod identity_policy;

pub use authenticated_user::AuthenticatedUser;
pub use identity_policy::{AuthMode, RequiredRole};
