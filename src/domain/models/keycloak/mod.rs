pub mod representations;

pub use representations::{
    CredentialRepresentation, GroupRepresentation, RoleRepresentation, TokenResponse,
    UserRepresentation,
};
