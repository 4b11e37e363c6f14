//! Credential hashing and session tokens

mod password;
mod session;

pub use password::{
    hash_password, validate_password_strength, verify_password, PasswordService,
    MIN_PASSWORD_LENGTH,
};
pub use session::{IssuedToken, SessionClaims, SessionTokenService};
