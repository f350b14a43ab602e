//! Authentication
//!
//! JWT bearer tokens for the back office, argon2 password storage, and
//! the axum middleware gluing them to the router.

pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{MaybeUser, require_auth};
pub use password::{hash_password, verify_password};
