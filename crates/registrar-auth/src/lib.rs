//! # Registrar Auth
//!
//! Session tokens for the Registrar API.
//!
//! Schools, students and teachers log in with email and password and receive
//! an HS256 JWT. The token is self-contained: verifying it needs only the
//! signing secret, and its claims carry the caller's [`Identity`].
//!
//! # Example
//!
//! ```ignore
//! use registrar_auth::{Identity, Role, create_access_token, verify_token};
//! use registrar_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(&identity, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.role, Role::School);
//! ```

pub mod claims;
pub mod jwt;

pub use claims::{Claims, Identity, Role};
pub use jwt::{create_access_token, verify_token};
