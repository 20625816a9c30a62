//! Request extractors for cross-cutting concerns.
//!
//! - [`auth`]: the [`auth::AuthUser`] extractor, which validates a session
//!   token from the `Authorization` header or the `token` cookie

pub mod auth;
