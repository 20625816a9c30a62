//! # Registrar Core
//!
//! Core types, errors, and utilities for the Registrar API.
//!
//! - [`errors`]: Application error type with envelope response conversion
//! - [`response`]: The `{success, message?, data?}` response envelopes
//! - [`password`]: Password hashing and verification
//! - [`serde`]: Custom serde deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use registrar_core::{ApiResponse, AppError};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Subject not found"));
//! let body = ApiResponse::with_message("Subject created successfully", subject);
//! ```

pub mod errors;
pub mod password;
pub mod response;
pub mod serde;

pub use errors::AppError;
pub use password::{hash_password, verify_password};
pub use response::{ApiResponse, ErrorResponse, MessageResponse};
