//! # Registrar CLI
//!
//! Administrative client for the Registrar API. Talks to a running server
//! over HTTP; it never touches the document store directly.
//!
//! - [`client`]: Envelope-aware HTTP client
//! - [`page`]: Interactive list plus create/edit/delete form for one entity kind
//! - [`entities`]: Entity kinds and their form layouts
//! - [`seeder`]: Fake data generation

pub mod client;
pub mod entities;
pub mod error;
pub mod forms;
pub mod page;
pub mod prompt;
pub mod seeder;

pub use client::{ApiClient, DEFAULT_API_URL};
pub use entities::EntityKind;
pub use error::{CliError, CliResult};
pub use page::EntityPage;
pub use prompt::{Prompter, ScriptedPrompter, TerminalPrompter};
