use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// The server could not be reached or its response could not be read.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a failure envelope.
    #[error("{message} ({status})")]
    Api { status: u16, message: String },

    /// The form was rejected before anything was sent.
    #[error("{0}")]
    Validation(String),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("No scripted answer left for \"{0}\"")]
    ScriptExhausted(String),

    #[error("No {label} with id {id}")]
    UnknownRecord { label: &'static str, id: String },
}

pub type CliResult<T> = Result<T, CliError>;
