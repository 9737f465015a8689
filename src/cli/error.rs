use miette::Diagnostic;
use thiserror::Error;

use crate::users::FetchError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Fetch(#[from] FetchError),

    #[error("Invalid argument: {message}")]
    #[diagnostic(code(roster::cli::invalid_argument))]
    InvalidArgument { message: String },

    #[error("Failed to set up HTTP client: {message}")]
    #[diagnostic(
        code(roster::cli::client_setup),
        help("Check the --timeout-secs value and the TLS configuration of this machine.")
    )]
    ClientSetup { message: String },

    #[error("Failed to encode output: {message}")]
    #[diagnostic(code(roster::cli::output))]
    Output { message: String },

    #[error("I/O error: {0}")]
    #[diagnostic(code(roster::cli::io))]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FetchError::Decode {
                message: e.to_string(),
            }
        } else if let Some(status) = e.status() {
            FetchError::Status {
                status: status.as_u16(),
                message: e.to_string(),
            }
        } else {
            FetchError::Connection {
                message: e.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output {
            message: e.to_string(),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
