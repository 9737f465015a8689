//! Abstraction over the remote paginated users API.
//!
//! The controller only sees this trait, so it can be driven by the HTTP
//! client in production and by a mock in tests.

use miette::Diagnostic;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

use crate::users::models::UserPage;

/// Errors that can occur while fetching a page of users.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Failed to reach users API: {message}")]
    #[diagnostic(
        code(roster::fetch::connection),
        help("Check the API URL (--api-url or ROSTER_API_URL) and your network connection.")
    )]
    Connection { message: String },

    #[error("Users API returned status {status}: {message}")]
    #[diagnostic(code(roster::fetch::status))]
    Status { status: u16, message: String },

    #[error("Could not decode users response: {message}")]
    #[diagnostic(
        code(roster::fetch::decode),
        help("The server returned data in an unexpected format.")
    )]
    Decode { message: String },
}

pub type FetchResult<T> = Result<T, FetchError>;

/// A paginated source of user records.
#[cfg_attr(test, automock)]
#[allow(async_fn_in_trait)]
pub trait UserSource {
    /// Fetch up to `limit` users starting at offset `skip`.
    async fn fetch_page(&self, limit: u32, skip: u64) -> FetchResult<UserPage>;
}
