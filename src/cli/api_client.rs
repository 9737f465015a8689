use std::env;
use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::cli::error::{CliError, CliResult};
use crate::users::{FetchError, FetchResult, UserPage, UserSource};

/// Environment variable consulted when no `--api-url` is given.
pub const API_URL_ENV: &str = "ROSTER_API_URL";

pub const DEFAULT_API_URL: &str = "https://dummyjson.com";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the remote users API
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// Priority for base URL:
    /// 1. Explicit `api_url` parameter
    /// 2. ROSTER_API_URL environment variable
    /// 3. Default: https://dummyjson.com
    pub fn new(api_url: Option<String>, timeout: Duration) -> CliResult<Self> {
        let base_url = api_url
            .or_else(|| env::var(API_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CliError::ClientSetup {
                message: e.to_string(),
            })?;

        Ok(Self { base_url, client })
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a GET request builder
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.get(&url)
    }

    /// Decode a successful response body, or turn a non-success status into
    /// `FetchError::Status` carrying the response text.
    pub async fn handle_response<T: DeserializeOwned>(response: Response) -> FetchResult<T> {
        if response.status().is_success() {
            response.json().await.map_err(|e| FetchError::Decode {
                message: e.to_string(),
            })
        } else {
            let status = response.status().as_u16();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(FetchError::Status {
                status,
                message: error_text,
            })
        }
    }
}

impl UserSource for ApiClient {
    #[instrument(skip(self))]
    async fn fetch_page(&self, limit: u32, skip: u64) -> FetchResult<UserPage> {
        let response = self
            .get("/users")
            .query(&[("limit", u64::from(limit)), ("skip", skip)])
            .send()
            .await?;

        let page: UserPage = Self::handle_response(response).await?;
        debug!(
            received = page.users.len(),
            total = page.total,
            "Fetched users page"
        );
        Ok(page)
    }
}
