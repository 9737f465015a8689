//! The data controller: owns the query, fetches, transforms, and exposes
//! the resulting records.

use serde::Serialize;
use tracing::{debug, error, info};

use crate::users::models::UserRecord;
use crate::users::pagination::{PageWindow, page_window, total_pages};
use crate::users::query::{QueryAction, QueryState};
use crate::users::row::{UserRow, render_rows};
use crate::users::source::{FetchResult, UserSource};
use crate::users::transform::transform;

/// Outcome of the latest successful fetch. Replaced wholesale, never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultState {
    /// Filtered and sorted records of the current page.
    pub records: Vec<UserRecord>,
    /// Server-reported size of the whole collection.
    pub total: u64,
    /// `ceil(total / limit)`, computed from the unfiltered total.
    pub total_pages: u32,
}

impl Default for ResultState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            total: 0,
            total_pages: 1,
        }
    }
}

/// Drives fetches from query changes.
///
/// Every method that fetches takes `&mut self`, so fetches never overlap and
/// results are applied in the order they were requested.
pub struct DataController<S> {
    source: S,
    query: QueryState,
    result: ResultState,
}

impl<S: UserSource> DataController<S> {
    pub fn new(source: S) -> Self {
        Self::with_query(source, QueryState::default())
    }

    pub fn with_query(source: S, query: QueryState) -> Self {
        Self {
            source,
            query,
            result: ResultState::default(),
        }
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn result(&self) -> &ResultState {
        &self.result
    }

    /// Rows for the current records, in display order.
    pub fn rows(&self) -> Vec<UserRow> {
        render_rows(&self.result.records)
    }

    pub fn pagination(&self) -> PageWindow {
        page_window(self.query.page(), self.result.total_pages)
    }

    /// Fetch the current query's page and replace the result.
    ///
    /// On error the previous result is kept and the error is returned.
    pub async fn try_refresh(&mut self) -> FetchResult<()> {
        let limit = self.query.limit();
        let page = self
            .source
            .fetch_page(limit, self.query.skip())
            .await?;

        let fetched = page.users.len();
        let records = transform(page.users, &self.query);
        debug!(
            fetched,
            kept = records.len(),
            total = page.total,
            "Applied local filters and sort"
        );

        self.result = ResultState {
            records,
            total: page.total,
            total_pages: total_pages(page.total, limit),
        };
        Ok(())
    }

    /// Like [`try_refresh`](Self::try_refresh), but a failure is only logged.
    ///
    /// Returns whether the result was replaced.
    pub async fn refresh(&mut self) -> bool {
        match self.try_refresh().await {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, page = self.query.page(), "Error fetching users");
                false
            }
        }
    }

    /// Apply a user interaction. Fetches once if the query changed.
    ///
    /// Returns whether a fetch was issued (not whether it succeeded).
    pub async fn dispatch(&mut self, action: QueryAction) -> bool {
        let next = self.query.reduce(action, self.result.total_pages);
        if next == self.query {
            debug!("Query unchanged, skipping fetch");
            return false;
        }

        info!(
            page = next.page(),
            sort = ?next.sort(),
            filters = ?next.filters(),
            "Query changed"
        );
        self.query = next;
        self.refresh().await;
        true
    }
}
