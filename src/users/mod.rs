//! User list domain: query state, local transforms, pagination and rows.
//!
//! Nothing in here knows about HTTP or the terminal. Records come in through
//! [`UserSource`], and the view reads [`UserRow`]s and a [`PageWindow`] from
//! the [`DataController`].

mod controller;
mod models;
#[cfg(test)]
mod models_test;
mod pagination;
mod query;
mod row;
mod source;
mod transform;

#[cfg(test)]
pub(crate) mod fixtures;

pub use controller::{DataController, ResultState};
pub use models::{Address, Company, UserPage, UserRecord};
pub use pagination::{PageWindow, WINDOW_SIZE, page_window, total_pages};
pub use query::{
    FilterField, Filters, PAGE_LIMIT, QueryAction, QueryState, Sort, SortField, SortOrder,
};
pub use row::{UserRow, render_rows};
#[cfg(test)]
pub use source::MockUserSource;
pub use source::{FetchError, FetchResult, UserSource};
pub use transform::{apply_filters, apply_sort, locale_compare, matches, transform};
