//! Paginated, filterable, sortable table of user records from a remote
//! users API.
//!
//! - [`users`]: query state, local filter/sort, pagination window, rows and
//!   the data controller
//! - [`cli`]: HTTP client and terminal front end

pub mod cli;
pub mod users;
