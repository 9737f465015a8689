//! Terminal rendering of a controller's current view.

use serde::Serialize;
use tabled::{Table, Tabled};

use crate::cli::error::CliResult;
use crate::cli::utils::{apply_table_style, format_filter, truncate_with_ellipsis};
use crate::users::{DataController, PageWindow, QueryState, ResultState, UserRow, UserSource};

#[derive(Tabled)]
pub(crate) struct UserRowDisplay {
    #[tabled(rename = "ID")]
    pub(crate) id: u64,
    #[tabled(rename = "Image")]
    pub(crate) image: String,
    #[tabled(rename = "Full Name")]
    pub(crate) full_name: String,
    #[tabled(rename = "Demography")]
    pub(crate) demography: String,
    #[tabled(rename = "Designation")]
    pub(crate) designation: String,
    #[tabled(rename = "Location")]
    pub(crate) location: String,
}

impl From<&UserRow> for UserRowDisplay {
    fn from(row: &UserRow) -> Self {
        Self {
            id: row.id,
            image: truncate_with_ellipsis(&row.image, 40),
            full_name: truncate_with_ellipsis(&row.full_name, 30),
            demography: row.demography.clone(),
            designation: truncate_with_ellipsis(&row.designation, 30),
            location: truncate_with_ellipsis(&row.location, 50),
        }
    }
}

pub(crate) fn format_table(rows: &[UserRow]) -> String {
    if rows.is_empty() {
        return "No users found.".to_string();
    }

    let display_rows: Vec<UserRowDisplay> = rows.iter().map(|r| r.into()).collect();
    let mut table = Table::new(display_rows);
    apply_table_style(&mut table);
    table.to_string()
}

/// `« Prev  1 [2] 3 4  Next »`, with the active page in brackets.
pub(crate) fn format_pagination(window: &PageWindow) -> String {
    let mut parts = Vec::new();
    if window.prev.is_some() {
        parts.push("« Prev".to_string());
    }

    let numbers: Vec<String> = window
        .pages
        .iter()
        .map(|&p| {
            if window.is_active(p) {
                format!("[{}]", p)
            } else {
                p.to_string()
            }
        })
        .collect();
    if !numbers.is_empty() {
        parts.push(numbers.join(" "));
    }

    if window.next.is_some() {
        parts.push("Next »".to_string());
    }
    parts.join("  ")
}

pub(crate) fn format_summary(query: &QueryState, result: &ResultState) -> String {
    let sort = match query.sort().field {
        Some(field) => format!("{} {}", field, query.sort().order),
        None => "-".to_string(),
    };
    format!(
        "Page {} of {} ({} users) | sort: {} | gender: {} | country: {}",
        query.page(),
        result.total_pages,
        result.total,
        sort,
        format_filter(query.filters().gender()),
        format_filter(query.filters().country()),
    )
}

#[derive(Serialize)]
struct PageView<'a> {
    page: u32,
    total_pages: u32,
    total: u64,
    query: &'a QueryState,
    users: Vec<UserRow>,
    pagination: PageWindow,
}

/// Render the controller's current page as `table` (default) or `json`.
pub fn render_view<S: UserSource>(controller: &DataController<S>, format: &str) -> CliResult<String> {
    let query = controller.query();
    let result = controller.result();
    let rows = controller.rows();
    let window = controller.pagination();

    match format {
        "json" => {
            let view = PageView {
                page: query.page(),
                total_pages: result.total_pages,
                total: result.total,
                query,
                users: rows,
                pagination: window,
            };
            Ok(serde_json::to_string_pretty(&view)?)
        }
        _ => {
            let mut out = format_table(&rows);
            out.push('\n');
            out.push_str(&format_summary(query, result));
            let bar = format_pagination(&window);
            if !bar.is_empty() {
                out.push('\n');
                out.push_str(&bar);
            }
            Ok(out)
        }
    }
}
