use crate::cli::error::{CliError, CliResult};
use crate::cli::render::render_view;
use crate::users::{DataController, Filters, QueryState, Sort, SortField, SortOrder, UserSource};

/// Arguments for a one-shot listing
#[derive(Debug)]
pub struct ListArgs<'a> {
    pub page: u32,
    pub gender: Option<&'a str>,
    pub country: Option<&'a str>,
    pub sort: Option<SortField>,
    pub order: SortOrder,
    /// Keep server order instead of sorting.
    pub unsorted: bool,
}

impl Default for ListArgs<'_> {
    fn default() -> Self {
        Self {
            page: 1,
            gender: None,
            country: None,
            sort: None,
            order: SortOrder::Asc,
            unsorted: false,
        }
    }
}

impl ListArgs<'_> {
    fn query(&self) -> QueryState {
        let sort = if self.unsorted {
            Sort::unset()
        } else {
            Sort::by(self.sort.unwrap_or(SortField::Id), self.order)
        };
        QueryState::new(self.page, Filters::new(self.gender, self.country), sort)
    }
}

/// Fetch and render a single page of users.
///
/// Unlike the interactive browser, there is no earlier page to fall back to,
/// so a failed fetch is returned as an error.
pub async fn list_users<S: UserSource>(
    source: S,
    args: ListArgs<'_>,
    format: &str,
) -> CliResult<String> {
    let mut controller = DataController::with_query(source, args.query());
    controller.try_refresh().await?;

    let total_pages = controller.result().total_pages;
    if total_pages > 0 && controller.query().page() > total_pages {
        return Err(CliError::InvalidArgument {
            message: format!(
                "page {} is out of range (1-{})",
                controller.query().page(),
                total_pages
            ),
        });
    }

    render_view(&controller, format)
}
