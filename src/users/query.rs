//! Query state and its transitions.
//!
//! `QueryState` is the full set of parameters that decides what is fetched
//! and how the fetched page is transformed locally. It only ever changes
//! through [`QueryState::reduce`], so every coupling between parameters
//! (clearing the gender filter resets the sort) is a visible transition.

use serde::{Deserialize, Serialize};

/// Number of records requested per page. Fixed.
pub const PAGE_LIMIT: u32 = 10;

/// Sort order for the local sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(format!("Invalid sort order: {} (expected asc or desc)", s)),
        }
    }
}

/// Record fields the table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Id,
    /// Sorts by first name.
    Name,
    Age,
    Gender,
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortField::Id => write!(f, "id"),
            SortField::Name => write!(f, "name"),
            SortField::Age => write!(f, "age"),
            SortField::Gender => write!(f, "gender"),
        }
    }
}

impl std::str::FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "id" => Ok(SortField::Id),
            "name" => Ok(SortField::Name),
            "age" => Ok(SortField::Age),
            "gender" => Ok(SortField::Gender),
            _ => Err(format!(
                "Invalid sort field: {} (expected id, name, age or gender)",
                s
            )),
        }
    }
}

/// Sort selection. `field == None` means unsorted: server order is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sort {
    pub field: Option<SortField>,
    pub order: SortOrder,
}

impl Sort {
    pub fn by(field: SortField, order: SortOrder) -> Self {
        Self {
            field: Some(field),
            order,
        }
    }

    pub fn unset() -> Self {
        Self::default()
    }

    /// Header-click semantics: the same field flips asc to desc, anything
    /// else starts over at asc.
    pub fn toggled(self, field: SortField) -> Self {
        let order = if self.field == Some(field) && self.order == SortOrder::Asc {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        };
        Self::by(field, order)
    }
}

/// Which filter a [`QueryAction::SetFilter`] targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Gender,
    Country,
}

/// Exact-match filters. `None` means no constraint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Filters {
    gender: Option<String>,
    country: Option<String>,
}

/// Blank input is the "All" option.
fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl Filters {
    pub fn new(gender: Option<&str>, country: Option<&str>) -> Self {
        Self {
            gender: normalize(gender),
            country: normalize(country),
        }
    }

    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref()
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.gender.is_none() && self.country.is_none()
    }
}

/// A single user interaction, expressed as reducer input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryAction {
    /// Set or clear (with `None` or a blank value) one filter.
    SetFilter {
        field: FilterField,
        value: Option<String>,
    },
    /// Click on a sortable column header.
    ToggleSort(SortField),
    /// Replace the sort selection outright.
    SetSort(Sort),
    /// Jump to a page; clamped to the known page range.
    GoToPage(u32),
}

/// Parameters that determine what is fetched and how it is transformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    page: u32,
    limit: u32,
    filters: Filters,
    sort: Sort,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: 1,
            limit: PAGE_LIMIT,
            filters: Filters::default(),
            sort: Sort::by(SortField::Id, SortOrder::Asc),
        }
    }
}

impl QueryState {
    pub fn new(page: u32, filters: Filters, sort: Sort) -> Self {
        Self {
            page: page.max(1),
            limit: PAGE_LIMIT,
            filters,
            sort,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn sort(&self) -> Sort {
        self.sort
    }

    /// Offset of the first record of the current page.
    pub fn skip(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }

    /// Apply one action and return the next state.
    ///
    /// `total_pages` is the page count from the latest result; page jumps are
    /// clamped to `[1, max(total_pages, 1)]`.
    pub fn reduce(&self, action: QueryAction, total_pages: u32) -> QueryState {
        let mut next = self.clone();
        match action {
            QueryAction::SetFilter {
                field: FilterField::Gender,
                value,
            } => {
                next.filters.gender = normalize(value.as_deref());
                if next.filters.gender.is_none() {
                    next.sort = Sort::unset();
                }
            }
            QueryAction::SetFilter {
                field: FilterField::Country,
                value,
            } => {
                next.filters.country = normalize(value.as_deref());
            }
            QueryAction::ToggleSort(field) => {
                next.sort = self.sort.toggled(field);
            }
            QueryAction::SetSort(sort) => {
                next.sort = sort;
            }
            QueryAction::GoToPage(page) => {
                next.page = page.clamp(1, total_pages.max(1));
            }
        }
        next
    }
}
