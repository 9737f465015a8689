//! Client-side filter and sort over one fetched page.
//!
//! Filtering and sorting happen only within the records of the current
//! server page (at most `PAGE_LIMIT` of them). A filter never pulls matching
//! users from other pages, and the page count still reflects the unfiltered
//! server total. This is a known limitation of filtering a server-paginated
//! result locally.

use std::cmp::Ordering;

use crate::users::models::UserRecord;
use crate::users::query::{Filters, QueryState, Sort, SortField, SortOrder};

/// Locale-style string comparison.
///
/// Case-insensitive first; strings that differ only by case order lowercase
/// before uppercase, and identical strings are equal.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| b.cmp(a))
}

/// True when the record satisfies every active exact-match filter.
pub fn matches(record: &UserRecord, filters: &Filters) -> bool {
    filters.gender().is_none_or(|g| record.gender == g)
        && filters.country().is_none_or(|c| record.address.country == c)
}

pub fn apply_filters(records: Vec<UserRecord>, filters: &Filters) -> Vec<UserRecord> {
    if filters.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|r| matches(r, filters))
        .collect()
}

fn compare_by(a: &UserRecord, b: &UserRecord, field: SortField) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Age => a.age.cmp(&b.age),
        SortField::Name => locale_compare(&a.first_name, &b.first_name),
        SortField::Gender => locale_compare(&a.gender, &b.gender),
    }
}

/// Stable sort; an unset field leaves server order untouched.
pub fn apply_sort(records: &mut [UserRecord], sort: Sort) {
    let Some(field) = sort.field else {
        return;
    };
    records.sort_by(|a, b| match sort.order {
        SortOrder::Asc => compare_by(a, b, field),
        SortOrder::Desc => compare_by(b, a, field),
    });
}

/// Filter, then sort, as the query dictates.
pub fn transform(records: Vec<UserRecord>, query: &QueryState) -> Vec<UserRecord> {
    let mut out = apply_filters(records, query.filters());
    apply_sort(&mut out, query.sort());
    out
}
