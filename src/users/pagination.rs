//! Page count and the sliding window of page buttons.

use serde::Serialize;

/// Number of numbered buttons the window shows at most.
pub const WINDOW_SIZE: u32 = 4;

/// Pages needed to show `total` records, `limit` per page.
///
/// Always derived from the server-reported total, so it does not shrink when
/// local filters drop records from the current page.
pub fn total_pages(total: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    let pages = total.div_ceil(u64::from(limit));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// The buttons to render for one pagination bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    /// The page currently shown (marked active).
    pub current: u32,
    /// Numbered buttons, in ascending order.
    pub pages: Vec<u32>,
    /// Target of the Prev button, when shown.
    pub prev: Option<u32>,
    /// Target of the Next button, when shown.
    pub next: Option<u32>,
}

impl PageWindow {
    pub fn is_active(&self, page: u32) -> bool {
        page == self.current
    }
}

/// Window of up to [`WINDOW_SIZE`] pages starting two before `page`.
///
/// The start is clamped to 1 and the end to `total_pages`; the window is not
/// shifted back near the last page, so it can hold fewer buttons there.
/// Prev/Next only appear when the window does not already touch that end.
pub fn page_window(page: u32, total_pages: u32) -> PageWindow {
    let start = page.saturating_sub(WINDOW_SIZE / 2).max(1);
    let end = total_pages.min(start + WINDOW_SIZE - 1);

    PageWindow {
        current: page,
        pages: (start..=end).collect(),
        prev: (start > 1).then(|| start - 1),
        next: (end < total_pages).then(|| end + 1),
    }
}
