use serde::{Deserialize, Serialize};

use crate::error::PaginationError;

/// Arguments for constructing a [`Pagination`], typically built once per
/// request from query parameters and the data source's counts.
///
/// `records` is carried through for display only (e.g. "showing N of M")
/// and never enters any calculation; it can stay at its default when not
/// needed.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Args {
    /// Maximum number of window entries to show.
    pub max_entries: i64,
    /// Desired offset of the active page from the window start.
    pub window_pos: i64,
    /// The requested page, 1-based.
    pub page: i64,
    /// Records returned for the current page (display only).
    #[serde(default)]
    pub records: i64,
    /// Total record count across all pages.
    pub total: i64,
    /// Records per page; must be greater than zero.
    pub size: i64,
}

impl Args {
    /// Sanity-check the provided values, returning the first violation.
    ///
    /// Checked in order: `size <= 0`, `records > size`, `records > total`.
    /// A failure here points at the calling code or an inconsistent query
    /// result, not at user input.
    pub fn validate(&self) -> Result<(), PaginationError> {
        if self.size <= 0 {
            return Err(PaginationError::InvalidSize);
        }
        if self.records > self.size {
            return Err(PaginationError::RecordsExceedSize);
        }
        if self.records > self.total {
            return Err(PaginationError::RecordsExceedTotal);
        }
        Ok(())
    }

    /// Total number of pages, rounded up.
    ///
    /// Returns 0 when `total <= 0` or `size <= 0`. The explicit branch
    /// matters: Rust integer division truncates toward zero, so the
    /// `(total - 1) / size + 1` formula alone would report one page for an
    /// empty result set.
    pub fn page_count(&self) -> i64 {
        if self.total <= 0 || self.size <= 0 {
            return 0;
        }
        (self.total - 1) / self.size + 1
    }
}

/// One slot in the pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// True for the current page, false for any other.
    pub active: bool,
    /// The page number this entry represents, 1-based.
    pub number: i64,
}

/// A computed pagination window, ready to hand to a view renderer.
///
/// `prev_page` and `next_page` use 0 as a "no such page" sentinel, since
/// valid page numbers are 1-based. `entries` holds the bounded window in
/// ascending order with exactly the active page marked, whenever the
/// current page falls inside the window.
///
/// All fields are plain owned values; the struct is immutable after
/// construction and safe to share across threads or template renders.
#[derive(Debug, Clone, Serialize)]
pub struct Pagination {
    /// Previous page number, 0 if on the first page.
    pub prev_page: i64,
    /// The current page, echoed from [`Args`].
    pub page: i64,
    /// Next page number, 0 if on the last page.
    pub next_page: i64,
    /// Records on the current page, echoed from [`Args`].
    pub records: i64,
    /// Total record count, echoed from [`Args`].
    pub total: i64,
    /// Page size, echoed from [`Args`].
    pub size: i64,
    /// Total number of pages, rounded up.
    pub page_count: i64,
    /// The display window, `min(max_entries, page_count)` entries long.
    pub entries: Vec<Entry>,
}

impl Pagination {
    /// Validate `args` and compute the full pagination window.
    ///
    /// Returns [`PaginationError::PageOutOfRange`] when the requested page
    /// lies beyond the last page; see
    /// [`PaginationError::is_page_out_of_range`] for how callers are
    /// expected to branch on it.
    ///
    /// # Example
    ///
    /// ```
    /// use pagination::{Args, Pagination};
    ///
    /// let pag = Pagination::new(Args {
    ///     max_entries: 5,
    ///     window_pos: 3,
    ///     page: 7,
    ///     records: 10,
    ///     total: 100,
    ///     size: 10,
    /// })?;
    /// assert_eq!(pag.page_count, 10);
    /// assert_eq!(pag.prev_page, 6);
    /// assert_eq!(pag.next_page, 8);
    /// # Ok::<(), pagination::PaginationError>(())
    /// ```
    pub fn new(args: Args) -> Result<Self, PaginationError> {
        args.validate()?;

        let page_count = args.page_count();
        if args.page > page_count {
            return Err(PaginationError::PageOutOfRange);
        }

        // The configured maximum never exceeds the page count; the clamped
        // value drives both the window-start math and the entry count.
        let max = args.max_entries.min(page_count);

        let prev_page = if args.page <= 1 { 0 } else { args.page - 1 };
        let next_page = if args.page == page_count {
            0
        } else {
            args.page + 1
        };

        // Start page of the window, placing the active page `window_pos`
        // slots in, unless that would run past either end of the range.
        let desired = args.page - args.window_pos;
        let mut start = if desired < 0 {
            // Floor clamp only; no shift-to-fit.
            0
        } else if max - args.window_pos + args.page > page_count {
            // Right-align against the last page.
            page_count - max
        } else {
            desired
        };
        start += 1;

        let entries = (0..max)
            .map(|i| Entry {
                number: start + i,
                active: start + i == args.page,
            })
            .collect();

        Ok(Self {
            prev_page,
            page: args.page,
            next_page,
            records: args.records,
            total: args.total,
            size: args.size,
            page_count,
            entries,
        })
    }
}
