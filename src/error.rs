/// Errors reported when constructing a [`Pagination`](crate::Pagination).
///
/// Every kind is terminal for that single call: the only remedy is for the
/// caller to supply corrected [`Args`](crate::Args).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationError {
    /// `size` was zero or negative.
    InvalidSize,
    /// `records` exceeded `size`.
    RecordsExceedSize,
    /// `records` exceeded `total`.
    RecordsExceedTotal,
    /// The requested `page` lies beyond the last page.
    PageOutOfRange,
}

impl PaginationError {
    /// Whether this error should map to a client-facing bad request.
    ///
    /// Only [`PageOutOfRange`](Self::PageOutOfRange) originates from user
    /// input (a page number in a URL); the remaining kinds indicate a bug
    /// in the calling code or an inconsistent upstream query result and
    /// belong on the internal-fault side of a handler's error mapping.
    pub fn is_page_out_of_range(&self) -> bool {
        matches!(self, PaginationError::PageOutOfRange)
    }
}

impl std::fmt::Display for PaginationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaginationError::InvalidSize => write!(f, "page size must be greater than zero"),
            PaginationError::RecordsExceedSize => write!(f, "records exceed page size"),
            PaginationError::RecordsExceedTotal => write!(f, "records exceed total records"),
            PaginationError::PageOutOfRange => write!(f, "requested page is out of range"),
        }
    }
}

impl std::error::Error for PaginationError {}
