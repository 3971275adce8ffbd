//! Bounded, centered pagination windows for server-rendered views.
//!
//! Given a total record count, a page size, the current page and two display
//! constraints, [`Pagination::new`] validates the inputs and produces an
//! immutable window of page-number [`Entry`] values with the active page
//! marked, plus prev/next pointers (0 means "no such page") for navigation
//! links. The whole calculation is pure integer arithmetic; the result
//! serializes directly for a template or JSON renderer.
//!
//! # Example
//!
//! ```
//! use pagination::{Args, Pagination};
//!
//! let pag = Pagination::new(Args {
//!     max_entries: 9,  // at most 9 entries in the window
//!     window_pos: 3,   // keep the active page 3 slots in
//!     page: 7,
//!     records: 5,      // rows on this page, display only
//!     total: 499,
//!     size: 5,
//! })?;
//!
//! assert_eq!(pag.page_count, 100);
//! for entry in &pag.entries {
//!     // render a link per entry; highlight when entry.active
//!     let _ = entry.number;
//! }
//! # Ok::<(), pagination::PaginationError>(())
//! ```

pub mod error;
pub mod page;

pub use error::PaginationError;
pub use page::{Args, Entry, Pagination};

pub mod prelude {
    //! Re-exports of the most commonly used pagination types.
    pub use crate::{Args, Entry, Pagination, PaginationError};
}
