//! View-state machine shared by every catalog frontend.
//!
//! # Design
//! `CatalogView` holds the local mirror of the server collection plus the
//! ephemeral UI state: search query, sort key, page index, form draft, and a
//! transient notification. The mirror is patched only from parsed server
//! responses (`apply_*`), never optimistically — when a round-trip fails the
//! host raises a notification and the mirror stays as it was.
//!
//! Filtering, sorting, and pagination are purely client-side over the full
//! fetched set; the server knows nothing about any of them.

use crate::types::Book;

/// Rows per page in `visible()`. Hosts can override via `with_page_size`.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Client-side sort order, ascending, case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Author,
}

/// In-progress form state. `editing` carries the id of the record being
/// edited, or `None` when the form creates a new one. While a draft exists
/// the frontend shows its form/modal; `close_draft` dismisses it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub author: String,
    pub editing: Option<i64>,
}

impl Draft {
    /// The one trivial client-side check: both fields non-blank.
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.author.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// Transient message surfaced once and then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

/// The state every catalog frontend renders from.
#[derive(Debug, Clone)]
pub struct CatalogView {
    books: Vec<Book>,
    query: String,
    sort_key: Option<SortKey>,
    page: usize,
    page_size: usize,
    draft: Option<Draft>,
    notification: Option<Notification>,
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogView {
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            query: String::new(),
            sort_key: None,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            draft: None,
            notification: None,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    // --- mirror ---

    /// Replace the mirror wholesale, as after the initial fetch.
    pub fn set_books(&mut self, books: Vec<Book>) {
        self.books = books;
        self.clamp_page();
    }

    /// The full mirror, untouched by query/sort/page.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Patch in a record the server confirmed created.
    pub fn apply_created(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Patch in a record the server confirmed updated. A response for an id
    /// the mirror no longer holds is dropped.
    pub fn apply_updated(&mut self, book: Book) {
        if let Some(slot) = self.books.iter_mut().find(|b| b.id == book.id) {
            *slot = book;
        }
    }

    /// Drop every mirrored record with this id after a confirmed delete.
    pub fn apply_deleted(&mut self, id: i64) {
        self.books.retain(|b| b.id != id);
        self.clamp_page();
    }

    // --- search / sort / pagination ---

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Changing the query jumps back to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 0;
    }

    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort_key
    }

    pub fn set_sort_key(&mut self, sort_key: Option<SortKey>) {
        self.sort_key = sort_key;
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
        self.clamp_page();
    }

    pub fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
        self.clamp_page();
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Pages in the current filtered set; at least 1 even when empty.
    pub fn page_count(&self) -> usize {
        let rows = self.filtered().len();
        rows.div_ceil(self.page_size).max(1)
    }

    /// Filtered count, before pagination.
    pub fn match_count(&self) -> usize {
        self.filtered().len()
    }

    /// The current page of the filtered, sorted mirror.
    pub fn visible(&self) -> Vec<&Book> {
        let rows = self.filtered();
        rows.into_iter()
            .skip(self.page * self.page_size)
            .take(self.page_size)
            .collect()
    }

    fn filtered(&self) -> Vec<&Book> {
        let needle = self.query.to_lowercase();
        let mut rows: Vec<&Book> = self
            .books
            .iter()
            .filter(|b| {
                needle.is_empty()
                    || b.title.to_lowercase().contains(&needle)
                    || b.author.to_lowercase().contains(&needle)
            })
            .collect();
        match self.sort_key {
            Some(SortKey::Title) => rows.sort_by_key(|b| b.title.to_lowercase()),
            Some(SortKey::Author) => rows.sort_by_key(|b| b.author.to_lowercase()),
            None => {}
        }
        rows
    }

    fn clamp_page(&mut self) {
        self.page = self.page.min(self.page_count() - 1);
    }

    // --- form draft ---

    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        self.draft.as_mut()
    }

    /// Open an empty form for a new record.
    pub fn open_create(&mut self) {
        self.draft = Some(Draft::default());
    }

    /// Open the form pre-filled from an existing record.
    pub fn open_edit(&mut self, book: &Book) {
        self.draft = Some(Draft {
            title: book.title.clone(),
            author: book.author.clone(),
            editing: Some(book.id),
        });
    }

    pub fn close_draft(&mut self) {
        self.draft = None;
    }

    // --- notifications ---

    pub fn notify_info(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification {
            severity: Severity::Info,
            message: message.into(),
        });
    }

    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification {
            severity: Severity::Error,
            message: message.into(),
        });
    }

    /// Hand the pending notification to the frontend, at most once.
    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notification.take()
    }
}
