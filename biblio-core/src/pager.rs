//! Page-by-page navigation over a list of books

use crate::error::NavigationError;
use crate::types::Book;

/// Number of pages needed for `total` books, `ceil(total / page_size)`
///
/// A zero page size is treated as one.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

/// The books shown on a page; an out-of-range page is an empty slice
pub fn paginate(books: &[Book], page_size: usize, page_index: usize) -> &[Book] {
    let page_size = page_size.max(1);
    let start = page_index.saturating_mul(page_size).min(books.len());
    let end = start.saturating_add(page_size).min(books.len());
    &books[start..end]
}

/// What a listing currently shows
#[derive(Debug, PartialEq, Eq)]
pub enum Listing<'a> {
    /// There is nothing to list
    Empty,
    /// A page of books
    Page(Page<'a>),
}

/// One visible page
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a> {
    /// Zero-based page index
    pub index: usize,
    /// Total number of pages
    pub count: usize,
    /// 1-based number of the first book on the page within the whole list
    pub first_number: usize,
    /// Books on this page
    pub books: &'a [Book],
}

impl Page<'_> {
    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.count
    }
}

/// Cursor over pages of a book list
#[derive(Debug, Clone)]
pub struct Pager<'a> {
    books: &'a [Book],
    page_size: usize,
    page: usize,
}

impl<'a> Pager<'a> {
    /// Start on the first page. `page_size` is expected to be positive.
    pub fn new(books: &'a [Book], page_size: usize) -> Self {
        Self {
            books,
            page_size: page_size.max(1),
            page: 0,
        }
    }

    /// Number of books in the list
    pub fn total(&self) -> usize {
        self.books.len()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current zero-based page index
    pub fn page_index(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        page_count(self.books.len(), self.page_size)
    }

    /// The current view
    pub fn listing(&self) -> Listing<'a> {
        if self.books.is_empty() {
            return Listing::Empty;
        }
        Listing::Page(Page {
            index: self.page,
            count: self.page_count(),
            first_number: self.page * self.page_size + 1,
            books: paginate(self.books, self.page_size, self.page),
        })
    }

    /// Move to the next page; on the last page nothing changes
    pub fn next(&mut self) -> Result<(), NavigationError> {
        if self.books.is_empty() {
            return Err(NavigationError::Empty);
        }
        if self.page + 1 >= self.page_count() {
            return Err(NavigationError::PastLastPage);
        }
        self.page += 1;
        Ok(())
    }

    /// Move to the previous page; on the first page nothing changes
    pub fn previous(&mut self) -> Result<(), NavigationError> {
        if self.books.is_empty() {
            return Err(NavigationError::Empty);
        }
        if self.page == 0 {
            return Err(NavigationError::BeforeFirstPage);
        }
        self.page -= 1;
        Ok(())
    }

    /// Jump to a page by zero-based index
    pub fn go_to(&mut self, index: usize) -> Result<(), NavigationError> {
        if self.books.is_empty() {
            return Err(NavigationError::Empty);
        }
        if index >= self.page_count() {
            return Err(NavigationError::PastLastPage);
        }
        self.page = index;
        Ok(())
    }

    /// A book by its 1-based number in the whole list (not only the visible page)
    pub fn select(&self, number: usize) -> Result<&'a Book, NavigationError> {
        number
            .checked_sub(1)
            .and_then(|i| self.books.get(i))
            .ok_or(NavigationError::NoSuchRecord(number))
    }
}
