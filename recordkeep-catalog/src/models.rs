//! Book records, listing parameters and request/response shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use recordkeep_core::validation::{self, ValidationError};
use recordkeep_core::Pagination;

/// Maximum length for titles
const MAX_TITLE_LEN: usize = 200;

/// Maximum length for author names
const MAX_AUTHOR_LEN: usize = 100;

/// Default items per page for the listing
pub const DEFAULT_PER_PAGE: u32 = 5;

#[derive(Debug, Clone, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Sortable columns. Anything outside this set sorts by id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortColumn {
    #[default]
    Id,
    Title,
    Author,
    Year,
}

impl SortColumn {
    /// Parse a query value; unknown values fall back to [`SortColumn::Id`].
    pub fn lenient(s: Option<&str>) -> Self {
        match s {
            Some("title") => Self::Title,
            Some("author") => Self::Author,
            Some("year") => Self::Year,
            _ => Self::Id,
        }
    }

    /// Column name for ORDER BY. Only ever one of these literals.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Author => "author",
            Self::Year => "year",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Exactly `"desc"` is descending; everything else ascending.
    pub fn lenient(s: Option<&str>) -> Self {
        match s {
            Some("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Raw query string for `GET /api/books`
///
/// Kept as strings so malformed numbers fall back to defaults instead of
/// rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookQuery {
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

/// Normalized listing request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListBooks {
    pub pagination: Pagination,
    pub sort: SortColumn,
    pub order: SortOrder,
}

impl From<BookQuery> for ListBooks {
    fn from(q: BookQuery) -> Self {
        Self {
            pagination: Pagination::lenient(
                q.page.as_deref(),
                q.per_page.as_deref(),
                DEFAULT_PER_PAGE,
            ),
            sort: SortColumn::lenient(q.sort.as_deref()),
            order: SortOrder::lenient(q.order.as_deref()),
        }
    }
}

/// Create book request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBookRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i64>,
}

/// Validated book fields
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: Option<i64>,
}

impl TryFrom<CreateBookRequest> for NewBook {
    type Error = ValidationError;

    fn try_from(req: CreateBookRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            title: validation::required_text("title", req.title, MAX_TITLE_LEN)?,
            author: validation::required_text("author", req.author, MAX_AUTHOR_LEN)?,
            year: req.year,
        })
    }
}

/// Book as returned by the listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookResponse {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: Option<i64>,
}

impl From<Book> for BookResponse {
    fn from(b: Book) -> Self {
        Self {
            id: b.id,
            title: b.title,
            author: b.author,
            year: b.year,
        }
    }
}

/// Single book with its creation time
#[derive(Debug, Clone, Serialize)]
pub struct BookDetail {
    #[serde(flatten)]
    pub book: BookResponse,
    pub created_at: String,
}

impl From<Book> for BookDetail {
    fn from(b: Book) -> Self {
        let created_at = b.created_at.to_rfc3339();
        Self {
            book: BookResponse::from(b),
            created_at,
        }
    }
}

/// `GET /api/books` response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookListResponse {
    pub success: bool,
    pub page: u32,
    pub per_page: u32,
    pub total: i64,
    pub pages: u32,
    pub books: Vec<BookResponse>,
}
