//! Book endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};

use recordkeep_core::html::page;
use recordkeep_core::{ApiError, AppState, ValidId, ValidJson};

use crate::models::{
    BookDetail, BookListResponse, BookQuery, BookResponse, CreateBookRequest, ListBooks, NewBook,
};
use crate::repo::BookRepo;

/// Landing page; the table is filled client side from the API.
const HOME_BODY: &str = r#"<p>
  Sort <select id="sort"><option>id</option><option>title</option><option>author</option><option>year</option></select>
  <select id="order"><option>asc</option><option>desc</option></select>
  <button id="prev">Prev</button> <span id="status"></span> <button id="next">Next</button>
</p>
<table><thead><tr><th>ID</th><th>Title</th><th>Author</th><th>Year</th></tr></thead><tbody id="books"></tbody></table>
<script>
let page = 1, pages = 0;
async function load() {
  const sort = document.getElementById("sort").value;
  const order = document.getElementById("order").value;
  const res = await fetch(`/api/books?page=${page}&sort=${sort}&order=${order}`);
  const data = await res.json();
  pages = data.pages;
  const rows = document.getElementById("books");
  rows.replaceChildren(...data.books.map(b => {
    const tr = document.createElement("tr");
    for (const v of [b.id, b.title, b.author, b.year ?? ""]) {
      const td = document.createElement("td");
      td.textContent = v;
      tr.appendChild(td);
    }
    return tr;
  }));
  document.getElementById("status").textContent = `page ${data.page} of ${data.pages} (${data.total} books)`;
}
document.getElementById("sort").onchange = () => { page = 1; load(); };
document.getElementById("order").onchange = () => { page = 1; load(); };
document.getElementById("prev").onclick = () => { if (page > 1) { page--; load(); } };
document.getElementById("next").onclick = () => { if (page < pages) { page++; load(); } };
load();
</script>"#;

/// GET /
async fn home() -> Html<String> {
    page("Book catalog", &[("/", "Books")], None, HOME_BODY)
}

/// GET /api/books - sorted, paginated listing
async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<BookQuery>,
) -> Result<Json<BookListResponse>, ApiError> {
    let req = ListBooks::from(query);
    let result = BookRepo::new(state.pool()).list(&req).await?;
    let pages = result.pages();
    let result = result.map(BookResponse::from);

    Ok(Json(BookListResponse {
        success: true,
        page: result.page,
        per_page: result.per_page,
        total: result.total,
        pages,
        books: result.items,
    }))
}

/// POST /api/books - create a book
async fn create_book(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateBookRequest>,
) -> Result<(StatusCode, Json<BookDetail>), ApiError> {
    let new = NewBook::try_from(req)?;
    let book = BookRepo::new(state.pool()).create(&new).await?;
    tracing::info!(id = book.id, "book added");
    Ok((StatusCode::CREATED, Json(BookDetail::from(book))))
}

/// GET /api/books/{id}
async fn get_book(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<BookDetail>, ApiError> {
    let book = BookRepo::new(state.pool()).get(id).await?;
    Ok(Json(BookDetail::from(book)))
}

/// DELETE /api/books/{id}
async fn delete_book(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<StatusCode, ApiError> {
    BookRepo::new(state.pool()).delete(id).await?;
    tracing::info!(id, "book deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Catalog routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/api/books", get(list_books).post(create_book))
        .route("/api/books/{id}", get(get_book).delete(delete_book))
}
