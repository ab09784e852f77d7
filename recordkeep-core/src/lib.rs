//! recordkeep-core: shared plumbing for the recordkeep apps
//!
//! Each app (school, catalog, inventory) is an axum router over a SQLite
//! pool. This crate holds the pieces they have in common: configuration,
//! the application context, error mapping, form validation, pagination,
//! flash messages, the HTML page shell and the server runner.

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod flash;
pub mod health;
pub mod html;
pub mod pagination;
pub mod server;
pub mod state;
pub mod validation;

pub use config::{AppConfig, AppDefaults};
pub use db::{create_pool, memory_pool, DatabaseKind, DbError};
pub use error::ApiError;
pub use extract::{ValidForm, ValidId, ValidJson};
pub use flash::{Flash, FlashLevel, FlashParams};
pub use pagination::{Page, Pagination};
pub use server::{run_server, ServerError};
pub use state::AppState;
pub use validation::ValidationError;
