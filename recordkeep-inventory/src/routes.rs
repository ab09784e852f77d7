//! Inventory endpoints

use std::time::Instant;

use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    routing::get,
    Router,
};

use recordkeep_core::db::mask_url;
use recordkeep_core::{ApiError, AppState, DatabaseKind, Flash, FlashParams, ValidForm, ValidId};

use crate::models::{NewProduct, ProductForm};
use crate::repo::ProductRepo;
use crate::views::{self, StorageInfo};

/// GET / - all products plus storage details
async fn index(
    State(state): State<AppState>,
    Query(flash): Query<FlashParams>,
) -> Result<Html<String>, ApiError> {
    let started = Instant::now();
    let products = ProductRepo::new(state.pool()).list().await?;
    let query_ms = started.elapsed().as_secs_f64() * 1000.0;

    let url = &state.config().database_url;
    let kind = DatabaseKind::from_url(url).to_string();
    let masked = mask_url(url);
    let storage = StorageInfo {
        kind: &kind,
        url: &masked,
        query_ms,
    };

    Ok(views::products(&products, &storage, flash.into_flash().as_ref()))
}

/// GET /add
async fn add_product_form() -> Html<String> {
    views::product_form()
}

/// POST /add
async fn add_product(
    State(state): State<AppState>,
    ValidForm(form): ValidForm<ProductForm>,
) -> Result<Redirect, ApiError> {
    let new = NewProduct::try_from(form)?;
    let product = ProductRepo::new(state.pool()).create(&new).await?;
    tracing::info!(id = product.id, "product added");
    Ok(Flash::success("Product added successfully!").redirect("/"))
}

/// GET /delete/{id}
async fn delete_product(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Redirect, ApiError> {
    ProductRepo::new(state.pool()).delete(id).await?;
    tracing::info!(id, "product deleted");
    Ok(Flash::danger("Product deleted!").redirect("/"))
}

/// Inventory routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/add", get(add_product_form).post(add_product))
        .route("/delete/{id}", get(delete_product))
}
