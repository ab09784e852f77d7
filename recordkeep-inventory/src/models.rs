//! Product records and the typed command that creates them

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use recordkeep_core::validation::{self, ValidationError};

/// Maximum length for product names
const MAX_NAME_LEN: usize = 200;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub stock: i64,
    pub description: String,
}

/// Raw product form fields
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductForm {
    pub name: Option<String>,
    pub price: Option<String>,
    pub stock: Option<String>,
    pub description: Option<String>,
}

/// Validated product fields
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub stock: i64,
    pub description: String,
}

impl TryFrom<ProductForm> for NewProduct {
    type Error = ValidationError;

    fn try_from(form: ProductForm) -> Result<Self, Self::Error> {
        Ok(Self {
            name: validation::required_text("name", form.name, MAX_NAME_LEN)?,
            price: validation::non_negative_decimal("price", form.price)?,
            stock: validation::integer_or_zero("stock", form.stock)?,
            description: validation::optional_text(form.description),
        })
    }
}
