//! HTML rendering for the inventory pages

use std::fmt::Write;

use axum::response::Html;

use recordkeep_core::html::{escape, page};
use recordkeep_core::Flash;

use crate::models::Product;

const NAV: [(&str, &str); 2] = [("/", "Products"), ("/add", "Add product")];

/// Storage details shown under the product table
pub struct StorageInfo<'a> {
    pub kind: &'a str,
    pub url: &'a str,
    pub query_ms: f64,
}

pub fn products(products: &[Product], storage: &StorageInfo<'_>, flash: Option<&Flash>) -> Html<String> {
    let mut body = String::new();
    if products.is_empty() {
        body.push_str("<p>No products yet.</p>\n");
    } else {
        body.push_str(
            "<table>\n<tr><th>Name</th><th>Price</th><th>Stock</th><th>Description</th><th></th></tr>\n",
        );
        for p in products {
            let _ = writeln!(
                body,
                "<tr><td>{}</td><td>{:.2}</td><td>{}</td><td>{}</td>\
                 <td><a href=\"/delete/{}\">Delete</a></td></tr>",
                escape(&p.name),
                p.price,
                p.stock,
                escape(&p.description),
                p.id,
            );
        }
        body.push_str("</table>\n");
    }
    let _ = write!(
        body,
        "<footer><p>Database: {}</p><p>Connection: <code>{}</code></p><p>Query time: {:.2} ms</p></footer>",
        escape(storage.kind),
        escape(storage.url),
        storage.query_ms,
    );
    page("Products", &NAV, flash, &body)
}

pub fn product_form() -> Html<String> {
    let body = "<form method=\"post\" action=\"/add\">\n\
         <label>Name <input name=\"name\" required></label>\n\
         <label>Price <input name=\"price\" type=\"number\" step=\"0.01\" min=\"0\" required></label>\n\
         <label>Stock <input name=\"stock\" type=\"number\" value=\"0\"></label>\n\
         <label>Description <textarea name=\"description\"></textarea></label>\n\
         <button type=\"submit\">Save</button>\n</form>";
    page("Add product", &NAV, None, body)
}
