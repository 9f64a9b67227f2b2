// Askama template definitions: one view-model struct per page.

use askama::Template;

use crate::db::Product;

// Login template
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub message: Option<String>,
}

// Protected landing page
#[derive(Template)]
#[template(path = "protected.html")]
pub struct ProtectedTemplate {
    pub username: String,
}

// Product list
#[derive(Template)]
#[template(path = "products.html")]
pub struct ProductsTemplate {
    pub products: Vec<Product>,
}

// Empty create form
#[derive(Template)]
#[template(path = "add_product.html")]
pub struct AddProductTemplate;

// Populated edit form
#[derive(Template)]
#[template(path = "edit_product.html")]
pub struct EditProductTemplate {
    pub product: Product,
}
