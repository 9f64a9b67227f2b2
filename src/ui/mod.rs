// Server-rendered pages: login, the protected landing page, and the
// product catalog CRUD. Askama templates + htmx for the PUT/DELETE forms.

mod error;
mod templates;

use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{delete, get, post, put},
    Form, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::db::{Product, ProductForm, User};
use crate::AppState;

pub use error::UiError;
pub use templates::*;

// Cookie carrying the raw user id. Unsigned, no expiry, no SameSite:
// validity is decided solely by whether a matching user row exists.
const SESSION_COOKIE: &str = "session_id";

// Helper to render templates and handle errors
fn render_template<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Template error: {}", e),
        )
            .into_response(),
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Login
        .route("/", get(login_page))
        .route("/login", get(login_page))
        .route("/login", post(login_submit))
        .route("/protected", get(protected))
        // Product catalog
        .route("/products", get(products_list))
        .route("/products", post(product_create))
        .route("/products/:id", put(product_update))
        .route("/products/:id", delete(product_delete))
        .route("/products/:id/edit", get(product_edit_form))
        .route("/add-product", get(product_new_form))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Login page (also the site root)
async fn login_page() -> Response {
    render_template(LoginTemplate { message: None })
}

#[derive(Deserialize)]
struct LoginForm {
    username: String,
    password: String,
}

// Login submit. An unknown username and a wrong password get the same
// page, the same generic message, and a 200.
async fn login_submit(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, UiError> {
    let user: Option<User> =
        sqlx::query_as("SELECT id, username, password FROM users WHERE username = ?")
            .bind(&form.username)
            .fetch_optional(&state.db)
            .await?;

    // Literal string comparison: passwords are stored as plaintext.
    let user = match user {
        Some(u) if u.password == form.password => u,
        _ => {
            let template = LoginTemplate {
                message: Some("Invalid username or password.".to_string()),
            };
            return Ok(render_template(template));
        }
    };

    let jar = jar.add(
        Cookie::build((SESSION_COOKIE, user.id.to_string()))
            .path("/")
            .http_only(true)
            .build(),
    );
    Ok((jar, Redirect::to("/protected")).into_response())
}

// Protected landing page. A missing cookie, an empty one, a malformed
// value, and an id with no row all fall through to the same redirect.
async fn protected(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<Response, UiError> {
    let session = jar
        .get(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty());

    let Some(session) = session else {
        return Ok(Redirect::to("/login").into_response());
    };

    let Ok(user_id) = session.parse::<i64>() else {
        return Ok(Redirect::to("/login").into_response());
    };

    let user: Option<User> =
        sqlx::query_as("SELECT id, username, password FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&state.db)
            .await?;

    match user {
        Some(user) => Ok(render_template(ProtectedTemplate {
            username: user.username,
        })),
        None => Ok(Redirect::to("/login").into_response()),
    }
}

// Product list. No ORDER BY: the listing makes no ordering promise.
async fn products_list(State(state): State<Arc<AppState>>) -> Result<Response, UiError> {
    let products: Vec<Product> =
        sqlx::query_as("SELECT id, name, description, price FROM products")
            .fetch_all(&state.db)
            .await?;

    Ok(render_template(ProductsTemplate { products }))
}

// Empty create form
async fn product_new_form() -> Response {
    render_template(AddProductTemplate)
}

// Populated edit form. fetch_one on purpose: a missing row surfaces as
// the opaque database error, not a not-found page.
async fn product_edit_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, UiError> {
    let product: Product =
        sqlx::query_as("SELECT id, name, description, price FROM products WHERE id = ?")
            .bind(&id)
            .fetch_one(&state.db)
            .await?;

    Ok(render_template(EditProductTemplate { product }))
}

// Create a product
async fn product_create(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ProductForm>,
) -> Result<Response, UiError> {
    let price: f64 = form
        .price
        .parse()
        .map_err(|_| UiError::bad_request("Invalid price"))?;

    sqlx::query("INSERT INTO products (name, description, price) VALUES (?, ?, ?)")
        .bind(&form.name)
        .bind(&form.description)
        .bind(price)
        .execute(&state.db)
        .await?;

    Ok(Redirect::to("/products").into_response())
}

// Full-replace update. Unconditional: an id with no row is a silent no-op.
async fn product_update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<ProductForm>,
) -> Result<Response, UiError> {
    let id: i64 = id
        .parse()
        .map_err(|_| UiError::bad_request("Invalid product ID"))?;
    let price: f64 = form
        .price
        .parse()
        .map_err(|_| UiError::bad_request("Invalid price"))?;

    sqlx::query("UPDATE products SET name = ?, description = ?, price = ? WHERE id = ?")
        .bind(&form.name)
        .bind(&form.description)
        .bind(price)
        .bind(id)
        .execute(&state.db)
        .await?;

    Ok(Redirect::to("/products").into_response())
}

// Delete by id. The raw path segment is bound as-is; an id with no row
// deletes nothing and still answers 204.
async fn product_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, UiError> {
    sqlx::query("DELETE FROM products WHERE id = ?")
        .bind(&id)
        .execute(&state.db)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
