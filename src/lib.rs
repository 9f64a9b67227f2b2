pub mod config;
pub mod db;
pub mod ui;

pub use db::DbPool;

use config::Config;

/// Shared application state, constructed once in `main` and handed to
/// every handler through axum's `State` extractor. The pool lives here
/// instead of in a process-wide global so tests can inject their own.
pub struct AppState {
    pub config: Config,
    pub db: DbPool,
}

impl AppState {
    pub fn new(config: Config, db: DbPool) -> Self {
        Self { config, db }
    }
}
