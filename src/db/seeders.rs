//! Database seeders for initial data.

use anyhow::Result;
use sqlx::SqlitePool;
use tracing::info;

/// Insert the configured admin user if that username is absent.
///
/// User rows are created out-of-band; there is no registration endpoint.
/// This seeder is that out-of-band path for a fresh install. Passwords are
/// stored as plaintext, matching the deployed schema.
pub async fn seed_admin_user(pool: &SqlitePool, username: &str, password: &str) -> Result<()> {
    let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    if existing.is_none() {
        sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
            .bind(username)
            .bind(password)
            .execute(pool)
            .await?;
        info!("Seeded admin user '{}'", username);
    }

    Ok(())
}
