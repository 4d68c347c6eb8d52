use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, warn};

pub mod payment;

const CONNECT_ATTEMPTS: u32 = 3;
const CONNECT_RETRY_SECS: u64 = 2;

/// Initialize the Postgres connection pool and create tables.
///
/// Managed Postgres occasionally refuses the first connection right after a
/// deploy, so connecting retries with a short backoff before giving up.
pub async fn init_db() -> Result<PgPool, sqlx::Error> {
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL not set in .env file");

    let mut last_err = None;
    for attempt in 1..=CONNECT_ATTEMPTS {
        info!("Database connection attempt {}/{}", attempt, CONNECT_ATTEMPTS);

        match PgPoolOptions::new()
            .max_connections(5)
            .connect(&database_url)
            .await
        {
            Ok(pool) => {
                // Smoke-test the connection before declaring victory
                sqlx::query("SELECT 1").execute(&pool).await?;
                info!("Database connection successful");

                create_tables(&pool).await?;
                return Ok(pool);
            }
            Err(e) => {
                warn!("Connection attempt {} failed: {}", attempt, e);
                last_err = Some(e);
                if attempt < CONNECT_ATTEMPTS {
                    tokio::time::sleep(std::time::Duration::from_secs(CONNECT_RETRY_SECS)).await;
                }
            }
        }
    }

    Err(last_err.expect("at least one connection attempt was made"))
}

/// Read and execute the SQL file that creates tables and indexes
async fn execute_sql_file(pool: &PgPool, file_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let sql_content = std::fs::read_to_string(file_path)
        .map_err(|e| format!("Failed to read {}: {}", file_path, e))?;

    for statement in sql_content.split(';') {
        let trimmed = statement.trim();
        if !trimmed.is_empty() {
            sqlx::raw_sql(trimmed).execute(pool).await?;
        }
    }

    Ok(())
}

/// Create all database tables
async fn create_tables(pool: &PgPool) -> Result<(), sqlx::Error> {
    if let Err(e) = execute_sql_file(pool, "migrations/create_tables.sql").await {
        warn!("Failed to create tables: {}", e);
    }

    Ok(())
}
