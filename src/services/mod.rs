use serenity::prelude::Context;
use sqlx::postgres::PgPool;

pub mod export_service;
pub mod payment_service;
pub mod summary_service;
pub mod totals_service;

/// Fetch the shared connection pool out of serenity's TypeMap.
pub async fn get_pool(ctx: &Context) -> Result<PgPool, String> {
    let data = ctx.data.read().await;
    data.get::<crate::DatabasePool>()
        .cloned()
        .ok_or_else(|| "Database not initialized".to_string())
}
