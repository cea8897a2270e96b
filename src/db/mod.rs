// src/db/mod.rs

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Pool, Postgres};
use std::env;

use crate::cache::QueryCache;

pub async fn connect() -> anyhow::Result<Pool<Postgres>> {
    let database_url =
        env::var("DATABASE_URL").context("DATABASE_URL must be set in your .env file")?;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await?;

    tracing::info!("connected to PostgreSQL");
    Ok(pool)
}

/// Run a fixed `SELECT * FROM vw_…` query, memoized by the query text.
/// Cache hits skip the pool entirely; misses fetch, then populate.
pub async fn run_query<T>(
    pool: &Pool<Postgres>,
    cache: &QueryCache,
    sql: &str,
) -> anyhow::Result<Vec<T>>
where
    T: for<'r> FromRow<'r, PgRow> + Serialize + DeserializeOwned + Send + Unpin,
{
    if let Some(rows) = cache.get(sql).await {
        tracing::debug!(query = sql, "query cache hit");
        return serde_json::from_value(rows).context("cached rows did not match row type");
    }

    let rows: Vec<T> = sqlx::query_as::<_, T>(sql).fetch_all(pool).await?;
    cache.put(sql, serde_json::to_value(&rows)?).await;
    Ok(rows)
}
