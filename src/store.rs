//! Data access for card records, plus first-run DDL. The card_data table
//! lives in a schema fixed at startup from `CARD_DATA_SCHEMA` (default `dbo`).

use crate::error::AppError;
use crate::model::CardRecord;
use crate::sql;
use async_trait::async_trait;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Storage operations behind the service. Affected-row counts are the sole
/// success/failure signal for writes; reads return rows in database order.
#[async_trait]
pub trait CardStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<CardRecord>, AppError>;
    async fn find_by_card_type(&self, card_type: &str) -> Result<Vec<CardRecord>, AppError>;
    async fn insert(&self, record: &CardRecord) -> Result<u64, AppError>;
    async fn delete_by_id(&self, id: i32) -> Result<u64, AppError>;
}

/// PostgreSQL-backed store. Each call runs exactly one statement on a pooled
/// connection; storage failures propagate unmodified.
#[derive(Clone)]
pub struct PgCardStore {
    pool: PgPool,
    schema: String,
}

impl PgCardStore {
    pub fn new(pool: PgPool, schema: impl Into<String>) -> Self {
        PgCardStore {
            pool,
            schema: schema.into(),
        }
    }
}

#[async_trait]
impl CardStore for PgCardStore {
    async fn find_all(&self) -> Result<Vec<CardRecord>, AppError> {
        let stmt = sql::select_all(&self.schema);
        tracing::debug!(sql = %stmt, "query");
        let rows = sqlx::query_as::<_, CardRecord>(&stmt)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_card_type(&self, card_type: &str) -> Result<Vec<CardRecord>, AppError> {
        let stmt = sql::select_by_card_type(&self.schema);
        tracing::debug!(sql = %stmt, card_type, "query");
        let rows = sqlx::query_as::<_, CardRecord>(&stmt)
            .bind(card_type)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn insert(&self, record: &CardRecord) -> Result<u64, AppError> {
        let stmt = sql::insert(&self.schema);
        tracing::debug!(sql = %stmt, id = record.id, "insert");
        let result = sqlx::query(&stmt)
            .bind(record.id)
            .bind(record.client_id)
            .bind(record.card_brand.as_deref())
            .bind(record.card_type.as_deref())
            .bind(record.card_number.as_deref())
            .bind(record.expires)
            .bind(record.cvv.as_deref())
            .bind(record.has_chip)
            .bind(record.num_cards_issued)
            .bind(record.credit_limit.as_ref())
            .bind(record.acct_open_date)
            .bind(record.year_pin_last_changed)
            .bind(record.card_on_dark_web)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_by_id(&self, id: i32) -> Result<u64, AppError> {
        let stmt = sql::delete_by_id(&self.schema);
        tracing::debug!(sql = %stmt, id, "delete");
        let result = sqlx::query(&stmt).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}

/// Create the configured schema and the card_data table if absent, so a fresh
/// database serves requests immediately. Idempotent.
pub async fn ensure_card_table(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    let quoted_schema = quote_ident(schema);
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quoted_schema))
        .execute(pool)
        .await?;

    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {}."card_data" (
            "id" INTEGER PRIMARY KEY,
            "client_id" INTEGER,
            "card_brand" TEXT,
            "card_type" TEXT,
            "card_number" TEXT,
            "expires" DATE,
            "cvv" TEXT,
            "has_chip" BOOLEAN,
            "num_cards_issued" INTEGER,
            "credit_limit" NUMERIC(12, 2),
            "acct_open_date" DATE,
            "year_pin_last_changed" INTEGER,
            "card_on_dark_web" BOOLEAN
        )
        "#,
        quoted_schema
    );
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to
/// the default `postgres` database to run CREATE DATABASE. Call before
/// creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await.map_err(AppError::Db)?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await
            .map_err(AppError::Db)?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await
            .map_err(AppError::Db)?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::BadRequest("DATABASE_URL: no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    Ok((format!("{}postgres", base), db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
