use crate::config::Config;
use crate::error::PersistenceError;
use crate::models::{AnswerRow, ResultRow, SessionRecord};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info};
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use std::str::FromStr;

/// Storage for completed sessions.
#[async_trait]
pub trait ResponseStore: Send + Sync {
    /// Writes all answer rows and the result row of one session, or nothing.
    async fn save(&self, record: &SessionRecord) -> Result<(), PersistenceError>;

    async fn fetch_results(&self) -> Result<Vec<ResultRow>, PersistenceError>;

    async fn fetch_answers(&self) -> Result<Vec<AnswerRow>, PersistenceError>;
}

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn connect(config: &Config) -> Result<Self, PersistenceError> {
        let options = SqliteConnectOptions::from_str(&config.database_url)
            .map_err(PersistenceError::Connect)?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await
            .map_err(PersistenceError::Connect)?;

        Self::init_schema(&pool).await?;
        info!("Connected to {}", config.database_url);

        Ok(Self { pool })
    }

    /// Opens an existing database for reading. Nothing is created: a missing
    /// file or a mistyped URL is a connect error.
    pub async fn open_existing(config: &Config) -> Result<Self, PersistenceError> {
        let options = SqliteConnectOptions::from_str(&config.database_url)
            .map_err(PersistenceError::Connect)?
            .create_if_missing(false)
            .read_only(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await
            .map_err(PersistenceError::Connect)?;

        info!("Opened {} read-only", config.database_url);
        Ok(Self { pool })
    }

    #[cfg(test)]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // Bootstrap only. Existing tables are left untouched.
    async fn init_schema(pool: &SqlitePool) -> Result<(), PersistenceError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS answers (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                session_id TEXT NOT NULL,
                respondent TEXT NOT NULL,
                question TEXT NOT NULL,
                answer TEXT NOT NULL,
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await
        .map_err(PersistenceError::query("create answers table"))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS results (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                session_id TEXT NOT NULL,
                respondent TEXT NOT NULL,
                visual INTEGER NOT NULL,
                auditory INTEGER NOT NULL,
                kinesthetic INTEGER NOT NULL,
                classification TEXT NOT NULL,
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await
        .map_err(PersistenceError::query("create results table"))?;

        Ok(())
    }
}

#[async_trait]
impl ResponseStore for Database {
    async fn save(&self, record: &SessionRecord) -> Result<(), PersistenceError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(PersistenceError::query("begin save"))?;

        for answer in &record.answers {
            sqlx::query(
                r#"
                INSERT INTO answers (session_id, respondent, question, answer, created_at)
                VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(&answer.session_id)
            .bind(&answer.respondent)
            .bind(&answer.question)
            .bind(&answer.answer)
            .bind(answer.created_at.to_rfc3339())
            .execute(&mut *tx)
            .await
            .map_err(PersistenceError::query("save answers"))?;
        }

        let result = &record.result;
        sqlx::query(
            r#"
            INSERT INTO results
                (session_id, respondent, visual, auditory, kinesthetic, classification, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&result.session_id)
        .bind(&result.respondent)
        .bind(i64::from(result.visual))
        .bind(i64::from(result.auditory))
        .bind(i64::from(result.kinesthetic))
        .bind(&result.classification)
        .bind(result.created_at.to_rfc3339())
        .execute(&mut *tx)
        .await
        .map_err(PersistenceError::query("save results"))?;

        // Dropping `tx` on any early return above rolls the session back.
        tx.commit()
            .await
            .map_err(PersistenceError::query("commit save"))?;

        debug!(
            "Saved session {} ({} answers) for {}",
            record.session_id,
            record.answers.len(),
            result.respondent
        );
        Ok(())
    }

    async fn fetch_results(&self) -> Result<Vec<ResultRow>, PersistenceError> {
        const OPERATION: &str = "fetch results";

        sqlx::query(
            r#"
            SELECT session_id, respondent, visual, auditory, kinesthetic, classification, created_at
            FROM results
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(PersistenceError::query(OPERATION))?
        .iter()
        .map(|row| {
            Ok(ResultRow {
                session_id: row
                    .try_get("session_id")
                    .map_err(PersistenceError::query(OPERATION))?,
                respondent: row
                    .try_get("respondent")
                    .map_err(PersistenceError::query(OPERATION))?,
                visual: count_column(row, "visual", OPERATION)?,
                auditory: count_column(row, "auditory", OPERATION)?,
                kinesthetic: count_column(row, "kinesthetic", OPERATION)?,
                classification: row
                    .try_get("classification")
                    .map_err(PersistenceError::query(OPERATION))?,
                created_at: timestamp_column(row, OPERATION)?,
            })
        })
        .collect()
    }

    async fn fetch_answers(&self) -> Result<Vec<AnswerRow>, PersistenceError> {
        const OPERATION: &str = "fetch answers";

        sqlx::query(
            r#"
            SELECT session_id, respondent, question, answer, created_at
            FROM answers
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(PersistenceError::query(OPERATION))?
        .iter()
        .map(|row| {
            Ok(AnswerRow {
                session_id: row
                    .try_get("session_id")
                    .map_err(PersistenceError::query(OPERATION))?,
                respondent: row
                    .try_get("respondent")
                    .map_err(PersistenceError::query(OPERATION))?,
                question: row.try_get("question").map_err(PersistenceError::query(OPERATION))?,
                answer: row.try_get("answer").map_err(PersistenceError::query(OPERATION))?,
                created_at: timestamp_column(row, OPERATION)?,
            })
        })
        .collect()
    }
}

fn count_column(
    row: &SqliteRow,
    column: &str,
    operation: &'static str,
) -> Result<u32, PersistenceError> {
    let value: i64 = row.try_get(column).map_err(PersistenceError::query(operation))?;
    u32::try_from(value).map_err(|_| PersistenceError::Corrupt {
        operation,
        detail: format!("{} count {} is out of range", column, value),
    })
}

fn timestamp_column(
    row: &SqliteRow,
    operation: &'static str,
) -> Result<DateTime<Utc>, PersistenceError> {
    let raw: String = row.try_get("created_at").map_err(PersistenceError::query(operation))?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| PersistenceError::Corrupt {
            operation,
            detail: format!("failed to parse created_at {:?}: {}", raw, e),
        })
}
