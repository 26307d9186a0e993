//! PostgreSQL implementation of CreativeDnaRepository.
//!
//! Style, content and workflow lists are stored as JSONB columns; the
//! bounded scalars are validated again when a row is rebuilt. Rows are
//! unique per user, so a racing first analysis overwrites rather than
//! duplicates.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::dna::{CreativeDna, CreativeDnaParts};
use crate::domain::foundation::{CreativeDnaId, DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::CreativeDnaRepository;

/// PostgreSQL implementation of CreativeDnaRepository.
#[derive(Clone)]
pub struct PostgresCreativeDnaRepository {
    pool: PgPool,
}

impl PostgresCreativeDnaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CreativeDnaRepository for PostgresCreativeDnaRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<CreativeDna>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, visual_style, writing_style, content_preferences,
                   workflow_patterns, ai_interaction_level, adaptability_score,
                   confidence, version, last_updated
            FROM creative_dna
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch creative DNA: {}", e),
            )
        })?;

        row.map(|row| row_to_dna(&row)).transpose()
    }

    async fn upsert(&self, dna: &CreativeDna) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO creative_dna (
                id, user_id, visual_style, writing_style, content_preferences,
                workflow_patterns, ai_interaction_level, adaptability_score,
                confidence, version, last_updated
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (user_id) DO UPDATE SET
                visual_style = EXCLUDED.visual_style,
                writing_style = EXCLUDED.writing_style,
                content_preferences = EXCLUDED.content_preferences,
                workflow_patterns = EXCLUDED.workflow_patterns,
                ai_interaction_level = EXCLUDED.ai_interaction_level,
                adaptability_score = EXCLUDED.adaptability_score,
                confidence = EXCLUDED.confidence,
                version = EXCLUDED.version,
                last_updated = EXCLUDED.last_updated
            "#,
        )
        .bind(dna.id().as_uuid())
        .bind(dna.user_id().as_str())
        .bind(to_json("visual_style", dna.visual_style())?)
        .bind(to_json("writing_style", dna.writing_style())?)
        .bind(to_json("content_preferences", dna.content_preferences())?)
        .bind(to_json("workflow_patterns", dna.workflow_patterns())?)
        .bind(i32::from(dna.ai_interaction_level()))
        .bind(i32::from(dna.adaptability_score()))
        .bind(dna.confidence().value())
        .bind(dna.version().as_f64())
        .bind(*dna.last_updated().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to save creative DNA: {}", e),
            )
        })?;

        Ok(())
    }
}

fn row_to_dna(row: &sqlx::postgres::PgRow) -> Result<CreativeDna, DomainError> {
    let id: Uuid = row.get("id");
    let user_id: String = row.get("user_id");
    let last_updated: chrono::DateTime<chrono::Utc> = row.get("last_updated");

    let parts = CreativeDnaParts {
        id: CreativeDnaId::from_uuid(id),
        user_id: UserId::new(user_id)?,
        visual_style: from_json("visual_style", row.get("visual_style"))?,
        writing_style: from_json("writing_style", row.get("writing_style"))?,
        content_preferences: from_json("content_preferences", row.get("content_preferences"))?,
        workflow_patterns: from_json("workflow_patterns", row.get("workflow_patterns"))?,
        ai_interaction_level: row.get("ai_interaction_level"),
        adaptability_score: row.get("adaptability_score"),
        confidence: row.get("confidence"),
        version: row.get("version"),
        last_updated: Timestamp::from_datetime(last_updated),
    };

    Ok(CreativeDna::from_parts(parts)?)
}

fn to_json<T: Serialize + ?Sized>(column: &str, value: &T) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(value).map_err(|e| {
        DomainError::new(
            ErrorCode::InternalError,
            format!("Failed to serialize {}: {}", column, e),
        )
    })
}

/// NULL columns read as empty lists.
fn from_json<T: DeserializeOwned + Default>(
    column: &str,
    value: Option<serde_json::Value>,
) -> Result<T, DomainError> {
    match value {
        None | Some(serde_json::Value::Null) => Ok(T::default()),
        Some(value) => serde_json::from_value(value).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to deserialize {}: {}", column, e),
            )
        }),
    }
}
