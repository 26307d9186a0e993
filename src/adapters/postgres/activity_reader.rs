//! PostgreSQL implementation of ActivityReader.
//!
//! Reads the `projects` and `user_actions` tables, newest first.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::dna::{ActionType, Project, UserAction};
use crate::domain::foundation::{ActionId, DomainError, ErrorCode, ProjectId, Timestamp, UserId};
use crate::ports::ActivityReader;

/// PostgreSQL implementation of ActivityReader.
#[derive(Clone)]
pub struct PostgresActivityReader {
    pool: PgPool,
}

impl PostgresActivityReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityReader for PostgresActivityReader {
    async fn list_projects(&self, user_id: &UserId) -> Result<Vec<Project>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, style_tags, created_at
            FROM projects
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch projects: {}", e),
            )
        })?;

        let projects = rows
            .into_iter()
            .map(|row| {
                let id: Uuid = row.get("id");
                let name: Option<String> = row.get("name");
                let style_tags: Option<Vec<String>> = row.get("style_tags");
                let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");

                Project {
                    id: ProjectId::from_uuid(id),
                    user_id: user_id.clone(),
                    name: name.unwrap_or_default(),
                    style_tags: style_tags.unwrap_or_default(),
                    created_at: Timestamp::from_datetime(created_at),
                }
            })
            .collect();

        Ok(projects)
    }

    async fn recent_actions(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<UserAction>, DomainError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let rows = sqlx::query(
            r#"
            SELECT id, stage, tool, duration, type, timestamp
            FROM user_actions
            WHERE user_id = $1
            ORDER BY timestamp DESC
            LIMIT $2
            "#,
        )
        .bind(user_id.as_str())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch user actions: {}", e),
            )
        })?;

        let actions = rows
            .into_iter()
            .map(|row| {
                let id: Uuid = row.get("id");
                let action_type: Option<String> = row.get("type");
                let timestamp: chrono::DateTime<chrono::Utc> = row.get("timestamp");

                UserAction {
                    id: ActionId::from_uuid(id),
                    user_id: user_id.clone(),
                    stage: row.get("stage"),
                    tool: row.get("tool"),
                    duration: row.get("duration"),
                    action_type: action_type.map(ActionType::from),
                    timestamp: Timestamp::from_datetime(timestamp),
                }
            })
            .collect();

        Ok(actions)
    }
}
