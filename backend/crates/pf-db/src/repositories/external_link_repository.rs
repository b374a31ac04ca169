use crate::Result as DbErrorResult;
use crate::repositories::{parse_timestamp, parse_uuid};

use pf_core::{ExternalLink, Identity};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct ExternalLinkRepository {
    pool: SqlitePool,
}

impl ExternalLinkRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, link: &ExternalLink) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO pf_external_links (id, url, project_name, owner_id, created_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(link.id.to_string())
        .bind(&link.url)
        .bind(&link.project_name)
        .bind(link.owner_id.to_string())
        .bind(link.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Links for a project in insertion order
    pub async fn list_by_project_name(&self, project_name: &str) -> DbErrorResult<Vec<ExternalLink>> {
        let rows = sqlx::query(
            r#"
                SELECT id, url, project_name, owner_id, created_at
                FROM pf_external_links
                WHERE project_name = ?
                ORDER BY rowid ASC
            "#,
        )
        .bind(project_name)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::from_row).collect()
    }

    fn from_row(row: &SqliteRow) -> DbErrorResult<ExternalLink> {
        let id: String = row.try_get("id")?;
        let owner_id: String = row.try_get("owner_id")?;
        let created_at: i64 = row.try_get("created_at")?;

        Ok(ExternalLink {
            id: parse_uuid(&id, "pf_external_links.id")?,
            url: row.try_get("url")?,
            project_name: row.try_get("project_name")?,
            owner_id: Identity::new(parse_uuid(&owner_id, "pf_external_links.owner_id")?),
            created_at: parse_timestamp(created_at, "pf_external_links.created_at")?,
        })
    }
}
