//! Project repository: insert and read project records.

use crate::Result as DbErrorResult;
use crate::repositories::{parse_timestamp, parse_uuid};

use pf_core::{Project, ProjectId};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, project: &Project) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO pf_projects (id, name, description, created_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(project.id.to_string())
        .bind(&project.name)
        .bind(&project.description)
        .bind(project.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: ProjectId) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query(
            r#"
                SELECT id, name, description, created_at
                FROM pf_projects
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    /// All projects, newest first
    pub async fn list(&self) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query(
            r#"
                SELECT id, name, description, created_at
                FROM pf_projects
                ORDER BY created_at DESC, name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::from_row).collect()
    }

    fn from_row(row: &SqliteRow) -> DbErrorResult<Project> {
        let id: String = row.try_get("id")?;
        let created_at: i64 = row.try_get("created_at")?;

        Ok(Project {
            id: ProjectId::from_uuid(parse_uuid(&id, "pf_projects.id")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            created_at: parse_timestamp(created_at, "pf_projects.created_at")?,
        })
    }
}
