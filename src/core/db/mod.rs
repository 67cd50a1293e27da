mod error;
mod model;
mod project;
mod state;

use std::{path::Path, sync::Arc};

use state::DbState;
use tracing::debug;

pub use error::{DbError, DbResult};
pub use model::{Hours, ParseHoursError};
pub use project::{NewProject, Project, ProjectRepository, ProjectUpdate};

/// SQLite-backed project store.
#[derive(Debug, Clone)]
pub struct ProjectDb {
    state: Arc<DbState>,
}

impl ProjectDb {
    /// Open (or create) the database at `db_file` and apply pending migrations.
    pub async fn open<P: AsRef<Path>>(db_file: P) -> DbResult<Self> {
        Ok(Self {
            state: Arc::new(DbState::new(db_file).await?),
        })
    }

    /// Close the connection pool. Later calls fail with a pool-closed error.
    pub async fn close(&self) {
        self.state.close().await
    }
}

#[derive(sqlx::FromRow)]
struct ProjectRow {
    project_id: i64,
    project_name: String,
    estimated_hours: Option<i64>,
    actual_hours: Option<i64>,
    difficulty: Option<i32>,
    notes: Option<String>,
}

impl From<ProjectRow> for Project {
    fn from(r: ProjectRow) -> Self {
        Self {
            id: r.project_id,
            name: r.project_name,
            estimated_hours: r.estimated_hours.map(Hours::from),
            actual_hours: r.actual_hours.map(Hours::from),
            difficulty: r.difficulty,
            notes: r.notes,
        }
    }
}

impl ProjectRepository for ProjectDb {
    async fn fetch_all_projects(&self) -> DbResult<Vec<Project>> {
        let mut conn = self.state.conn().await?;
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"SELECT project_id, project_name, estimated_hours, actual_hours, difficulty, notes
            FROM project
            ORDER BY project_id ASC"#,
        )
        .fetch_all(&mut *conn)
        .await?;
        debug!(count = rows.len(), "fetched projects");
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn fetch_project_by_id(&self, id: i64) -> DbResult<Project> {
        let mut conn = self.state.conn().await?;
        sqlx::query_as::<_, ProjectRow>(
            r#"SELECT project_id, project_name, estimated_hours, actual_hours, difficulty, notes
            FROM project
            WHERE project_id = ?"#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        .map(Project::from)
        .ok_or(DbError::NotFound { id })
    }

    async fn add_project(&self, project: &NewProject) -> DbResult<Project> {
        let mut conn = self.state.conn().await?;
        let id: i64 = sqlx::query_scalar(
            r#"INSERT INTO project (project_name, estimated_hours, actual_hours, difficulty, notes)
            VALUES (?, ?, ?, ?, ?)
            RETURNING project_id"#,
        )
        .bind(&project.name)
        .bind(project.estimated_hours.map(i64::from))
        .bind(project.actual_hours.map(i64::from))
        .bind(project.difficulty)
        .bind(&project.notes)
        .fetch_one(&mut *conn)
        .await?;
        debug!(id, "inserted project");
        Ok(Project {
            id,
            name: project.name.clone(),
            estimated_hours: project.estimated_hours,
            actual_hours: project.actual_hours,
            difficulty: project.difficulty,
            notes: project.notes.clone(),
        })
    }

    async fn modify_project_details(&self, project: &Project) -> DbResult<()> {
        let mut conn = self.state.conn().await?;
        let result = sqlx::query(
            r#"UPDATE project SET
                project_name = ?,
                estimated_hours = ?,
                actual_hours = ?,
                difficulty = ?,
                notes = ?
            WHERE project_id = ?"#,
        )
        .bind(&project.name)
        .bind(project.estimated_hours.map(i64::from))
        .bind(project.actual_hours.map(i64::from))
        .bind(project.difficulty)
        .bind(&project.notes)
        .bind(project.id)
        .execute(&mut *conn)
        .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { id: project.id });
        }
        Ok(())
    }

    async fn delete_project(&self, id: i64) -> DbResult<()> {
        let mut conn = self.state.conn().await?;
        let result = sqlx::query("DELETE FROM project WHERE project_id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { id });
        }
        Ok(())
    }
}
