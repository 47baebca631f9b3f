use crate::domain::{
    models::project::{Project, ProjectMember, ProjectMessage},
    ports::ProjectRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteProjectRepo {
    pool: SqlitePool,
}

impl SqliteProjectRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqliteProjectRepo {
    async fn create(&self, project: &Project) -> Result<Project, AppError> {
        sqlx::query_as::<_, Project>(
            "INSERT INTO projects (name, description, created_by, created_at) VALUES (?, ?, ?, ?) RETURNING *"
        )
            .bind(&project.name)
            .bind(&project.description)
            .bind(&project.created_by)
            .bind(project.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Project>, AppError> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Project>, AppError> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, project: &Project) -> Result<Project, AppError> {
        sqlx::query_as::<_, Project>(
            "UPDATE projects SET name=?, description=? WHERE id=? RETURNING *"
        )
            .bind(&project.name)
            .bind(&project.description)
            .bind(project.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        sqlx::query("DELETE FROM photos WHERE project_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        sqlx::query("DELETE FROM project_messages WHERE project_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        sqlx::query("DELETE FROM project_members WHERE project_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Project not found".into()));
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(())
    }

    async fn add_member(&self, member: &ProjectMember) -> Result<ProjectMember, AppError> {
        sqlx::query_as::<_, ProjectMember>(
            "INSERT INTO project_members (project_id, user_id, joined_at) VALUES (?, ?, ?) RETURNING *"
        )
            .bind(member.project_id)
            .bind(&member.user_id)
            .bind(member.joined_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn remove_member(&self, project_id: i64, user_id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM project_members WHERE project_id = ? AND user_id = ?")
            .bind(project_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn list_members(&self, project_id: i64) -> Result<Vec<ProjectMember>, AppError> {
        sqlx::query_as::<_, ProjectMember>(
            "SELECT * FROM project_members WHERE project_id = ? ORDER BY joined_at ASC"
        )
            .bind(project_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn create_message(&self, message: &ProjectMessage) -> Result<ProjectMessage, AppError> {
        sqlx::query_as::<_, ProjectMessage>(
            "INSERT INTO project_messages (project_id, sender_id, content, created_at) VALUES (?, ?, ?, ?) RETURNING *"
        )
            .bind(message.project_id)
            .bind(&message.sender_id)
            .bind(&message.content)
            .bind(message.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_messages(&self, project_id: i64, limit: i64) -> Result<Vec<ProjectMessage>, AppError> {
        sqlx::query_as::<_, ProjectMessage>(
            "SELECT * FROM project_messages WHERE project_id = ? ORDER BY created_at DESC, id DESC LIMIT ?"
        )
            .bind(project_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
