use crate::domain::{
    models::photo::{Photo, PhotoWithUser},
    ports::PhotoRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqlitePhotoRepo {
    pool: SqlitePool,
}

impl SqlitePhotoRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PhotoRepository for SqlitePhotoRepo {
    async fn create(&self, photo: &Photo) -> Result<Photo, AppError> {
        sqlx::query_as::<_, Photo>(
            r#"INSERT INTO photos (user_id, project_id, board_id, contact_id, url, file_type, notes, markup_data, is_locked, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
               RETURNING *"#
        )
            .bind(&photo.user_id)
            .bind(photo.project_id)
            .bind(photo.board_id)
            .bind(photo.contact_id)
            .bind(&photo.url)
            .bind(&photo.file_type)
            .bind(&photo.notes)
            .bind(&photo.markup_data)
            .bind(photo.is_locked)
            .bind(photo.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Photo>, AppError> {
        sqlx::query_as::<_, Photo>("SELECT * FROM photos WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, project_id: Option<i64>, board_id: Option<i64>) -> Result<Vec<PhotoWithUser>, AppError> {
        sqlx::query_as::<_, PhotoWithUser>(
            r#"SELECT p.id, p.user_id, p.project_id, p.board_id, p.contact_id, p.url, p.file_type,
                      p.notes, p.markup_data, p.is_locked, p.created_at,
                      u.email, u.first_name, u.last_name
               FROM photos p
               JOIN users u ON u.id = p.user_id
               WHERE (?1 IS NULL OR p.project_id = ?1)
                 AND (?2 IS NULL OR p.board_id = ?2)
               ORDER BY p.created_at DESC"#
        )
            .bind(project_id)
            .bind(board_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, photo: &Photo) -> Result<Photo, AppError> {
        sqlx::query_as::<_, Photo>(
            "UPDATE photos SET notes=?, markup_data=?, is_locked=? WHERE id=? RETURNING *"
        )
            .bind(&photo.notes)
            .bind(&photo.markup_data)
            .bind(photo.is_locked)
            .bind(photo.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM photos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Photo not found".into()));
        }
        Ok(())
    }
}
