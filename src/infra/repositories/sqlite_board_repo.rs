use crate::domain::{
    models::board::{Board, BoardMember, BoardMemberWithUser},
    ports::BoardRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

pub struct SqliteBoardRepo {
    pool: SqlitePool,
}

impl SqliteBoardRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BoardRepository for SqliteBoardRepo {
    async fn create(&self, board: &Board, members: &[(String, bool)]) -> Result<Board, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let created = sqlx::query_as::<_, Board>(
            r#"INSERT INTO boards (name, type, created_by, allow_user_editing, created_at)
               VALUES (?, ?, ?, ?, ?)
               RETURNING *"#
        )
            .bind(&board.name)
            .bind(&board.board_type)
            .bind(&board.created_by)
            .bind(board.allow_user_editing)
            .bind(board.created_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        for (user_id, can_edit) in members {
            // OR IGNORE absorbs duplicate ids in the request.
            sqlx::query(
                "INSERT OR IGNORE INTO board_members (board_id, user_id, can_edit, joined_at) VALUES (?, ?, ?, ?)"
            )
                .bind(created.id)
                .bind(user_id)
                .bind(can_edit)
                .bind(Utc::now())
                .execute(&mut *tx)
                .await
                .map_err(AppError::Database)?;
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Board>, AppError> {
        sqlx::query_as::<_, Board>("SELECT * FROM boards WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_all(&self) -> Result<Vec<Board>, AppError> {
        sqlx::query_as::<_, Board>("SELECT * FROM boards ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Board>, AppError> {
        sqlx::query_as::<_, Board>(
            r#"SELECT b.* FROM boards b
               JOIN board_members m ON m.board_id = b.id
               WHERE m.user_id = ?
               ORDER BY b.created_at DESC"#
        )
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, board: &Board) -> Result<Board, AppError> {
        sqlx::query_as::<_, Board>(
            "UPDATE boards SET name=?, allow_user_editing=? WHERE id=? RETURNING *"
        )
            .bind(&board.name)
            .bind(board.allow_user_editing)
            .bind(board.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        sqlx::query("DELETE FROM messages WHERE board_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        sqlx::query("DELETE FROM board_members WHERE board_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        let result = sqlx::query("DELETE FROM boards WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Board not found".into()));
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(())
    }

    async fn add_member(&self, member: &BoardMember) -> Result<BoardMember, AppError> {
        sqlx::query_as::<_, BoardMember>(
            "INSERT INTO board_members (board_id, user_id, can_edit, joined_at) VALUES (?, ?, ?, ?) RETURNING *"
        )
            .bind(member.board_id)
            .bind(&member.user_id)
            .bind(member.can_edit)
            .bind(member.joined_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_membership(&self, board_id: i64, user_id: &str) -> Result<Option<BoardMember>, AppError> {
        sqlx::query_as::<_, BoardMember>(
            "SELECT * FROM board_members WHERE board_id = ? AND user_id = ?"
        )
            .bind(board_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update_member(&self, board_id: i64, user_id: &str, can_edit: bool) -> Result<BoardMember, AppError> {
        sqlx::query_as::<_, BoardMember>(
            "UPDATE board_members SET can_edit=? WHERE board_id=? AND user_id=? RETURNING *"
        )
            .bind(can_edit)
            .bind(board_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Member not found".into()))
    }

    async fn remove_member(&self, board_id: i64, user_id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM board_members WHERE board_id = ? AND user_id = ?")
            .bind(board_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn list_members(&self, board_id: i64) -> Result<Vec<BoardMemberWithUser>, AppError> {
        sqlx::query_as::<_, BoardMemberWithUser>(
            r#"SELECT m.id, m.board_id, m.user_id, m.can_edit, m.joined_at,
                      u.email, u.first_name, u.last_name, u.profile_image_url
               FROM board_members m
               JOIN users u ON u.id = m.user_id
               WHERE m.board_id = ?
               ORDER BY m.joined_at ASC"#
        )
            .bind(board_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
