use crate::domain::{
    models::message::{Message, MessageWithSender},
    ports::MessageRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteMessageRepo {
    pool: SqlitePool,
}

impl SqliteMessageRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

const WITH_SENDER: &str = r#"
    SELECT m.id, m.sender_id, m.board_id, m.content, m.photo_id, m.is_locked, m.created_at,
           u.first_name, u.last_name, u.profile_image_url,
           p.url AS photo_url
    FROM messages m
    JOIN users u ON u.id = m.sender_id
    LEFT JOIN photos p ON p.id = m.photo_id
"#;

#[async_trait]
impl MessageRepository for SqliteMessageRepo {
    async fn create(&self, message: &Message) -> Result<Message, AppError> {
        sqlx::query_as::<_, Message>(
            r#"INSERT INTO messages (sender_id, board_id, content, photo_id, created_at)
               VALUES (?, ?, ?, ?, ?)
               RETURNING *"#
        )
            .bind(&message.sender_id)
            .bind(message.board_id)
            .bind(&message.content)
            .bind(message.photo_id)
            .bind(message.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_with_sender(&self, id: i64) -> Result<Option<MessageWithSender>, AppError> {
        sqlx::query_as::<_, MessageWithSender>(&format!("{WITH_SENDER} WHERE m.id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_board(&self, board_id: i64, limit: i64) -> Result<Vec<MessageWithSender>, AppError> {
        sqlx::query_as::<_, MessageWithSender>(&format!(
            "{WITH_SENDER} WHERE m.board_id = ? ORDER BY m.created_at DESC, m.id DESC LIMIT ?"
        ))
            .bind(board_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
