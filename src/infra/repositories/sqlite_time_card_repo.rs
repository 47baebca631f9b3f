use crate::domain::{
    models::time_card::{TimeCard, TimeCardWithUser},
    ports::TimeCardRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

pub struct SqliteTimeCardRepo {
    pool: SqlitePool,
}

impl SqliteTimeCardRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TimeCardRepository for SqliteTimeCardRepo {
    async fn insert_open(&self, user_id: &str, start: DateTime<Utc>) -> Result<TimeCard, AppError> {
        sqlx::query_as::<_, TimeCard>(
            "INSERT INTO time_cards (user_id, start_time) VALUES (?, ?) RETURNING *"
        )
            .bind(user_id)
            .bind(start)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                let err = AppError::Database(e);
                // The partial unique index on open cards turns a concurrent
                // double clock-in into this violation.
                if err.is_unique_violation() {
                    AppError::Validation("Already clocked in".into())
                } else {
                    err
                }
            })
    }

    async fn find_open(&self, user_id: &str) -> Result<Option<TimeCard>, AppError> {
        sqlx::query_as::<_, TimeCard>(
            "SELECT * FROM time_cards WHERE user_id = ? AND end_time IS NULL"
        )
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn close(&self, id: i64, end: DateTime<Utc>, total_hours: f64, notes: Option<String>) -> Result<TimeCard, AppError> {
        sqlx::query_as::<_, TimeCard>(
            "UPDATE time_cards SET end_time=?, total_hours=?, notes=? WHERE id=? RETURNING *"
        )
            .bind(end)
            .bind(total_hours)
            .bind(&notes)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<TimeCard>, AppError> {
        sqlx::query_as::<_, TimeCard>(
            "SELECT * FROM time_cards WHERE user_id = ? ORDER BY start_time DESC"
        )
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_since(&self, user_id: &str, start: DateTime<Utc>) -> Result<Vec<TimeCard>, AppError> {
        sqlx::query_as::<_, TimeCard>(
            "SELECT * FROM time_cards WHERE user_id = ? AND start_time >= ? ORDER BY start_time DESC"
        )
            .bind(user_id)
            .bind(start)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_with_users(
        &self,
        user_id: Option<&str>,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Vec<TimeCardWithUser>, AppError> {
        sqlx::query_as::<_, TimeCardWithUser>(
            r#"SELECT t.id, t.user_id, t.start_time, t.end_time, t.total_hours, t.notes,
                      u.email, u.first_name, u.last_name
               FROM time_cards t
               JOIN users u ON u.id = t.user_id
               WHERE (?1 IS NULL OR t.user_id = ?1)
                 AND (?2 IS NULL OR t.start_time >= ?2)
                 AND (?3 IS NULL OR t.start_time <= ?3)
               ORDER BY t.start_time DESC"#
        )
            .bind(user_id)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
