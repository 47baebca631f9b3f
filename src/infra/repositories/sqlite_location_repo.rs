use crate::domain::{
    models::location::{LiveLocation, Location},
    ports::LocationRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteLocationRepo {
    pool: SqlitePool,
}

impl SqliteLocationRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationRepository for SqliteLocationRepo {
    async fn create(&self, location: &Location) -> Result<Location, AppError> {
        sqlx::query_as::<_, Location>(
            "INSERT INTO locations (user_id, lat, lng, timestamp) VALUES (?, ?, ?, ?) RETURNING *"
        )
            .bind(&location.user_id)
            .bind(location.lat)
            .bind(location.lng)
            .bind(location.timestamp)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_live(&self) -> Result<Vec<LiveLocation>, AppError> {
        // One row per user: the freshest ping, resolved with a correlated
        // subquery rather than a capped scan so idle users are never dropped.
        sqlx::query_as::<_, LiveLocation>(
            r#"SELECT l.id, l.user_id, l.lat, l.lng, l.timestamp,
                      u.email, u.first_name, u.last_name, u.profile_image_url
               FROM locations l
               JOIN users u ON u.id = l.user_id
               WHERE l.id = (
                   SELECT l2.id FROM locations l2
                   WHERE l2.user_id = l.user_id
                   ORDER BY l2.timestamp DESC, l2.id DESC
                   LIMIT 1
               )
               ORDER BY l.timestamp DESC"#
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
