use crate::domain::models::{
    user::User, session::Session,
    time_card::{TimeCard, TimeCardWithUser},
    location::{Location, LiveLocation},
    project::{Project, ProjectMember, ProjectMessage},
    board::{Board, BoardMember, BoardMemberWithUser},
    contact::Contact,
    photo::{Photo, PhotoWithUser},
    message::{Message, MessageWithSender},
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn list(&self) -> Result<Vec<User>, AppError>;
    async fn update(&self, user: &User) -> Result<User, AppError>;
    async fn update_password(&self, id: &str, password_hash: &str) -> Result<(), AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, session: &Session) -> Result<(), AppError>;
    async fn find(&self, token_hash: &str) -> Result<Option<Session>, AppError>;
    async fn touch(&self, token_hash: &str, expires_at: DateTime<Utc>) -> Result<(), AppError>;
    async fn delete(&self, token_hash: &str) -> Result<(), AppError>;
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError>;
}

#[async_trait]
pub trait TimeCardRepository: Send + Sync {
    /// Inserts an open card. The store's partial unique index rejects a
    /// second open card for the same user.
    async fn insert_open(&self, user_id: &str, start: DateTime<Utc>) -> Result<TimeCard, AppError>;
    async fn find_open(&self, user_id: &str) -> Result<Option<TimeCard>, AppError>;
    async fn close(&self, id: i64, end: DateTime<Utc>, total_hours: f64, notes: Option<String>) -> Result<TimeCard, AppError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<TimeCard>, AppError>;
    async fn list_since(&self, user_id: &str, start: DateTime<Utc>) -> Result<Vec<TimeCard>, AppError>;
    async fn list_with_users(
        &self,
        user_id: Option<&str>,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Vec<TimeCardWithUser>, AppError>;
}

#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn create(&self, location: &Location) -> Result<Location, AppError>;
    /// Latest ping per user, freshest first.
    async fn list_live(&self) -> Result<Vec<LiveLocation>, AppError>;
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(&self, project: &Project) -> Result<Project, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Project>, AppError>;
    async fn list(&self) -> Result<Vec<Project>, AppError>;
    async fn update(&self, project: &Project) -> Result<Project, AppError>;
    /// Deletes the project together with its photos, members and messages.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    async fn add_member(&self, member: &ProjectMember) -> Result<ProjectMember, AppError>;
    async fn remove_member(&self, project_id: i64, user_id: &str) -> Result<(), AppError>;
    async fn list_members(&self, project_id: i64) -> Result<Vec<ProjectMember>, AppError>;

    async fn create_message(&self, message: &ProjectMessage) -> Result<ProjectMessage, AppError>;
    async fn list_messages(&self, project_id: i64, limit: i64) -> Result<Vec<ProjectMessage>, AppError>;
}

#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Creates the board and its initial memberships, given as
    /// (user_id, can_edit) pairs, in one transaction. Duplicate ids in the
    /// list collapse to a single membership.
    async fn create(&self, board: &Board, members: &[(String, bool)]) -> Result<Board, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Board>, AppError>;
    async fn list_all(&self) -> Result<Vec<Board>, AppError>;
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Board>, AppError>;
    async fn update(&self, board: &Board) -> Result<Board, AppError>;
    /// Deletes the board together with its messages and memberships.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    async fn add_member(&self, member: &BoardMember) -> Result<BoardMember, AppError>;
    async fn find_membership(&self, board_id: i64, user_id: &str) -> Result<Option<BoardMember>, AppError>;
    async fn update_member(&self, board_id: i64, user_id: &str, can_edit: bool) -> Result<BoardMember, AppError>;
    async fn remove_member(&self, board_id: i64, user_id: &str) -> Result<(), AppError>;
    async fn list_members(&self, board_id: i64) -> Result<Vec<BoardMemberWithUser>, AppError>;
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, contact: &Contact) -> Result<Contact, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Contact>, AppError>;
    async fn list(&self) -> Result<Vec<Contact>, AppError>;
    async fn update(&self, contact: &Contact) -> Result<Contact, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait PhotoRepository: Send + Sync {
    async fn create(&self, photo: &Photo) -> Result<Photo, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Photo>, AppError>;
    async fn list(&self, project_id: Option<i64>, board_id: Option<i64>) -> Result<Vec<PhotoWithUser>, AppError>;
    async fn update(&self, photo: &Photo) -> Result<Photo, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn create(&self, message: &Message) -> Result<Message, AppError>;
    async fn find_with_sender(&self, id: i64) -> Result<Option<MessageWithSender>, AppError>;
    /// Most recent `limit` messages on a board, newest first.
    async fn list_by_board(&self, board_id: i64, limit: i64) -> Result<Vec<MessageWithSender>, AppError>;
}
