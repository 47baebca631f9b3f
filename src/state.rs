use std::sync::Arc;
use crate::domain::ports::{
    UserRepository, SessionRepository, TimeCardRepository, LocationRepository,
    ProjectRepository, BoardRepository, ContactRepository, PhotoRepository,
    MessageRepository,
};
use crate::domain::services::auth_service::AuthService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub session_repo: Arc<dyn SessionRepository>,
    pub time_card_repo: Arc<dyn TimeCardRepository>,
    pub location_repo: Arc<dyn LocationRepository>,
    pub project_repo: Arc<dyn ProjectRepository>,
    pub board_repo: Arc<dyn BoardRepository>,
    pub contact_repo: Arc<dyn ContactRepository>,
    pub photo_repo: Arc<dyn PhotoRepository>,
    pub message_repo: Arc<dyn MessageRepository>,
    pub auth_service: Arc<AuthService>,
}
