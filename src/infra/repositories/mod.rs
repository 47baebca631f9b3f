pub mod sqlite_user_repo;
pub mod sqlite_session_repo;
pub mod sqlite_time_card_repo;
pub mod sqlite_location_repo;
pub mod sqlite_project_repo;
pub mod sqlite_board_repo;
pub mod sqlite_contact_repo;
pub mod sqlite_photo_repo;
pub mod sqlite_message_repo;
