pub mod user;
pub mod session;
pub mod time_card;
pub mod location;
pub mod project;
pub mod board;
pub mod contact;
pub mod photo;
pub mod message;
