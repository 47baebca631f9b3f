pub mod health;
pub mod auth;
pub mod user;
pub mod time_card;
pub mod location;
pub mod project;
pub mod contact;
pub mod photo;
pub mod board;
pub mod message;
