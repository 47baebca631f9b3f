use axum::{
    body::Body,
    extract::Request,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{auth, board, contact, health, location, message, photo, project, time_card, user};
use tower_http::{
    classify::ServerErrorsFailureClass,
    trace::TraceLayer,
};
use tower_cookies::CookieManagerLayer;
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/user", get(auth::current_user))
        .route("/api/auth/change-password", post(auth::change_password))
        .route("/api/logout", get(auth::logout))

        // Users
        .route("/api/users", get(user::list_users).post(user::create_user))
        .route("/api/users/{id}", put(user::update_user).delete(user::delete_user))
        .route("/api/users/{id}/role", put(user::update_role))

        // Time cards
        .route("/api/time-cards/status", get(time_card::status))
        .route("/api/time-cards/clock-in", post(time_card::clock_in))
        .route("/api/time-cards/clock-out", post(time_card::clock_out))
        .route("/api/time-cards", get(time_card::list_own))
        .route("/api/admin/time-cards", get(time_card::admin_list))
        .route("/api/admin/time-cards/calendar", get(time_card::admin_calendar))
        .route("/api/admin/time-cards/user/{id}", get(time_card::admin_user_summary))

        // Locations
        .route("/api/locations", post(location::create_location))
        .route("/api/locations/live", get(location::live_locations))

        // Projects
        .route("/api/projects", get(project::list_projects).post(project::create_project))
        .route("/api/projects/{id}", put(project::update_project).delete(project::delete_project))
        .route("/api/projects/{id}/members", get(project::list_members).post(project::add_member))
        .route("/api/projects/{id}/members/{user_id}", delete(project::remove_member))
        .route("/api/projects/{id}/messages", get(project::list_messages).post(project::create_message))

        // Contacts
        .route("/api/contacts", get(contact::list_contacts).post(contact::create_contact))
        .route("/api/contacts/{id}", put(contact::update_contact).delete(contact::delete_contact))

        // Photos
        .route("/api/photos", get(photo::list_photos).post(photo::create_photo))
        .route("/api/photos/{id}", put(photo::update_photo).delete(photo::delete_photo))

        // Boards (chat)
        .route("/api/boards", get(board::list_boards).post(board::create_board))
        .route("/api/boards/{id}", put(board::update_board).delete(board::delete_board))
        .route("/api/boards/{id}/members", get(board::list_members).post(board::add_member))
        .route("/api/boards/{id}/members/{user_id}", put(board::update_member).delete(board::remove_member))

        // Messages
        .route("/api/boards/{id}/messages", get(message::board_messages))
        .route("/api/messages", post(message::send_message))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
