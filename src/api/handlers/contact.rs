use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::{CreateContactRequest, UpdateContactRequest};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::contact::Contact;
use crate::domain::services::access_control::contact_mutation;
use std::sync::Arc;
use chrono::Utc;
use serde_json::json;

pub async fn list_contacts(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let contacts = state.contact_repo.list().await?;
    Ok(Json(contacts))
}

pub async fn create_contact(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<CreateContactRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.first_name.is_empty() {
        return Err(AppError::Validation("First name required".into()));
    }

    let now = Utc::now();
    let contact = Contact {
        id: 0,
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        phone: payload.phone,
        company: payload.company,
        address: payload.address,
        notes: payload.notes,
        created_by: user.0.id,
        created_at: now,
        updated_at: now,
    };
    let created = state.contact_repo.create(&contact).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_contact(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(contact_id): Path<i64>,
    Json(payload): Json<UpdateContactRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut contact = state.contact_repo.find_by_id(contact_id).await?
        .ok_or(AppError::NotFound("Contact not found".into()))?;

    contact_mutation(&user.context(), &contact.created_by).into_result()?;

    if let Some(first_name) = payload.first_name {
        contact.first_name = first_name;
    }
    if payload.last_name.is_some() {
        contact.last_name = payload.last_name;
    }
    if payload.email.is_some() {
        contact.email = payload.email;
    }
    if payload.phone.is_some() {
        contact.phone = payload.phone;
    }
    if payload.company.is_some() {
        contact.company = payload.company;
    }
    if payload.address.is_some() {
        contact.address = payload.address;
    }
    if payload.notes.is_some() {
        contact.notes = payload.notes;
    }
    contact.updated_at = Utc::now();

    let updated = state.contact_repo.update(&contact).await?;
    Ok(Json(updated))
}

pub async fn delete_contact(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(contact_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let contact = state.contact_repo.find_by_id(contact_id).await?
        .ok_or(AppError::NotFound("Contact not found".into()))?;

    contact_mutation(&user.context(), &contact.created_by).into_result()?;

    state.contact_repo.delete(contact_id).await?;
    Ok(Json(json!({ "message": "Contact deleted" })))
}
