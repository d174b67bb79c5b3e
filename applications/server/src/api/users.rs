/// Users API routes
use crate::{error::Result, state::AppState};
use atlas_core::types::{DeleteResult, UpdateResult, User, UserFields};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

/// GET /api/users
/// List every user
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = app_state.users.list().await?;
    Ok(Json(users))
}

/// GET /api/users/:id
pub async fn get_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    let user = app_state.users.fetch_one(&id).await?;
    Ok(Json(user))
}

/// POST /api/users
/// Create a user from whichever fields the body supplies
pub async fn create_user(
    State(app_state): State<AppState>,
    Json(fields): Json<UserFields>,
) -> Result<(StatusCode, Json<User>)> {
    let user = app_state.users.add(fields).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT|PATCH /api/users/:id
/// Partial update. Success answers 201, same as creation.
pub async fn update_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    Json(fields): Json<UserFields>,
) -> Result<(StatusCode, Json<UpdateResult>)> {
    let result = app_state.users.update(&id, fields).await?;
    Ok((StatusCode::CREATED, Json(result)))
}

/// DELETE /api/users/:id
pub async fn delete_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<DeleteResult>> {
    let result = app_state.users.delete(&id).await?;
    Ok(Json(result))
}
