//! Staff account listing.

use crate::{
    core::user,
    entities::UserModel,
    web::{error::ApiError, state::AppState},
};
use axum::{Json, extract::State};

/// `GET /api/users`. Password hashes are never serialized.
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserModel>>, ApiError> {
    Ok(Json(user::list_users(&state.db).await?))
}
