/// Location lookup API routes
use crate::{error::Result, state::AppState};
use atlas_core::Coordinates;
use axum::{
    extract::{Path, State},
    Json,
};

/// GET /api/users/mapbox/:id
/// Geocode the user's stored address
pub async fn get_user_location(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<Coordinates>> {
    let coordinates = app_state.locations.locate(&id).await?;
    Ok(Json(coordinates))
}
