//! Products and pickup locations.

use crate::{
    core::{pickup_location, product},
    entities::{PickupLocationModel, ProductModel},
    web::{error::ApiError, state::AppState},
};
use axum::{Json, extract::State};

/// `GET /api/products`
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductModel>>, ApiError> {
    Ok(Json(product::list_products(&state.db).await?))
}

/// `GET /api/pickup-locations`
pub async fn list_pickup_locations(
    State(state): State<AppState>,
) -> Result<Json<Vec<PickupLocationModel>>, ApiError> {
    Ok(Json(pickup_location::list_pickup_locations(&state.db).await?))
}
