//! Order queries and state changes.

use crate::{
    core::{
        order::{self, OrderDetails, OrderFilter},
        user,
    },
    entities::{OrderModel, OrderState},
    errors::Error,
    web::{
        error::ApiError,
        extract::{ApiJson, ApiPath, ApiQuery},
        state::AppState,
    },
};
use axum::{Json, extract::State};
use chrono::NaiveDate;
use serde::Deserialize;

const DEFAULT_LIMIT: u64 = 50;
const MAX_LIMIT: u64 = 500;

/// Query string of `GET /api/orders`.
#[derive(Debug, Default, Deserialize)]
pub struct OrderQuery {
    pub state: Option<OrderState>,
    pub from: Option<NaiveDate>,
    pub limit: Option<u64>,
}

impl OrderQuery {
    fn to_filter(&self) -> OrderFilter {
        OrderFilter {
            state: self.state,
            due_from: self.from,
            limit: self.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT),
        }
    }
}

/// Body of `POST /api/orders/:id/state`.
#[derive(Debug, Deserialize)]
pub struct ChangeStateRequest {
    pub state: OrderState,
    /// Email of the user making the change
    pub changed_by: String,
}

/// `GET /api/orders?state=&from=&limit=`
pub async fn list_orders(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<OrderQuery>,
) -> Result<Json<Vec<OrderModel>>, ApiError> {
    Ok(Json(order::list_orders(&state.db, &query.to_filter()).await?))
}

/// `GET /api/orders/:id`
pub async fn get_order(
    State(state): State<AppState>,
    ApiPath(order_id): ApiPath<i64>,
) -> Result<Json<OrderDetails>, ApiError> {
    Ok(Json(order::get_order_details(&state.db, order_id).await?))
}

/// `POST /api/orders/:id/state`
pub async fn change_state(
    State(state): State<AppState>,
    ApiPath(order_id): ApiPath<i64>,
    ApiJson(request): ApiJson<ChangeStateRequest>,
) -> Result<Json<OrderModel>, ApiError> {
    let actor = user::get_user_by_email(&state.db, &request.changed_by)
        .await?
        .ok_or_else(|| Error::UserNotFound {
            email: request.changed_by.clone(),
        })?;
    let updated = order::change_state(&state.db, order_id, actor.id, request.state).await?;
    tracing::info!(
        "Order {} moved to {} by {}",
        order_id,
        updated.state,
        actor.email
    );
    Ok(Json(updated))
}
