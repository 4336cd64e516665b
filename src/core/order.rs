//! Order business logic - Creating orders and moving them through their lifecycle.
//!
//! An order is written together with its customer, items and history in one
//! database transaction. The write is refused unless the history is a valid
//! trail for the order's state: at least one entry, timestamps never going
//! backwards, the last entry matching the order state, and at most one
//! terminal entry which must come last.

use crate::{
    core::{product, user},
    entities::{
        Customer, HistoryItem, Order, OrderItem, OrderState, PickupLocation, customer,
        history_item, order, order_item, pickup_location,
    },
    errors::{Error, Result},
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sea_orm::{
    PaginatorTrait, QueryOrder, QuerySelect, Set, TransactionTrait, prelude::*,
};
use serde::Serialize;

/// Customer details for a new order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub full_name: String,
    pub phone_number: String,
    pub details: Option<String>,
}

/// One product line of a new order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderItem {
    pub product_id: i64,
    pub quantity: i32,
    pub comment: Option<String>,
}

/// One history entry of a new order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHistoryItem {
    pub new_state: OrderState,
    pub message: String,
    pub timestamp: NaiveDateTime,
    pub created_by_id: i64,
}

/// Everything needed to persist an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub customer: NewCustomer,
    pub pickup_location_id: i64,
    pub due_date: NaiveDate,
    pub due_time: NaiveTime,
    pub state: OrderState,
    pub items: Vec<NewOrderItem>,
    pub history: Vec<NewHistoryItem>,
}

/// An order with everything it references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderDetails {
    pub order: order::Model,
    pub customer: customer::Model,
    pub pickup_location: pickup_location::Model,
    pub items: Vec<order_item::Model>,
    pub history: Vec<history_item::Model>,
}

/// Filter for [`list_orders`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderFilter {
    /// Only orders currently in this state
    pub state: Option<OrderState>,
    /// Only orders due on or after this day
    pub due_from: Option<NaiveDate>,
    /// Maximum number of orders returned
    pub limit: u64,
}

impl Default for OrderFilter {
    fn default() -> Self {
        Self {
            state: None,
            due_from: None,
            limit: 50,
        }
    }
}

/// Checks that `history` is a valid trail for an order in `state`.
///
/// # Errors
/// Returns [`Error::Validation`] describing the first violated rule.
pub fn validate_history(state: OrderState, history: &[NewHistoryItem]) -> Result<()> {
    let Some(last) = history.last() else {
        return Err(Error::validation("An order needs at least one history entry"));
    };
    if history
        .windows(2)
        .any(|pair| pair[1].timestamp < pair[0].timestamp)
    {
        return Err(Error::validation("History timestamps must not go backwards"));
    }
    if last.new_state != state {
        return Err(Error::validation(format!(
            "Last history entry is '{}' but the order is '{state}'",
            last.new_state
        )));
    }
    let terminal = history
        .iter()
        .filter(|entry| entry.new_state.is_terminal())
        .count();
    if terminal > 1 || (terminal == 1 && !last.new_state.is_terminal()) {
        return Err(Error::validation(
            "A terminal state may appear only once, as the last history entry",
        ));
    }
    Ok(())
}

fn validate_new_order(new_order: &NewOrder) -> Result<()> {
    if new_order.customer.full_name.trim().is_empty() {
        return Err(Error::validation("Customer name cannot be empty"));
    }
    if new_order.items.is_empty() {
        return Err(Error::validation("An order needs at least one item"));
    }
    if let Some(item) = new_order.items.iter().find(|item| item.quantity < 1) {
        return Err(Error::InvalidQuantity {
            quantity: item.quantity,
        });
    }
    validate_history(new_order.state, &new_order.history)
}

/// Persists an order with its customer, items and history atomically.
///
/// Item totals are computed from the current product prices.
///
/// # Errors
/// Returns an error if:
/// - The order has no items, a quantity below 1, or an invalid history
/// - A referenced product does not exist
/// - Any insert fails (e.g. unknown pickup location or user)
pub async fn create_order<C>(db: &C, new_order: NewOrder) -> Result<order::Model>
where
    C: TransactionTrait,
{
    validate_new_order(&new_order)?;

    let txn = db.begin().await?;

    let customer = customer::ActiveModel {
        full_name: Set(new_order.customer.full_name.trim().to_string()),
        phone_number: Set(new_order.customer.phone_number),
        details: Set(new_order.customer.details),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let order = order::ActiveModel {
        customer_id: Set(customer.id),
        pickup_location_id: Set(new_order.pickup_location_id),
        due_date: Set(new_order.due_date),
        due_time: Set(new_order.due_time),
        state: Set(new_order.state),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let mut items = Vec::with_capacity(new_order.items.len());
    for item in new_order.items {
        let product = product::get_product_by_id(&txn, item.product_id)
            .await?
            .ok_or(Error::ProductNotFound {
                id: item.product_id,
            })?;
        let total_price = product
            .price
            .checked_mul(item.quantity)
            .ok_or_else(|| Error::validation("Order item total is too large"))?;
        items.push(order_item::ActiveModel {
            order_id: Set(order.id),
            product_id: Set(product.id),
            quantity: Set(item.quantity),
            comment: Set(item.comment),
            total_price: Set(total_price),
            ..Default::default()
        });
    }
    OrderItem::insert_many(items).exec(&txn).await?;

    let history = new_order
        .history
        .into_iter()
        .map(|entry| history_item::ActiveModel {
            order_id: Set(order.id),
            created_by_id: Set(entry.created_by_id),
            new_state: Set(entry.new_state),
            message: Set(entry.message),
            timestamp: Set(entry.timestamp),
            ..Default::default()
        });
    HistoryItem::insert_many(history).exec(&txn).await?;

    txn.commit().await?;
    Ok(order)
}

/// Loads an order together with its customer, pickup location, items and history.
///
/// # Errors
/// Returns [`Error::OrderNotFound`] if there is no such order, or an error if a
/// database query fails.
pub async fn get_order_details<C>(db: &C, order_id: i64) -> Result<OrderDetails>
where
    C: ConnectionTrait,
{
    let order = Order::find_by_id(order_id)
        .one(db)
        .await?
        .ok_or(Error::OrderNotFound { id: order_id })?;

    let customer = Customer::find_by_id(order.customer_id)
        .one(db)
        .await?
        .ok_or_else(|| {
            DbErr::RecordNotFound(format!("customer {} of order {order_id}", order.customer_id))
        })?;
    let pickup_location = PickupLocation::find_by_id(order.pickup_location_id)
        .one(db)
        .await?
        .ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "pickup location {} of order {order_id}",
                order.pickup_location_id
            ))
        })?;
    let items = OrderItem::find()
        .filter(order_item::Column::OrderId.eq(order_id))
        .order_by_asc(order_item::Column::Id)
        .all(db)
        .await?;
    let history = get_order_history(db, order_id).await?;

    Ok(OrderDetails {
        order,
        customer,
        pickup_location,
        items,
        history,
    })
}

/// Lists orders matching `filter`, latest due first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_orders<C>(db: &C, filter: &OrderFilter) -> Result<Vec<order::Model>>
where
    C: ConnectionTrait,
{
    let mut query = Order::find();
    if let Some(state) = filter.state {
        query = query.filter(order::Column::State.eq(state));
    }
    if let Some(due_from) = filter.due_from {
        query = query.filter(order::Column::DueDate.gte(due_from));
    }
    query
        .order_by_desc(order::Column::DueDate)
        .order_by_desc(order::Column::DueTime)
        .order_by_desc(order::Column::Id)
        .limit(filter.limit)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Counts all orders.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn count_orders<C>(db: &C) -> Result<u64>
where
    C: ConnectionTrait,
{
    Order::find().count(db).await.map_err(Into::into)
}

/// Retrieves an order's history, oldest entry first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_order_history<C>(db: &C, order_id: i64) -> Result<Vec<history_item::Model>>
where
    C: ConnectionTrait,
{
    HistoryItem::find()
        .filter(history_item::Column::OrderId.eq(order_id))
        .order_by_asc(history_item::Column::Timestamp)
        .order_by_asc(history_item::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Moves an order to `new_state` and records the change in its history.
///
/// The new entry is stamped with the current local time, or with the time of
/// the latest entry if that lies in the future, so the trail stays ordered.
///
/// # Errors
/// Returns an error if:
/// - The order does not exist
/// - `changed_by_id` is not a known user
/// - The order is already in a terminal state or already in `new_state`
/// - A database operation fails
pub async fn change_state<C>(
    db: &C,
    order_id: i64,
    changed_by_id: i64,
    new_state: OrderState,
) -> Result<order::Model>
where
    C: TransactionTrait,
{
    let txn = db.begin().await?;

    let current = Order::find_by_id(order_id)
        .one(&txn)
        .await?
        .ok_or(Error::OrderNotFound { id: order_id })?;
    if user::get_user_by_id(&txn, changed_by_id).await?.is_none() {
        return Err(Error::validation(format!("Unknown user id {changed_by_id}")));
    }

    if current.state.is_terminal() || current.state == new_state {
        return Err(Error::InvalidTransition {
            order_id,
            from: current.state.to_string(),
            to: new_state.to_string(),
        });
    }

    let now = chrono::Local::now().naive_local();
    let latest = HistoryItem::find()
        .filter(history_item::Column::OrderId.eq(order_id))
        .order_by_desc(history_item::Column::Timestamp)
        .one(&txn)
        .await?
        .map(|entry| entry.timestamp);
    let timestamp = latest.map_or(now, |latest| latest.max(now));

    history_item::ActiveModel {
        order_id: Set(order_id),
        created_by_id: Set(changed_by_id),
        new_state: Set(new_state),
        message: Set(format!("Order {new_state}")),
        timestamp: Set(timestamp),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let mut order: order::ActiveModel = current.into();
    order.state = Set(new_state);
    let updated = order.update(&txn).await?;

    txn.commit().await?;
    Ok(updated)
}
