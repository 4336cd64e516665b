//! Randomized order lifecycles.
//!
//! Everything here is pure: given the same RNG state and `today`, the same
//! states, due times and history trails come out.

use crate::core::order::NewHistoryItem;
use crate::entities::OrderState;
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use rand::Rng;

/// Staff accounts that appear as actors in generated history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actors {
    pub barista_id: i64,
    pub baker_id: i64,
}

pub(crate) fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default())
}

/// Picks 08:00, 12:00 or 16:00.
pub fn random_due_time<R: Rng + ?Sized>(rng: &mut R) -> NaiveTime {
    let hour = 8 + 4 * rng.random_range(0..3);
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or_default()
}

/// Picks a plausible state for an order due on `due`, seen from `today`.
///
/// Past orders are finished; orders far in the future have not been touched
/// yet; orders due within the next two days are somewhere in between.
pub fn random_state<R: Rng + ?Sized>(rng: &mut R, due: NaiveDate, today: NaiveDate) -> OrderState {
    let tomorrow = today + Days::new(1);
    let two_days = today + Days::new(2);

    if due < today {
        return if rng.random::<f64>() < 0.9 {
            OrderState::Delivered
        } else {
            OrderState::Cancelled
        };
    }
    if due > two_days {
        return OrderState::New;
    }

    let roll = rng.random::<f64>();
    if due > tomorrow {
        if roll < 0.8 {
            OrderState::New
        } else if roll < 0.9 {
            OrderState::Problem
        } else {
            OrderState::Cancelled
        }
    } else if roll < 0.6 {
        OrderState::Ready
    } else if roll < 0.8 {
        OrderState::Delivered
    } else if roll < 0.9 {
        OrderState::Problem
    } else {
        OrderState::Cancelled
    }
}

fn entry(
    new_state: OrderState,
    message: &str,
    timestamp: NaiveDateTime,
    created_by_id: i64,
) -> NewHistoryItem {
    NewHistoryItem {
        new_state,
        message: message.to_string(),
        timestamp,
        created_by_id,
    }
}

/// Builds the history trail that leads an order due at `due_date`/`due_time`
/// into `state`.
///
/// The trail starts with the order being placed two to six days ahead and
/// never goes back in time.
pub fn plan_history<R: Rng + ?Sized>(
    rng: &mut R,
    state: OrderState,
    due_date: NaiveDate,
    due_time: NaiveTime,
    actors: Actors,
) -> Vec<NewHistoryItem> {
    let lead_days = rng.random_range(2..7_u64);
    let placed = at(due_date - Days::new(lead_days), rng.random_range(7..17), 0);

    let mut history = vec![entry(
        OrderState::New,
        "Order placed",
        placed,
        actors.barista_id,
    )];

    match state {
        OrderState::New => {}
        OrderState::Cancelled => {
            let days_until_due = (due_date - placed.date()).num_days().max(1);
            let cancelled = placed + TimeDelta::days(rng.random_range(0..days_until_due));
            history.push(entry(
                OrderState::Cancelled,
                "Order cancelled",
                cancelled,
                actors.barista_id,
            ));
        }
        OrderState::Confirmed | OrderState::Ready | OrderState::Delivered | OrderState::Problem => {
            let confirmed = placed
                + TimeDelta::days(rng.random_range(0..2))
                + TimeDelta::hours(rng.random_range(0..5));
            history.push(entry(
                OrderState::Confirmed,
                "Order confirmed",
                confirmed,
                actors.baker_id,
            ));

            if state == OrderState::Problem {
                history.push(entry(
                    OrderState::Problem,
                    "Can't make it. Did not get any ingredients this week",
                    at(due_date, rng.random_range(4..8), 0),
                    actors.baker_id,
                ));
            } else if state != OrderState::Confirmed {
                let minute = if rng.random_bool(0.5) { 0 } else { 30 };
                let ready = at(due_date, rng.random_range(8..10), minute);
                history.push(entry(
                    OrderState::Ready,
                    "Order ready for pickup",
                    ready,
                    actors.baker_id,
                ));

                if state == OrderState::Delivered {
                    let handed_over = due_date.and_time(due_time)
                        - TimeDelta::minutes(rng.random_range(0..120));
                    history.push(entry(
                        OrderState::Delivered,
                        "Order delivered",
                        handed_over.max(ready),
                        actors.baker_id,
                    ));
                }
            }
        }
    }

    history
}
