//! Repository layer: async functions over `SeaORM` connections.
//!
//! Every function takes the connection as a generic `ConnectionTrait` (or
//! `TransactionTrait` where it opens its own transaction), so callers can pass
//! either a pooled connection or an open transaction.

pub mod order;
pub mod password;
pub mod pickup_location;
pub mod product;
pub mod user;
