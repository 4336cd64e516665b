//! HTTP request handlers.
//!
//! This module contains all HTTP handlers organized by domain.

pub mod catalog;
pub mod health;
pub mod orders;
pub mod users;

pub use health::health_check;
