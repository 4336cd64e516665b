use thiserror::Error;

/// Errors produced by the bakery service.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid price: {price} (must be a positive amount of cents)")]
    InvalidPrice { price: i32 },

    #[error("Invalid quantity: {quantity} (must be at least 1)")]
    InvalidQuantity { quantity: i32 },

    #[error("User not found: {email}")]
    UserNotFound { email: String },

    #[error("Product not found: {id}")]
    ProductNotFound { id: i64 },

    #[error("Order not found: {id}")]
    OrderNotFound { id: i64 },

    #[error("Order {order_id} cannot move from {from} to {to}")]
    InvalidTransition {
        order_id: i64,
        from: String,
        to: String,
    },
}

impl Error {
    /// Shorthand for building a [`Error::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
