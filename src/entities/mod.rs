//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod customer;
pub mod history_item;
pub mod order;
pub mod order_item;
pub mod pickup_location;
pub mod product;
pub mod types;
pub mod user;

// Re-export specific types to avoid conflicts
pub use customer::{Column as CustomerColumn, Entity as Customer, Model as CustomerModel};
pub use history_item::{
    Column as HistoryItemColumn, Entity as HistoryItem, Model as HistoryItemModel,
};
pub use order::{Column as OrderColumn, Entity as Order, Model as OrderModel};
pub use order_item::{Column as OrderItemColumn, Entity as OrderItem, Model as OrderItemModel};
pub use pickup_location::{
    Column as PickupLocationColumn, Entity as PickupLocation, Model as PickupLocationModel,
};
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
pub use types::{OrderState, Role};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel};
