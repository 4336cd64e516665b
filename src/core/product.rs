//! Product business logic - Catalog management.
//!
//! Products are referenced by order items, so they are never deleted here.
//! Prices are integer cents and must be positive.

use crate::{
    entities::{Product, product},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, prelude::*};

/// Retrieves all products ordered alphabetically by name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_products<C>(db: &C) -> Result<Vec<product::Model>>
where
    C: ConnectionTrait,
{
    Product::find()
        .order_by_asc(product::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific product by its unique ID.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_product_by_id<C>(db: &C, product_id: i64) -> Result<Option<product::Model>>
where
    C: ConnectionTrait,
{
    Product::find_by_id(product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Counts all products.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn count_products<C>(db: &C) -> Result<u64>
where
    C: ConnectionTrait,
{
    Product::find().count(db).await.map_err(Into::into)
}

/// Creates a new product, performing input validation.
///
/// The name is trimmed before it is stored.
///
/// # Errors
/// Returns an error if:
/// - The product name is empty or whitespace-only
/// - The price is zero or negative
/// - A product with the same name already exists or the insert fails
pub async fn create_product<C>(db: &C, name: &str, price: i32) -> Result<product::Model>
where
    C: ConnectionTrait,
{
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::validation("Product name cannot be empty"));
    }
    if price <= 0 {
        return Err(Error::InvalidPrice { price });
    }

    let product = product::ActiveModel {
        name: Set(name.to_string()),
        price: Set(price),
        ..Default::default()
    };
    product.insert(db).await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_product_validation() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_product(&db, "", 100).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        let result = create_product(&db, "   ", 100).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        let result = create_product(&db, "Bun", 0).await;
        assert!(matches!(result.unwrap_err(), Error::InvalidPrice { price: 0 }));

        let result = create_product(&db, "Bun", -5).await;
        assert!(matches!(result.unwrap_err(), Error::InvalidPrice { price: -5 }));
        assert_eq!(count_products(&db).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_integration() -> Result<()> {
        let db = setup_test_db().await?;

        let product = create_product(&db, "  Blueberry Muffin ", 350).await?;
        assert_eq!(product.name, "Blueberry Muffin");
        assert_eq!(product.price, 350);

        let by_id = get_product_by_id(&db, product.id).await?;
        assert_eq!(by_id.unwrap(), product);
        assert!(get_product_by_id(&db, product.id + 1).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_product_names_are_unique() -> Result<()> {
        let db = setup_test_db().await?;

        create_product(&db, "Vanilla Bun", 200).await?;
        let result = create_product(&db, "Vanilla Bun", 300).await;
        assert!(matches!(result.unwrap_err(), Error::Database(_)));
        assert_eq!(count_products(&db).await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_list_products_alphabetical() -> Result<()> {
        let db = setup_test_db().await?;

        let tart = create_product(&db, "Raspberry Tart", 900).await?;
        let bagel = create_product(&db, "Chocolate Bagel", 250).await?;

        let products = list_products(&db).await?;
        assert_eq!(products, vec![bagel, tart]);

        Ok(())
    }
}
