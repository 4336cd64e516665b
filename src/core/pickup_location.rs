//! Pickup location business logic.

use crate::{
    entities::{PickupLocation, pickup_location},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, prelude::*};

/// Creates a pickup location with a unique, non-empty name.
///
/// # Errors
/// Returns an error if the name is blank, already used, or the insert fails.
pub async fn create_pickup_location<C>(db: &C, name: &str) -> Result<pickup_location::Model>
where
    C: ConnectionTrait,
{
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::validation("Pickup location name cannot be empty"));
    }

    pickup_location::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Lists all pickup locations ordered by name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_pickup_locations<C>(db: &C) -> Result<Vec<pickup_location::Model>>
where
    C: ConnectionTrait,
{
    PickupLocation::find()
        .order_by_asc(pickup_location::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Counts all pickup locations.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn count_pickup_locations<C>(db: &C) -> Result<u64>
where
    C: ConnectionTrait,
{
    PickupLocation::find().count(db).await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_and_list_pickup_locations() -> Result<()> {
        let db = setup_test_db().await?;

        create_pickup_location(&db, "Store").await?;
        create_pickup_location(&db, "Bakery").await?;

        let names: Vec<_> = list_pickup_locations(&db)
            .await?
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, ["Bakery", "Store"]);
        assert_eq!(count_pickup_locations(&db).await?, 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_blank_and_duplicate_names_rejected() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_pickup_location(&db, " ").await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        create_pickup_location(&db, "Store").await?;
        let result = create_pickup_location(&db, "Store").await;
        assert!(matches!(result.unwrap_err(), Error::Database(_)));

        Ok(())
    }
}
