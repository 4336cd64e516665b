//! User business logic - Staff account creation and lookup.

use crate::{
    core::password,
    entities::{Role, User, user},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, prelude::*};

/// Input for [`create_user`]. The password is given in clear text and hashed
/// before it is stored.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub role: Role,
    pub locked: bool,
}

/// Counts all users. An empty table means the database has never been seeded.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn count_users<C>(db: &C) -> Result<u64>
where
    C: ConnectionTrait,
{
    User::find().count(db).await.map_err(Into::into)
}

/// Creates a new user after validating the input and hashing the password.
///
/// # Errors
/// Returns an error if:
/// - The email is not a plausible address
/// - Either name is empty or whitespace-only
/// - The password is empty
/// - The email is already taken or the insert fails
pub async fn create_user<C>(db: &C, new_user: NewUser) -> Result<user::Model>
where
    C: ConnectionTrait,
{
    let email = new_user.email.trim().to_lowercase();
    if !is_plausible_email(&email) {
        return Err(Error::validation(format!("Invalid email address: {email}")));
    }
    if new_user.first_name.trim().is_empty() || new_user.last_name.trim().is_empty() {
        return Err(Error::validation("First and last name are required"));
    }
    if new_user.password.is_empty() {
        return Err(Error::validation("Password cannot be empty"));
    }

    let user = user::ActiveModel {
        email: Set(email),
        first_name: Set(new_user.first_name.trim().to_string()),
        last_name: Set(new_user.last_name.trim().to_string()),
        password_hash: Set(password::encode(&new_user.password)),
        role: Set(new_user.role),
        locked: Set(new_user.locked),
        ..Default::default()
    };
    user.insert(db).await.map_err(Into::into)
}

/// Finds a user by email, ignoring case.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_user_by_email<C>(db: &C, email: &str) -> Result<Option<user::Model>>
where
    C: ConnectionTrait,
{
    User::find()
        .filter(user::Column::Email.eq(email.trim().to_lowercase()))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a user by its unique ID.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_user_by_id<C>(db: &C, user_id: i64) -> Result<Option<user::Model>>
where
    C: ConnectionTrait,
{
    User::find_by_id(user_id).one(db).await.map_err(Into::into)
}

/// Lists all users ordered by email.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_users<C>(db: &C) -> Result<Vec<user::Model>>
where
    C: ConnectionTrait,
{
    User::find()
        .order_by_asc(user::Column::Email)
        .all(db)
        .await
        .map_err(Into::into)
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.contains('@'),
        None => false,
    }
}
