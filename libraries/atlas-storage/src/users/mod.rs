//! User record queries

use crate::error::{Result, StorageError};
use atlas_core::types::{DeleteResult, UpdateResult, User, UserFields, UserId};
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Get all users in insertion order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query(
        "SELECT id, name, dob, address, description, created_at, updated_at, version
         FROM users ORDER BY seq",
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(row_to_user).collect()
}

/// Get a user by ID
pub async fn get_by_id(pool: &SqlitePool, id: &UserId) -> Result<Option<User>> {
    let row = sqlx::query(
        "SELECT id, name, dob, address, description, created_at, updated_at, version
         FROM users WHERE id = ?",
    )
    .bind(id.to_string())
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(row_to_user).transpose()
}

/// Insert a new user holding exactly the supplied fields
pub async fn create(pool: &SqlitePool, fields: UserFields) -> Result<User> {
    let user = User::new_record(fields);

    sqlx::query(
        "INSERT INTO users (id, name, dob, address, description, created_at, updated_at, version)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(user.id.to_string())
    .bind(user.fields.name.as_deref())
    .bind(user.fields.dob.as_deref())
    .bind(user.fields.address.as_deref())
    .bind(user.fields.description.as_deref())
    .bind(user.created_at.timestamp_millis())
    .bind(user.updated_at.timestamp_millis())
    .bind(user.version)
    .execute(pool)
    .await?;

    tracing::debug!(user_id = %user.id, "Inserted user");

    Ok(user)
}

/// Overwrite the supplied fields of a user
///
/// A single statement merges the fields, bumps the version and floors
/// `updated_at` one millisecond past the stored value, so concurrent writers
/// never upgrade a stale read snapshot.
pub async fn update(pool: &SqlitePool, id: &UserId, fields: &UserFields) -> Result<UpdateResult> {
    let row = sqlx::query(
        "UPDATE users
         SET name = COALESCE(?, name),
             dob = COALESCE(?, dob),
             address = COALESCE(?, address),
             description = COALESCE(?, description),
             updated_at = MAX(?, updated_at + 1),
             version = version + 1
         WHERE id = ?
         RETURNING version",
    )
    .bind(fields.name.as_deref())
    .bind(fields.dob.as_deref())
    .bind(fields.address.as_deref())
    .bind(fields.description.as_deref())
    .bind(Utc::now().timestamp_millis())
    .bind(id.to_string())
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(UpdateResult::unmatched());
    };

    let version: i64 = row.try_get("version")?;
    tracing::debug!(user_id = %id, version, "Updated user");

    Ok(UpdateResult::modified())
}

/// Delete a user
pub async fn delete(pool: &SqlitePool, id: &UserId) -> Result<DeleteResult> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id.to_string())
        .execute(pool)
        .await?;

    Ok(DeleteResult::deleted(result.rows_affected()))
}

fn row_to_user(row: &SqliteRow) -> Result<User> {
    let id: String = row.try_get("id")?;
    let id = id
        .parse::<UserId>()
        .map_err(|e| StorageError::corrupt(e.to_string()))?;

    Ok(User {
        id,
        fields: UserFields {
            name: row.try_get("name")?,
            dob: row.try_get("dob")?,
            address: row.try_get("address")?,
            description: row.try_get("description")?,
        },
        created_at: from_millis(row.try_get("created_at")?)?,
        updated_at: from_millis(row.try_get("updated_at")?)?,
        version: row.try_get("version")?,
    })
}

fn from_millis(millis: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| StorageError::corrupt(format!("timestamp out of range: {millis}")))
}
