/// User domain types
use super::ids::UserId;
use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Mutable user fields
///
/// Every field is optional. A field that is `None` was not supplied and is
/// omitted from serialized output rather than written as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFields {
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Date of birth, free-form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,

    /// Postal address, free-form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl UserFields {
    /// Overwrite `target` with every field supplied in `self`.
    pub fn apply_to(&self, target: &mut UserFields) {
        if let Some(name) = &self.name {
            target.name = Some(name.clone());
        }
        if let Some(dob) = &self.dob {
            target.dob = Some(dob.clone());
        }
        if let Some(address) = &self.address {
            target.address = Some(address.clone());
        }
        if let Some(description) = &self.description {
            target.description = Some(description.clone());
        }
    }
}

/// Stored user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned identifier
    pub id: UserId,

    /// Supplied fields
    #[serde(flatten)]
    pub fields: UserFields,

    /// Creation timestamp, never changes
    pub created_at: DateTime<Utc>,

    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,

    /// Revision marker, bumped on every update
    pub version: i64,
}

impl User {
    /// Build a fresh record for a store to persist.
    ///
    /// Only repository implementations call this; the service layer never
    /// assigns identifiers or timestamps itself.
    pub fn new_record(fields: UserFields) -> Self {
        let now = current_timestamp();
        Self {
            id: UserId::generate(),
            fields,
            created_at: now,
            updated_at: now,
            version: 0,
        }
    }

    /// Apply a partial update and advance `updated_at` and `version`.
    ///
    /// `updated_at` strictly increases even when the clock has not moved
    /// since the previous mutation.
    pub fn apply_update(&mut self, changes: &UserFields) {
        changes.apply_to(&mut self.fields);
        let floor = self.updated_at + Duration::milliseconds(1);
        self.updated_at = current_timestamp().max(floor);
        self.version += 1;
    }
}

/// Store timestamps carry millisecond precision.
fn current_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Result of an update, mirrored from the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateResult {
    /// Records matched by the identifier
    pub n: u64,

    /// Records modified
    #[serde(rename = "nModified")]
    pub n_modified: u64,

    /// Store acknowledgement flag
    pub ok: u8,
}

impl UpdateResult {
    /// One record matched and modified
    pub fn modified() -> Self {
        Self {
            n: 1,
            n_modified: 1,
            ok: 1,
        }
    }

    /// Nothing matched the identifier
    pub fn unmatched() -> Self {
        Self {
            n: 0,
            n_modified: 0,
            ok: 1,
        }
    }
}

/// Result of a delete, mirrored from the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResult {
    /// Records deleted
    pub n: u64,

    /// Store acknowledgement flag
    pub ok: u8,
}

impl DeleteResult {
    /// Report `n` deleted records
    pub fn deleted(n: u64) -> Self {
        Self { n, ok: 1 }
    }
}
