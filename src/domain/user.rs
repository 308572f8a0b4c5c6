//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::MAX_NAME_LENGTH;

use super::email::EmailAddress;
use super::error::{DomainError, DomainResult};
use super::policy::ActivationPolicy;

/// User domain entity.
///
/// `id` stays `None` until the store assigns one. All mutators refresh
/// `updated_at` and leave the entity untouched on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Option<i64>,
    pub name: String,
    pub email: EmailAddress,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Construct a user, enforcing the name invariant.
    pub fn new(
        id: Option<i64>,
        name: impl Into<String>,
        email: EmailAddress,
        active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let name = name.into();
        validate_name(&name)?;

        Ok(Self {
            id,
            name,
            email,
            active,
            created_at,
            updated_at,
        })
    }

    /// Rename the user. The stored name is trimmed.
    pub fn rename(&mut self, new_name: &str) -> DomainResult<()> {
        validate_name(new_name)?;
        self.name = new_name.trim().to_string();
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Replace the email address.
    pub fn change_email(&mut self, email: EmailAddress) {
        self.email = email;
        self.updated_at = Utc::now();
    }

    /// Activate the user.
    ///
    /// # Errors
    /// Returns `DomainError::AlreadyActive` if the user is active.
    pub fn activate(&mut self) -> DomainResult<()> {
        if !ActivationPolicy::can_activate(self) {
            return Err(DomainError::AlreadyActive);
        }
        self.active = true;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Deactivate the user.
    ///
    /// # Errors
    /// Returns `DomainError::AlreadyInactive` if the user is inactive.
    pub fn deactivate(&mut self) -> DomainResult<()> {
        if !ActivationPolicy::can_deactivate(self) {
            return Err(DomainError::AlreadyInactive);
        }
        self.active = false;
        self.updated_at = Utc::now();
        Ok(())
    }
}

/// Name must be non-empty after trimming and at most 255 characters raw.
fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName("Name cannot be empty".to_string()));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(DomainError::InvalidName(format!(
            "Name cannot exceed {} characters",
            MAX_NAME_LENGTH
        )));
    }
    Ok(())
}

/// User creation input
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// User display name
    pub name: String,
    /// User email address
    pub email: String,
    /// Initial active status
    pub active: bool,
}

/// User update input; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    /// New display name
    pub name: Option<String>,
    /// New email address
    pub email: Option<String>,
    /// New active status
    pub active: Option<bool>,
}

/// User response (safe to return to clients)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = 1)]
    pub id: i64,
    /// User display name
    #[schema(example = "John Doe")]
    pub name: String,
    /// User email address
    #[schema(example = "john.doe@example.com")]
    pub email: String,
    /// Active status
    #[schema(example = true)]
    pub active: bool,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.unwrap_or_default(),
            name: user.name,
            email: user.email.into_string(),
            active: user.active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
