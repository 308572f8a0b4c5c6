//! User service - the application's use cases, one method each.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{CreateUser, EmailAddress, UpdateUser, User, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
///
/// "Not found" is data here, not failure: `get_user` and `update_user`
/// answer `None` and `delete_user` answers `false` for unknown ids.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a user; fails if the email is already taken
    async fn create_user(&self, input: CreateUser) -> AppResult<UserResponse>;

    /// Get a user by id
    async fn get_user(&self, id: i64) -> AppResult<Option<UserResponse>>;

    /// List users in stable id order, applying an offset/limit window
    async fn list_users(&self, skip: u64, limit: u64) -> AppResult<Vec<UserResponse>>;

    /// Update the provided fields of a user
    async fn update_user(&self, id: i64, input: UpdateUser) -> AppResult<Option<UserResponse>>;

    /// Delete a user; returns whether a record existed
    async fn delete_user(&self, id: i64) -> AppResult<bool>;
}

/// Concrete implementation of UserService using the repository port.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, input: CreateUser) -> AppResult<UserResponse> {
        // Check if email already exists
        if self.repo.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::conflict(format!(
                "User with email {}",
                input.email
            )));
        }

        let email = EmailAddress::new(input.email)?;
        let now = Utc::now();
        let user = User::new(None, input.name, email, input.active, now, now)?;

        let created = self.repo.create(user).await?;
        Ok(UserResponse::from(created))
    }

    async fn get_user(&self, id: i64) -> AppResult<Option<UserResponse>> {
        Ok(self.repo.find_by_id(id).await?.map(UserResponse::from))
    }

    async fn list_users(&self, skip: u64, limit: u64) -> AppResult<Vec<UserResponse>> {
        let users = self.repo.list(skip, limit).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    async fn update_user(&self, id: i64, input: UpdateUser) -> AppResult<Option<UserResponse>> {
        let Some(mut user) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };

        if let Some(name) = input.name {
            user.rename(&name)?;
        }

        if let Some(email) = input.email {
            // A hit is only a conflict when another user owns the address;
            // re-submitting the user's own email is allowed.
            let existing = self.repo.find_by_email(&email).await?;
            if existing.is_some_and(|other| other.id != Some(id)) {
                return Err(AppError::conflict(format!("User with email {}", email)));
            }
            user.change_email(EmailAddress::new(email)?);
        }

        if let Some(active) = input.active {
            // Policy-guarded transitions: requesting the current status
            // fails with AlreadyActive/AlreadyInactive.
            if active {
                user.activate()?;
            } else {
                user.deactivate()?;
            }
        }

        let updated = self.repo.update(user).await?;
        Ok(Some(UserResponse::from(updated)))
    }

    async fn delete_user(&self, id: i64) -> AppResult<bool> {
        self.repo.delete(id).await
    }
}
