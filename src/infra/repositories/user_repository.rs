//! User repository port and its SeaORM adapter.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, QuerySelect, Set, SqlErr,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// The storage backend owns id assignment and enforces email uniqueness
/// as the authoritative backstop for the caller's duplicate check.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user and return the stored row with its assigned id
    async fn create(&self, user: User) -> AppResult<User>;

    /// Find user by id
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List users in id order, applying an offset/limit window
    async fn list(&self, skip: u64, limit: u64) -> AppResult<Vec<User>>;

    /// Overwrite the mutable fields of an existing user
    async fn update(&self, user: User) -> AppResult<User>;

    /// Remove a user; returns whether a row existed
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// Concrete implementation of UserRepository backed by SeaORM.
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, user: User) -> AppResult<User> {
        let email = user.email.as_str().to_string();
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(user.name),
            email: Set(user.email.into_string()),
            active: Set(user.active),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|err| unique_email_conflict(err, &email))?;

        to_domain(model)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(to_domain).transpose()
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(to_domain).transpose()
    }

    async fn list(&self, skip: u64, limit: u64) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        models.into_iter().map(to_domain).collect()
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let id = user.id.ok_or(AppError::NotFound)?;

        let existing = UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let email = user.email.as_str().to_string();
        let mut active: ActiveModel = existing.into();
        active.name = Set(user.name);
        active.email = Set(user.email.into_string());
        active.active = Set(user.active);
        active.updated_at = Set(user.updated_at);

        let model = active
            .update(&self.db)
            .await
            .map_err(|err| unique_email_conflict(err, &email))?;

        to_domain(model)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}

/// Map a unique-index violation on email to the same conflict error the
/// use case raises after its own duplicate check.
fn unique_email_conflict(err: DbErr, email: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::conflict(format!("User with email {}", email))
        }
        _ => AppError::from(err),
    }
}

/// Convert database model to domain entity.
fn to_domain(model: user::Model) -> AppResult<User> {
    User::try_from(model)
        .map_err(|e| AppError::internal(format!("Stored user violates domain invariants: {}", e)))
}
