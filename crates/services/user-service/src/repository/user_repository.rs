//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, Set, SqlErr,
};

use super::entities::user::{ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::{User, UserRole};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by primary key
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Insert a new user; a duplicate email is a `Conflict`
    async fn create(&self, email: String, role: UserRole) -> AppResult<User>;

    /// Overwrite only the supplied fields
    async fn update(&self, id: i32, email: Option<String>, role: Option<UserRole>)
        -> AppResult<User>;

    /// Delete user row by ID
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// SeaORM-backed implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Email is the only unique column, so any unique violation is a duplicate email.
fn map_write_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("Email"),
        _ => AppError::from(err),
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn create(&self, email: String, role: UserRole) -> AppResult<User> {
        let active_model = ActiveModel {
            id: NotSet,
            email: Set(email),
            role: Set(role.into()),
        };

        let model = active_model.insert(&self.db).await.map_err(map_write_error)?;
        Ok(User::from(model))
    }

    async fn update(
        &self,
        id: i32,
        email: Option<String>,
        role: Option<UserRole>,
    ) -> AppResult<User> {
        let user = UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User with ID {} does not exist.", id)))?;

        if email.is_none() && role.is_none() {
            return Ok(User::from(user));
        }

        let mut active: ActiveModel = user.into();

        if let Some(email) = email {
            active.email = Set(email);
        }
        if let Some(role) = role {
            active.role = Set(role.into());
        }

        let model = active.update(&self.db).await.map_err(map_write_error)?;
        Ok(User::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(domain::USER_NOT_FOUND_MESSAGE));
        }

        Ok(())
    }
}
