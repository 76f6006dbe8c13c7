//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{User, UserRole, USER_NOT_FOUND_MESSAGE};

use crate::repository::{RequestLogRepository, UserRepository};

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a user whose email is `username` and whose role is `User`.
    ///
    /// `password` is accepted for compatibility with existing clients and is
    /// neither validated nor stored.
    async fn create_user(&self, username: String, password: Option<String>) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// Update the supplied fields of a user.
    ///
    /// `role` must be exactly `"Admin"` or `"User"`; it is checked before the
    /// store is touched. Empty strings count as not supplied.
    async fn update_user(
        &self,
        id: i32,
        email: Option<String>,
        role: Option<String>,
    ) -> AppResult<User>;

    /// Delete a user together with its hello request logs and access logs.
    async fn delete_user(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserService using repositories.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
    logs: Arc<dyn RequestLogRepository>,
}

impl UserManager {
    /// Create new user service instance with repositories
    pub fn new(users: Arc<dyn UserRepository>, logs: Arc<dyn RequestLogRepository>) -> Self {
        Self { users, logs }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, username: String, _password: Option<String>) -> AppResult<User> {
        let user = self.users.create(username, UserRole::User).await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_not_found(USER_NOT_FOUND_MESSAGE)
    }

    async fn update_user(
        &self,
        id: i32,
        email: Option<String>,
        role: Option<String>,
    ) -> AppResult<User> {
        let role = role
            .filter(|r| !r.is_empty())
            .map(|r| r.parse::<UserRole>())
            .transpose()?;
        let email = email.filter(|e| !e.is_empty());

        // The store reports a missing user itself
        self.users.update(id, email, role).await
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_not_found(USER_NOT_FOUND_MESSAGE)?;

        // Logs reference the user by foreign key and must go first. The three
        // deletes are not atomic: a failure part-way leaves the user in place
        // with some of its logs already removed.
        let hello_logs = self.logs.delete_hello_logs_for_user(id).await?;
        let access_logs = self.logs.delete_access_logs_for_user(id).await?;
        self.users.delete(id).await?;

        tracing::info!(user_id = id, hello_logs, access_logs, "User deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use common::AppError;
    use mockall::predicate::eq;
    use mockall::Sequence;

    use crate::repository::{MockRequestLogRepository, MockUserRepository};

    fn test_user(id: i32, email: &str, role: UserRole) -> User {
        User {
            id,
            email: email.to_string(),
            role,
        }
    }

    fn service(users: MockUserRepository, logs: MockRequestLogRepository) -> UserManager {
        UserManager::new(Arc::new(users), Arc::new(logs))
    }

    #[tokio::test]
    async fn test_create_user_ignores_password() {
        for password in [Some("pw".to_string()), Some(String::new()), None] {
            let mut users = MockUserRepository::new();
            users
                .expect_create()
                .with(eq("alice".to_string()), eq(UserRole::User))
                .times(1)
                .returning(|email, role| Ok(test_user(1, &email, role)));

            let user = service(users, MockRequestLogRepository::new())
                .create_user("alice".to_string(), password)
                .await
                .unwrap();

            assert_eq!(user.email, "alice");
            assert_eq!(user.role, UserRole::User);
        }
    }

    #[tokio::test]
    async fn test_create_user_conflict_propagates() {
        let mut users = MockUserRepository::new();
        users
            .expect_create()
            .returning(|_, _| Err(AppError::conflict("Email")));

        let result = service(users, MockRequestLogRepository::new())
            .create_user("alice".to_string(), None)
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().with(eq(42)).returning(|_| Ok(None));

        let err = service(users, MockRequestLogRepository::new())
            .get_user(42)
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "User not found");
    }

    #[tokio::test]
    async fn test_update_rejects_unknown_role_before_store_access() {
        // No expectations: any repository call would panic.
        let users = MockUserRepository::new();

        let err = service(users, MockRequestLogRepository::new())
            .update_user(1, Some("new@example.com".to_string()), Some("Moderator".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidArgument(_)));
        assert_eq!(
            err.to_string(),
            r#"Invalid role. Allowed values are "Admin" and "User"."#
        );
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().never();
        users
            .expect_update()
            .with(eq(7), eq(None), eq(Some(UserRole::Admin)))
            .times(1)
            .returning(|id, _, _| {
                Err(AppError::not_found(format!("User with ID {} does not exist.", id)))
            });

        let err = service(users, MockRequestLogRepository::new())
            .update_user(7, None, Some("Admin".to_string()))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "User with ID 7 does not exist.");
    }

    #[tokio::test]
    async fn test_update_passes_only_supplied_fields() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().never();
        users
            .expect_update()
            .with(eq(1), eq(None), eq(Some(UserRole::Admin)))
            .times(1)
            .returning(|id, _, role| Ok(test_user(id, "alice", role.unwrap_or(UserRole::User))));

        let user = service(users, MockRequestLogRepository::new())
            .update_user(1, Some(String::new()), Some("Admin".to_string()))
            .await
            .unwrap();

        assert_eq!(user.email, "alice");
        assert_eq!(user.role, UserRole::Admin);
    }

    #[tokio::test]
    async fn test_delete_removes_logs_before_user() {
        let mut seq = Sequence::new();
        let mut users = MockUserRepository::new();
        let mut logs = MockRequestLogRepository::new();

        users
            .expect_find_by_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|id| Ok(Some(test_user(id, "alice", UserRole::User))));
        logs.expect_delete_hello_logs_for_user()
            .with(eq(3))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(2));
        logs.expect_delete_access_logs_for_user()
            .with(eq(3))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(1));
        users
            .expect_delete()
            .with(eq(3))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        service(users, logs).delete_user(3).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_missing_user_leaves_logs_alone() {
        let mut users = MockUserRepository::new();
        let mut logs = MockRequestLogRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));
        users.expect_delete().never();
        logs.expect_delete_hello_logs_for_user().never();
        logs.expect_delete_access_logs_for_user().never();

        let err = service(users, logs).delete_user(9).await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "User not found");
    }
}
