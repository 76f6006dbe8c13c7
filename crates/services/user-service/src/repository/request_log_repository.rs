//! Request log repository: hello request logs and access logs.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set,
};

use super::entities::{access_log, hello_request_log};
use common::{AppError, AppResult};
use domain::{HelloRequestLog, NewHelloRequestLog};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Request log repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RequestLogRepository: Send + Sync {
    /// Append a hello request log row
    async fn record_hello(&self, entry: NewHelloRequestLog) -> AppResult<HelloRequestLog>;

    /// Delete every hello request log row of a user, returning the count
    async fn delete_hello_logs_for_user(&self, user_id: i32) -> AppResult<u64>;

    /// Delete every access log row of a user, returning the count
    async fn delete_access_logs_for_user(&self, user_id: i32) -> AppResult<u64>;
}

/// SeaORM-backed implementation of RequestLogRepository
pub struct RequestLogStore {
    db: DatabaseConnection,
}

impl RequestLogStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RequestLogRepository for RequestLogStore {
    async fn record_hello(&self, entry: NewHelloRequestLog) -> AppResult<HelloRequestLog> {
        let active_model = hello_request_log::ActiveModel {
            id: NotSet,
            user_id: Set(entry.user_id),
            user_agent: Set(entry.user_agent),
            ip_address: Set(entry.ip_address),
            timestamp: Set(entry.timestamp),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(HelloRequestLog::from(model))
    }

    async fn delete_hello_logs_for_user(&self, user_id: i32) -> AppResult<u64> {
        let result = hello_request_log::Entity::delete_many()
            .filter(hello_request_log::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected)
    }

    async fn delete_access_logs_for_user(&self, user_id: i32) -> AppResult<u64> {
        let result = access_log::Entity::delete_many()
            .filter(access_log::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected)
    }
}
