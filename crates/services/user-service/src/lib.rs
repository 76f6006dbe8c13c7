//! User Service Library
//!
//! User management and hello request logging on top of SeaORM. The HTTP
//! gateway embeds this crate and calls the services directly.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::config::UserServiceConfig;
use crate::infra::Database;
use crate::repository::{RequestLogRepository, RequestLogStore, UserStore};
use crate::service::{HelloService, UserManager, UserService};

/// Services sharing one database connection.
#[derive(Clone)]
pub struct Services {
    pub users: Arc<dyn UserService>,
    pub request_logs: Arc<dyn RequestLogRepository>,
}

impl Services {
    /// Wire repositories and services over a connection.
    pub fn new(connection: DatabaseConnection) -> Self {
        let user_repo = Arc::new(UserStore::new(connection.clone()));
        let request_logs: Arc<dyn RequestLogRepository> =
            Arc::new(RequestLogStore::new(connection));
        let users: Arc<dyn UserService> =
            Arc::new(UserManager::new(user_repo, request_logs.clone()));

        Self {
            users,
            request_logs,
        }
    }

    /// Build a hello service answering with `message`.
    pub fn hello(&self, message: impl Into<String>) -> HelloService {
        HelloService::new(self.request_logs.clone(), message)
    }
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = UserServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    db.close().await?;
    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
