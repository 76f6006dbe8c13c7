//! Application state for dependency injection.

use std::sync::Arc;

use user_service_lib::infra::Database;
use user_service_lib::service::{HelloService, UserService};
use user_service_lib::Services;

use crate::config::GatewayConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserService>,
    /// Backs `/hello-world`
    pub hello_world: Arc<HelloService>,
    /// Backs `/api/v1/hello`
    pub say_hello: Arc<HelloService>,
    pub database: Database,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        users: Arc<dyn UserService>,
        hello_world: Arc<HelloService>,
        say_hello: Arc<HelloService>,
        database: Database,
    ) -> Self {
        Self {
            users,
            hello_world,
            say_hello,
            database,
        }
    }

    /// Wire the services over an open database.
    pub fn from_database(database: Database, config: &GatewayConfig) -> Self {
        let services = Services::new(database.get_connection());
        Self::new(
            services.users.clone(),
            Arc::new(services.hello(config.hello_world_message.clone())),
            Arc::new(services.hello(config.say_hello_message.clone())),
            database,
        )
    }
}
