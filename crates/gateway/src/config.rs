//! Gateway configuration.

use std::env;

use domain::{HELLO_WORLD_MESSAGE, SAY_HELLO_MESSAGE};

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Greeting served on `/hello-world`
    pub hello_world_message: String,
    /// Greeting served on `/api/v1/hello`
    pub say_hello_message: String,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("GATEWAY_HOST").unwrap_or(defaults.host),
            port: env::var("GATEWAY_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            hello_world_message: env::var("HELLO_WORLD_MESSAGE")
                .unwrap_or(defaults.hello_world_message),
            say_hello_message: env::var("SAY_HELLO_MESSAGE")
                .unwrap_or(defaults.say_hello_message),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            hello_world_message: HELLO_WORLD_MESSAGE.to_string(),
            say_hello_message: SAY_HELLO_MESSAGE.to_string(),
        }
    }
}
