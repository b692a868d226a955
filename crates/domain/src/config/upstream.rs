use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Resolver address as `host:port` (e.g. "8.8.8.8:53").
    #[serde(default = "default_resolver")]
    pub resolver: String,

    /// Write and read deadline for one upstream round-trip.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl UpstreamConfig {
    pub fn resolver_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.resolver.parse().map_err(|_| {
            ConfigError::Validation(format!("Invalid resolver address '{}'", self.resolver))
        })
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            resolver: default_resolver(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_resolver() -> String {
    "8.8.8.8:53".to_string()
}

fn default_timeout_ms() -> u64 {
    2000
}
