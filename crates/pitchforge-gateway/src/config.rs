//! Gateway configuration

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use crate::{DEFAULT_HOST, DEFAULT_PORT};

/// Main gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Directory exported decks are staged in
    pub output_dir: String,

    /// Gemini model used for generation
    pub model: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            output_dir: pitchforge_pptx::DEFAULT_OUTPUT_DIR.to_string(),
            model: pitchforge_core::DEFAULT_MODEL.to_string(),
        }
    }
}

impl GatewayConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, dir: impl Into<String>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the Gemini model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Load configuration from a file
    pub fn from_file(path: &str) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn to_file(&self, path: &str) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply `PITCHFORGE_*` environment overrides.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(host) = std::env::var("PITCHFORGE_HOST") {
            if !host.trim().is_empty() {
                self.host = host;
            }
        }
        if let Ok(port) = std::env::var("PITCHFORGE_PORT") {
            match port.parse() {
                Ok(port) => self.port = port,
                Err(_) => tracing::warn!("Ignoring invalid PITCHFORGE_PORT: {}", port),
            }
        }
        if let Ok(dir) = std::env::var("PITCHFORGE_OUTPUT_DIR") {
            if !dir.trim().is_empty() {
                self.output_dir = dir;
            }
        }
        if let Ok(model) = std::env::var("PITCHFORGE_MODEL") {
            if !model.trim().is_empty() {
                self.model = model;
            }
        }
        self
    }

    /// Default configuration with environment overrides applied.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GatewayConfig::default();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.output_dir, "generated_decks");
        assert!(!config.model.is_empty());
    }

    #[test]
    fn test_config_builder() {
        let config = GatewayConfig::new()
            .with_host("0.0.0.0")
            .with_port(8080)
            .with_output_dir("/tmp/decks")
            .with_model("gemini-2.5-pro");

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.output_dir, "/tmp/decks");
        assert_eq!(config.model, "gemini-2.5-pro");
    }

    #[test]
    fn test_config_serialization() {
        let config = GatewayConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GatewayConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.port, parsed.port);
        assert_eq!(config.model, parsed.model);
    }

    #[test]
    fn test_socket_addr() {
        let config = GatewayConfig::default().with_port(9000);
        assert_eq!(config.socket_addr().port(), 9000);
    }

    #[test]
    fn test_env_overrides() {
        // Single test owns all PITCHFORGE_* vars; tests run in parallel.
        std::env::set_var("PITCHFORGE_HOST", "0.0.0.0");
        std::env::set_var("PITCHFORGE_PORT", "8123");
        std::env::set_var("PITCHFORGE_OUTPUT_DIR", "staging");
        std::env::set_var("PITCHFORGE_MODEL", "gemini-2.5-flash");

        let config = GatewayConfig::from_env();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8123);
        assert_eq!(config.output_dir, "staging");
        assert_eq!(config.model, "gemini-2.5-flash");

        std::env::set_var("PITCHFORGE_PORT", "not-a-port");
        let config = GatewayConfig::from_env();
        assert_eq!(config.port, DEFAULT_PORT);

        std::env::remove_var("PITCHFORGE_HOST");
        std::env::remove_var("PITCHFORGE_PORT");
        std::env::remove_var("PITCHFORGE_OUTPUT_DIR");
        std::env::remove_var("PITCHFORGE_MODEL");
    }
}
