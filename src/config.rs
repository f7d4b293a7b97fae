//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// HTTP listen port.
    #[serde(default = "default_port")]
    pub port: u16,

    // === Auth Collaborator ===
    /// API key required in the `x-api-key` header on `/api/*` routes.
    /// Auth is disabled entirely when unset.
    #[serde(default)]
    pub api_key: Option<String>,

    // === Store ===
    /// Seed the store with the three sample products on startup.
    #[serde(default = "default_true")]
    pub seed_data: bool,
}

fn default_port() -> u16 {
    3000
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(key) = &self.api_key {
            if key.trim().is_empty() {
                return Err("API_KEY must not be blank when set".to_string());
            }
        }

        Ok(())
    }

    /// Check if the auth collaborator is enabled.
    pub fn auth_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            api_key: None,
            seed_data: default_true(),
        }
    }
}
