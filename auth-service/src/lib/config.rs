use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub directory: DirectoryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    /// Base64-encoded symmetric signing secret
    pub secret_key: String,
    /// Access-token lifetime in milliseconds
    pub expiration_ms: i64,
    pub refresh_token: RefreshTokenConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RefreshTokenConfig {
    /// Refresh-token lifetime in milliseconds
    pub expiration_ms: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DirectoryConfig {
    /// Principals known to the in-memory identity directory
    pub identities: Vec<String>,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (SERVER__HTTP_PORT, JWT__SECRET_KEY, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: JWT__SECRET_KEY=... overrides jwt.secret_key
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }
}
