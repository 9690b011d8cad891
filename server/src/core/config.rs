use crate::auth::JwtConfig;
use std::path::PathBuf;

/// Server configuration
///
/// Every item can be overridden through environment variables:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | /var/lib/dive/server | Working directory (database, logs) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | TEXT_API_URL | http://localhost:8089/generate | Text generation endpoint |
/// | TEXT_API_KEY | (empty) | Bearer token for the text endpoint |
/// | TEXT_MAX_TOKENS | 200 | Token cap per assistant reply |
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding the database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// JWT settings
    pub jwt: JwtConfig,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Text generation service endpoint
    pub text_api_url: String,
    /// Bearer token for the text generation service, empty disables auth
    pub text_api_key: String,
    /// Token cap for assistant replies
    pub text_max_tokens: u32,
}

impl Config {
    /// Load configuration from the environment, with defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/dive/server".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            text_api_url: std::env::var("TEXT_API_URL")
                .unwrap_or_else(|_| "http://localhost:8089/generate".into()),
            text_api_key: std::env::var("TEXT_API_KEY").unwrap_or_default(),
            text_max_tokens: std::env::var("TEXT_MAX_TOKENS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(200),
        }
    }

    /// Override the paths and port, used by tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Database directory under the working directory
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("db")
    }

    /// Log directory under the working directory
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// Create the working directory layout if missing
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.log_dir())?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
