/// Server configuration
///
/// # Environment variables
///
/// Every setting can be overridden through the environment:
///
/// | Variable | Default | Purpose |
/// |----------|---------|---------|
/// | WORK_DIR | /var/lib/tableside | working directory (db, uploads, carts) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | PUBLIC_BASE_URL | http://localhost:3000 | base URL baked into table QR payloads |
/// | OPENAI_API_URL | https://api.openai.com/v1 | chat-completions endpoint base |
/// | OPENAI_API_KEY | (empty) | API key for description generation |
/// | OPENAI_MODEL | gpt-3.5-turbo | completion model |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/tableside HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding the database, uploads and cart storage
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Base URL used when generating table QR payloads
    pub public_base_url: String,
    /// Chat-completions endpoint base for description generation
    pub openai_api_url: String,
    /// API key for the description endpoint
    pub openai_api_key: String,
    /// Completion model name
    pub openai_model: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/tableside".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            openai_api_url: std::env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".into()),
            openai_api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-3.5-turbo".into()),
        }
    }

    /// Override work dir and port, typically for tests.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Directory for the embedded database files
    pub fn database_dir(&self) -> std::path::PathBuf {
        std::path::PathBuf::from(&self.work_dir).join("database")
    }

    /// Directory for uploaded/materialized images
    pub fn images_dir(&self) -> std::path::PathBuf {
        std::path::PathBuf::from(&self.work_dir).join("uploads/images")
    }

    /// Directory for durable cart storage
    pub fn carts_dir(&self) -> std::path::PathBuf {
        std::path::PathBuf::from(&self.work_dir).join("carts")
    }

    /// Make sure the work directory layout exists.
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.images_dir())?;
        std::fs::create_dir_all(self.carts_dir())?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
