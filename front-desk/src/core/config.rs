use std::path::PathBuf;

/// Front-desk server configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment (or a `.env` file):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | working directory |
/// | LEDGER_DB | front-desk.redb | ledger database file inside WORK_DIR |
/// | HTTP_PORT | 3000 | HTTP port |
/// | LOG_LEVEL | info | tracing level |
/// | LOG_DIR | (unset) | rolling log directory, console only when unset |
/// | SEED_ROOMS | true | seed the standard inventory on an empty ledger |
/// | ENVIRONMENT | development | runtime environment |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/srv/front-desk HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory, holds the ledger database
    pub work_dir: String,
    /// Ledger database file name, relative to `work_dir`
    pub ledger_db: String,
    /// HTTP API port
    pub http_port: u16,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// Seed the 24-room standard inventory when the ledger has no rooms
    pub seed_rooms: bool,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            ledger_db: std::env::var("LEDGER_DB").unwrap_or_else(|_| "front-desk.redb".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            seed_rooms: std::env::var("SEED_ROOMS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the working directory and port
    ///
    /// Used by tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Full path of the ledger database
    pub fn ledger_db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(&self.ledger_db)
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
