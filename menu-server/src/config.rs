//! Menu server configuration

/// Menu server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL
    pub database_url: String,
    /// HTTP port of the catalog API
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// Default log level when RUST_LOG is unset
    pub log_level: String,
    /// Connection pool size
    pub db_max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:menu.db".into(),
            http_port: 3000,
            environment: "development".into(),
            log_level: "info".into(),
            db_max_connections: 5,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let var = |name: &str| var(name).filter(|v| !v.is_empty());

        Self {
            database_url: var("DATABASE_URL").unwrap_or(defaults.database_url),
            http_port: var("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.http_port),
            environment: var("ENVIRONMENT").unwrap_or(defaults.environment),
            log_level: var("LOG_LEVEL").unwrap_or(defaults.log_level),
            db_max_connections: var("DB_MAX_CONNECTIONS")
                .and_then(|n| n.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.db_max_connections),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
