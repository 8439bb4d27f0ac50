use std::env;

/// Database name used when DATABASE_NAME is not set.
pub const DEFAULT_DATABASE_NAME: &str = "lycee";

#[derive(Debug, Clone)]
pub struct Config {
    /// Document store connection string. Optional: without it the process
    /// still starts and storage-backed endpoints fail per-request.
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL").ok().filter(|s| !s.is_empty()),
            database_name: env::var("DATABASE_NAME").ok().filter(|s| !s.is_empty()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".into())
                .parse()?,
        })
    }
}
