//! Server configuration
//!
//! All settings come from environment variables with sensible
//! development defaults.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | WORK_DIR | ./data | Working directory for the database, images and logs |
//! | HTTP_PORT | 3000 | HTTP listen port |
//! | TIMEZONE | Europe/Madrid | Business timezone for calendar comparisons |
//! | ENVIRONMENT | development | development / staging / production |
//! | LOG_DIR | (unset) | When set, daily-rotated log files land here |

use std::path::PathBuf;

use chrono_tz::Tz;

use crate::auth::JwtConfig;

#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding the database, uploaded images and logs
    pub work_dir: String,
    pub http_port: u16,
    /// All "today" comparisons use this timezone's calendar day
    pub timezone: Tz,
    pub jwt: JwtConfig,
    /// development | staging | production
    pub environment: String,
    /// Optional directory for rotated log files
    pub log_dir: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let timezone = std::env::var("TIMEZONE")
            .ok()
            .and_then(|tz| match tz.parse::<Tz>() {
                Ok(tz) => Some(tz),
                Err(_) => {
                    tracing::warn!(timezone = %tz, "Unknown TIMEZONE, falling back to Europe/Madrid");
                    None
                }
            })
            .unwrap_or(chrono_tz::Europe::Madrid);

        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            timezone,
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Overrides for tests: throwaway work dir and ephemeral port.
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

    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("veranda.db")
    }

    pub fn images_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("images")
    }

    /// Creates the working directory tree if missing.
    pub fn ensure_work_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.work_dir)?;
        std::fs::create_dir_all(self.images_dir())?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
