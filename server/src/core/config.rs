//! Server Configuration
//!
//! All settings can be overridden through environment variables:
//!
//! | 环境变量 | 默认值 | 说明 |
//! |----------|--------|------|
//! | WORK_DIR | ./data | 工作目录 (database, blobs, logs) |
//! | HTTP_PORT | 3000 | HTTP 服务端口 |
//! | ENVIRONMENT | development | development \| staging \| production |
//! | ADMIN_USERNAME | admin | 管理员用户名 |
//! | ADMIN_PASSWORD | admin123 | 管理员密码 (生产环境必须覆盖) |
//! | MAX_BODY_BYTES | 52428800 | 请求体上限 (50MB) |

use std::path::PathBuf;

use crate::auth::AdminCredentials;
use crate::utils::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding the database, blob store and logs
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Admin credential pair (injected, never compiled in)
    pub admin: AdminCredentials,
    /// Whole-request body ceiling, enforced at the transport boundary
    pub max_body_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables, using defaults for
    /// anything unset
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            admin: AdminCredentials::from_env(),
            max_body_bytes: std::env::var("MAX_BODY_BYTES")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(50 * 1024 * 1024),
        }
    }

    /// Override work dir and port, keeping everything else from the
    /// environment. Used by tests.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Reject configurations that must not reach production, in particular
    /// the out-of-box credential pair
    pub fn validate(&self) -> Result<(), AppError> {
        if self.is_production() && self.admin.is_default() {
            return Err(AppError::invalid(
                "ADMIN_PASSWORD still has its default value; refusing to start in production",
            ));
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    pub fn blobs_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("blobs")
    }

    pub fn logs_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// Ensure the work directory layout exists
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.blobs_dir())?;
        std::fs::create_dir_all(self.logs_dir())?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
