use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_UPLOAD_MAX_FILE_SIZE_MB: u64 = 10;

/// Upload storage settings shared with the request handlers.
#[derive(Clone)]
pub struct UploadConfig {
    /// Directory uploaded files are written to; served under `/uploads`.
    pub dir: PathBuf,
    /// Hard ceiling for a single uploaded file.
    pub max_bytes: u64,
}

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub upload: UploadConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let upload_dir =
            std::env::var("UPLOAD_DIR").unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string());

        let max_file_size_mb = match std::env::var("UPLOAD_MAX_FILE_SIZE_MB") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "UPLOAD_MAX_FILE_SIZE_MB".to_string(),
                value: raw.clone(),
            })?,
            Err(_) => DEFAULT_UPLOAD_MAX_FILE_SIZE_MB,
        };

        Ok(Self {
            database_url,
            bind_addr,
            upload: UploadConfig {
                dir: PathBuf::from(upload_dir),
                max_bytes: max_file_size_mb * 1024 * 1024,
            },
        })
    }
}
