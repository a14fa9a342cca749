use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Notification error: {0}")]
    Notify(#[from] notify_rust::error::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
