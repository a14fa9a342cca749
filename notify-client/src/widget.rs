//! The notification widget: permission request, one-shot fetch, and the
//! last-message line.

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::notifier::{Notifier, PermissionState};
use notify_core::message::NotificationMessage;
use std::sync::Arc;

/// Title of every displayed notification.
pub const NOTIFICATION_TITLE: &str = "New Notification";

/// Stored and displayed when the fetch fails for any reason.
pub const FETCH_FAILED: &str = "Failed to fetch notification.";

/// Printed when permission is not granted at display time.
pub const PERMISSION_ALERT: &str = "Notification permission not granted.";

pub struct Widget {
    http: reqwest::Client,
    backend_url: String,
    notifier: Arc<dyn Notifier>,
    last_message: Option<String>,
}

impl Widget {
    pub fn new(config: &ClientConfig, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            http: reqwest::Client::new(),
            backend_url: config.backend_url.trim_end_matches('/').to_string(),
            notifier,
            last_message: None,
        }
    }

    /// Ask the platform for notification permission and log the outcome.
    /// The result is logged but not otherwise consumed.
    pub async fn request_permission(&self) -> PermissionState {
        let state = self.notifier.permission().await;
        match state {
            PermissionState::Granted => tracing::info!("Notification permission granted."),
            PermissionState::Denied => tracing::info!("Notification permission denied."),
        }
        state
    }

    /// Fetch the message from the backend and display it.
    ///
    /// On success the message is shown as a desktop notification when
    /// permission is granted, otherwise the alert line goes to stderr.
    /// Any failure collapses into the fixed failure string; there is no
    /// retry, timeout, or cancellation.
    pub async fn fetch_notification(&mut self) -> &str {
        match self.fetch_and_display().await {
            Ok(message) => {
                self.last_message = Some(message);
            }
            Err(e) => {
                tracing::error!("Error fetching notification: {}", e);
                self.last_message = Some(FETCH_FAILED.to_string());
            }
        }
        self.last_message.as_deref().unwrap_or_default()
    }

    /// The last message stored by a fetch, if any.
    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    async fn fetch_and_display(&self) -> Result<String, ClientError> {
        let url = format!("{}/api/notification", self.backend_url);
        let payload: NotificationMessage = self.http.get(&url).send().await?.json().await?;

        if self.notifier.permission().await == PermissionState::Granted {
            self.notifier
                .show(NOTIFICATION_TITLE, &payload.message)
                .await?;
        } else {
            eprintln!("{}", PERMISSION_ALERT);
        }

        Ok(payload.message)
    }
}
