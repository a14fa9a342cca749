//! Notification delivery seam.
//!
//! `DesktopNotifier` talks to the platform notification service through
//! notify-rust. `MockNotifier` records what would have been shown, for
//! tests and for running without a notification daemon.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::error::ClientError;

/// Outcome of asking the platform whether notifications may be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    Granted,
    Denied,
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Ask the platform for notification permission.
    async fn permission(&self) -> PermissionState;

    /// Display a notification.
    async fn show(&self, summary: &str, body: &str) -> Result<(), ClientError>;
}

/// Notifier backed by the desktop notification service.
pub struct DesktopNotifier {
    app_name: String,
}

impl DesktopNotifier {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

#[async_trait]
impl Notifier for DesktopNotifier {
    async fn permission(&self) -> PermissionState {
        // The desktop has no prompt flow; a reachable notification daemon
        // is the granted state. Asking again never re-prompts.
        let reachable = tokio::task::spawn_blocking(notify_rust::get_server_information)
            .await
            .map(|info| info.is_ok())
            .unwrap_or(false);

        if reachable {
            PermissionState::Granted
        } else {
            PermissionState::Denied
        }
    }

    async fn show(&self, summary: &str, body: &str) -> Result<(), ClientError> {
        let app_name = self.app_name.clone();
        let summary = summary.to_string();
        let body = body.to_string();

        // notify-rust is blocking; keep it off the async runtime.
        tokio::task::spawn_blocking(move || {
            notify_rust::Notification::new()
                .appname(&app_name)
                .summary(&summary)
                .body(&body)
                .show()
                .map(|_| ())
        })
        .await
        .map_err(|e| anyhow::anyhow!("notification task failed: {}", e))??;

        Ok(())
    }
}

/// Records notifications instead of displaying them.
#[derive(Clone)]
pub struct MockNotifier {
    granted: bool,
    shown: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockNotifier {
    pub fn new(granted: bool) -> Self {
        Self {
            granted,
            shown: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// The (summary, body) pairs shown so far.
    pub fn shown(&self) -> Vec<(String, String)> {
        self.shown.lock().expect("notifier mutex poisoned").clone()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn permission(&self) -> PermissionState {
        if self.granted {
            PermissionState::Granted
        } else {
            PermissionState::Denied
        }
    }

    async fn show(&self, summary: &str, body: &str) -> Result<(), ClientError> {
        self.shown
            .lock()
            .expect("notifier mutex poisoned")
            .push((summary.to_string(), body.to_string()));
        Ok(())
    }
}
