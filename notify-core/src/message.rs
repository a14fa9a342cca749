//! Wire payload shared by the responder and the widget.

use serde::{Deserialize, Serialize};

/// The body of `GET /api/notification`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationMessage {
    pub message: String,
}

/// The one message the backend ever returns.
pub const NOTIFICATION_TEXT: &str = "Hello from the backend! This is your notification.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_the_wire_shape() {
        let json = serde_json::to_string(&NotificationMessage {
            message: "hi".to_string(),
        })
        .expect("serializes");
        assert_eq!(json, r#"{"message":"hi"}"#);
    }
}
