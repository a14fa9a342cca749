use axum::Json;
use notify_core::message::{NotificationMessage, NOTIFICATION_TEXT};

/// The one route of the responder. Returns the fixed message on every
/// call, regardless of query parameters; there is no state to consult.
pub async fn get_notification() -> Json<NotificationMessage> {
    Json(NotificationMessage {
        message: NOTIFICATION_TEXT.to_string(),
    })
}
