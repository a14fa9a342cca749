//! HTTP handlers for notify-server.

pub mod health;
pub mod notification;

pub use health::health_check;
pub use notification::get_notification;
