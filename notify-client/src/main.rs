use clap::{Parser, Subcommand};
use notify_client::config::ClientConfig;
use notify_client::notifier::DesktopNotifier;
use notify_client::widget::Widget;
use notify_core::observability::init_tracing;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "notify-client", version, about = "Desktop notification widget")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Request notification permission from the platform
    Permission,
    /// Fetch the message from the backend and display it
    Trigger,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_tracing("info");

    let cli = Cli::parse();

    let config = ClientConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let notifier = Arc::new(DesktopNotifier::new("notify-client"));
    let mut widget = Widget::new(&config, notifier);

    match cli.command {
        Command::Permission => {
            widget.request_permission().await;
        }
        Command::Trigger => {
            let message = widget.fetch_notification().await.to_string();
            println!("Last Notification: {}", message);
        }
    }

    Ok(())
}
