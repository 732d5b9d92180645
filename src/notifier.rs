use askama::Template;
use async_process::Command;
use std::{future::Future, path::PathBuf};

const TITLE: &str = "Battery Level";
// Seconds. Without it some desktops never dismiss the notification.
const DISPLAY_TIMEOUT: &str = "5";

#[derive(Template)]
#[template(source = "The headset battery level is at: {{ level }}%", ext = "txt")]
pub struct LowBatteryMessage {
    pub level: i32,
}

pub trait Alert {
    /// Best effort; failures are logged and dropped.
    fn send(&self, level: i32) -> impl Future<Output = ()>;
}

pub struct NotifySend {
    path: PathBuf,
}

impl NotifySend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Alert for NotifySend {
    async fn send(&self, level: i32) {
        let message = match (LowBatteryMessage { level }).render() {
            Ok(message) => message,
            Err(error) => {
                tracing::warn!(?error, level, "Failed to render notification message.");
                return;
            }
        };
        match Command::new(&self.path)
            .args(["-t", DISPLAY_TIMEOUT, TITLE, &message])
            .status()
            .await
        {
            Ok(status) if status.success() => {
                tracing::info!(level, "Low battery notification sent.");
            }
            Ok(status) => {
                tracing::warn!(?status, path = ?self.path, "notify-send failed.");
            }
            Err(error) => {
                tracing::warn!(?error, path = ?self.path, "Failed to spawn notify-send.");
            }
        }
    }
}
