pub mod args;
pub mod config;
pub mod error;
pub mod logger;
pub mod notifier;
pub mod policy;
pub mod scheduler;
pub mod service;
pub mod status;

pub use error::Error;

const HEADSETCONTROL_PATH: &str = "/usr/local/bin/headsetcontrol";
const NOTIFY_SEND_PATH: &str = "/usr/bin/notify-send";
const CHECK_INTERVAL_SECS: u64 = 300;
const SERVICE_NAME: &str = "headset_notifier.service";
