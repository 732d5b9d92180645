use async_process::Command;
use serde::Deserialize;
use std::{future::Future, path::PathBuf};

use crate::Error;

const AVAILABLE: &str = "BATTERY_AVAILABLE";
const UNAVAILABLE: &str = "BATTERY_UNAVAILABLE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Unavailable,
    Unknown,
}

impl From<&str> for Availability {
    fn from(value: &str) -> Self {
        match value {
            AVAILABLE => Self::Available,
            UNAVAILABLE => Self::Unavailable,
            _ => Self::Unknown,
        }
    }
}

/// Battery reading of the first headset reported by `headsetcontrol`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryStatus {
    /// Percentage as reported. `headsetcontrol` uses -1 when it has no reading.
    pub level: i32,
    pub availability: Availability,
}

#[derive(Deserialize)]
struct Report {
    devices: Vec<Device>,
}

#[derive(Deserialize)]
struct Device {
    battery: Battery,
}

#[derive(Deserialize)]
struct Battery {
    level: i32,
    status: String,
}

/// Parses `headsetcontrol -o JSON` output. Only the first device is read.
pub fn parse(output: &str) -> Result<BatteryStatus, Error> {
    let report: Report = serde_json::from_str(output.trim())
        .map_err(|e| Error::MalformedResponse(e.to_string()))?;
    let device = report
        .devices
        .into_iter()
        .next()
        .ok_or_else(|| Error::MalformedResponse("no devices reported".to_string()))?;
    Ok(BatteryStatus {
        level: device.battery.level,
        availability: device.battery.status.as_str().into(),
    })
}

pub trait Fetch {
    fn fetch(&self) -> impl Future<Output = Result<BatteryStatus, Error>>;
}

pub struct HeadsetControl {
    path: PathBuf,
}

impl HeadsetControl {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Fetch for HeadsetControl {
    async fn fetch(&self) -> Result<BatteryStatus, Error> {
        let output = Command::new(&self.path)
            .args(["-o", "JSON"])
            .output()
            .await
            .map_err(|source| Error::ExternalToolMissing {
                path: self.path.clone(),
                source,
            })?;
        if !output.status.success() {
            tracing::debug!(
                status = ?output.status,
                stderr = %String::from_utf8_lossy(&output.stderr),
                "headsetcontrol exited unsuccessfully"
            );
        }
        parse(&String::from_utf8_lossy(&output.stdout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_lite::future::block_on;

    #[test]
    fn parses_available_battery() {
        let status =
            parse(r#"{"devices":[{"battery":{"level":15,"status":"BATTERY_AVAILABLE"}}]}"#)
                .unwrap();
        assert_eq!(
            BatteryStatus {
                level: 15,
                availability: Availability::Available
            },
            status
        );
    }

    #[test]
    fn parses_unavailable_battery() {
        let status = parse(
            r#"{"devices":[{"battery":{"level":-1,"status":"BATTERY_UNAVAILABLE"}}]}"#,
        )
        .unwrap();
        assert_eq!(Availability::Unavailable, status.availability);
        assert_eq!(-1, status.level);
    }

    #[test]
    fn other_statuses_are_unknown() {
        let status =
            parse(r#"{"devices":[{"battery":{"level":40,"status":"BATTERY_CHARGING"}}]}"#)
                .unwrap();
        assert_eq!(Availability::Unknown, status.availability);
    }

    #[test]
    fn only_first_device_is_read() {
        let output = r#"
            {
              "name": "HeadsetControl",
              "device_count": 2,
              "devices": [
                {"device": "first", "battery": {"level": 80, "status": "BATTERY_AVAILABLE"}},
                {"device": "second", "battery": {"level": 5, "status": "BATTERY_AVAILABLE"}}
              ]
            }
        "#;
        assert_eq!(80, parse(output).unwrap().level);
    }

    #[test]
    fn rejects_non_json() {
        assert!(matches!(
            parse("No supported device found"),
            Err(Error::MalformedResponse(_))
        ));
    }

    #[test]
    fn rejects_empty_device_list() {
        assert!(matches!(
            parse(r#"{"devices":[]}"#),
            Err(Error::MalformedResponse(_))
        ));
    }

    #[test]
    fn rejects_missing_battery_fields() {
        assert!(matches!(
            parse(r#"{"devices":[{"battery":{"level":15}}]}"#),
            Err(Error::MalformedResponse(_))
        ));
        assert!(matches!(
            parse(r#"{"devices":[{"name":"headset"}]}"#),
            Err(Error::MalformedResponse(_))
        ));
    }

    #[test]
    fn missing_executable() {
        let fetcher = HeadsetControl::new("/nonexistent/bin/headsetcontrol");
        match block_on(fetcher.fetch()) {
            Err(Error::ExternalToolMissing { path, .. }) => {
                assert_eq!(PathBuf::from("/nonexistent/bin/headsetcontrol"), path)
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn garbage_output_from_tool() {
        // echo prints its arguments back, which is not JSON.
        let fetcher = HeadsetControl::new("/bin/echo");
        assert!(matches!(
            block_on(fetcher.fetch()),
            Err(Error::MalformedResponse(_))
        ));
    }
}
