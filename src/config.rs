//! Runtime configuration.
//!
//! Defaults match a stock install of `headsetcontrol` and `notify-send`. A TOML
//! file passed with `--config` may override any of them.

use serde::Deserialize;
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{Error, CHECK_INTERVAL_SECS, HEADSETCONTROL_PATH, NOTIFY_SEND_PATH};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub headsetcontrol_path: PathBuf,
    pub notify_send_path: PathBuf,
    pub check_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            headsetcontrol_path: HEADSETCONTROL_PATH.into(),
            notify_send_path: NOTIFY_SEND_PATH.into(),
            check_interval_secs: CHECK_INTERVAL_SECS,
        }
    }
}

impl Config {
    pub async fn load(path: Option<&Path>) -> Result<Config, Error> {
        let Some(path) = path else {
            return Ok(Config::default());
        };
        let contents =
            async_fs::read_to_string(path)
                .await
                .map_err(|source| Error::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                })?;
        Self::parse(path, &contents)
    }

    fn parse(path: &Path, contents: &str) -> Result<Config, Error> {
        let config: Config = toml::from_str(contents).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        if config.check_interval_secs == 0 {
            return Err(Error::InvalidInterval);
        }
        Ok(config)
    }

    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_secs)
    }
}
