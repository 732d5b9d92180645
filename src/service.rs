use crate::SERVICE_NAME;
use askama::Template;
use async_fs::OpenOptions;
use async_process::{Command, ExitStatus};
use futures_lite::AsyncWriteExt;
use std::{
    io,
    path::{Path, PathBuf},
};

const SYSTEMCTL_PATH: &str = "/usr/bin/systemctl";

#[derive(Template)]
#[template(path = "headset_notifier.service", escape = "none")]
pub struct HeadsetNotifierService<'a> {
    exec_path: &'a Path,
    config_path: Option<&'a Path>,
    targets: &'a [&'a str],
}

impl<'a> HeadsetNotifierService<'a> {
    pub fn new(exec_path: &'a Path, config_path: Option<&'a Path>) -> Self {
        Self {
            exec_path,
            config_path,
            targets: &["graphical-session.target"],
        }
    }

    pub async fn persist(&self) -> io::Result<ExitStatus> {
        let unit_dir = user_unit_dir()?;
        async_fs::create_dir_all(&unit_dir).await?;
        let unit_path = unit_dir.join(SERVICE_NAME);
        save_service(self, &unit_path).await?;
        tracing::info!(path = ?unit_path, "Wrote systemd user unit.");
        let reload = Command::new(SYSTEMCTL_PATH)
            .args(["--user", "daemon-reload"])
            .status()
            .await?;
        if !reload.success() {
            return Ok(reload);
        }
        Command::new(SYSTEMCTL_PATH)
            .args(["--user", "enable", "--now", SERVICE_NAME])
            .status()
            .await
    }
}

fn user_unit_dir() -> io::Result<PathBuf> {
    let home = std::env::var_os("HOME")
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "HOME is not set"))?;
    Ok(PathBuf::from(home).join(".config/systemd/user"))
}

async fn save_service(service: &HeadsetNotifierService<'_>, dest_path: &Path) -> io::Result<()> {
    let rendered = service.render().map_err(io::Error::other)?;
    let mut file_out = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(dest_path)
        .await?;
    file_out.write_all(rendered.as_bytes()).await?;
    file_out.sync_data().await
}
