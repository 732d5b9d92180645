use argh::FromArgs;
use std::path::PathBuf;

#[derive(FromArgs)]
/// notify when the headset battery runs low
pub struct HeadsetNotifierArgs {
    /// TOML file overriding tool paths and check interval
    #[argh(option, short = 'c')]
    pub config: Option<PathBuf>,

    /// check the battery once and exit
    #[argh(switch)]
    pub once: bool,

    /// install and start as a systemd user service
    #[argh(switch)]
    pub persist: bool,

    /// debug logging
    #[argh(switch, short = 'd')]
    pub debug: bool,
}
