use anyhow::{anyhow, Context, Result};
use futures_lite::future::block_on;
use headset_notifier::args::HeadsetNotifierArgs;
use headset_notifier::config::Config;
use headset_notifier::logger;
use headset_notifier::notifier::NotifySend;
use headset_notifier::scheduler::Scheduler;
use headset_notifier::service::HeadsetNotifierService;
use headset_notifier::status::HeadsetControl;

fn main() -> Result<()> {
    let args: HeadsetNotifierArgs = argh::from_env();
    logger::init(args.debug)?;
    let config = block_on(Config::load(args.config.as_deref())).inspect_err(|error| {
        tracing::error!(%error, "Failed to load configuration.");
    })?;
    tracing::info!(?config, "Starting.");

    if args.persist {
        let exec_path = std::env::current_exe().context("locating own executable")?;
        let config_path = args
            .config
            .as_deref()
            .map(std::path::absolute)
            .transpose()
            .context("resolving config path")?;
        let status = block_on(
            HeadsetNotifierService::new(&exec_path, config_path.as_deref()).persist(),
        )
        .context("installing systemd user service")?;
        return if status.success() {
            Ok(())
        } else {
            Err(anyhow!("systemctl failed: {status}"))
        };
    }

    let scheduler = Scheduler::new(
        HeadsetControl::new(&config.headsetcontrol_path),
        NotifySend::new(&config.notify_send_path),
        config.check_interval(),
    );
    let outcome = if args.once {
        block_on(scheduler.poll()).map(|_| ())
    } else {
        scheduler.run()
    };
    outcome.inspect_err(|error| tracing::error!(%error, "Stopping."))?;
    Ok(())
}
