use futures_lite::future::block_on;
use std::{thread, time::Duration};

use crate::{
    notifier::Alert,
    policy,
    status::Fetch,
    Error,
};

pub struct Scheduler<F, A> {
    fetcher: F,
    alert: A,
    interval: Duration,
}

impl<F: Fetch, A: Alert> Scheduler<F, A> {
    pub fn new(fetcher: F, alert: A, interval: Duration) -> Self {
        Self {
            fetcher,
            alert,
            interval,
        }
    }

    /// One fetch/decide/notify cycle. Returns whether a notification was sent.
    pub async fn poll(&self) -> Result<bool, Error> {
        let status = self.fetcher.fetch().await?;
        tracing::debug!(?status, "Fetched battery status.");
        if policy::should_notify(&status) {
            self.alert.send(status.level).await;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Polls forever. Only returns on the first fetch error.
    pub fn run(&self) -> Result<(), Error> {
        loop {
            block_on(self.poll())?;
            thread::sleep(self.interval);
        }
    }
}
