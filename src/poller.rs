//! Best-effort refresh of the registered-users list the admin view shows.
//!
//! Cross-tab consistency is not guaranteed: another tab may write the list
//! at any time, and the only way changes surface here is this periodic
//! re-read. Each tick replaces the whole snapshot — last read wins, no
//! merging or conflict resolution.

use std::sync::Arc;
use std::time::Duration;

use gatherly_core::RegisteredUser;
use gatherly_store::{self as store, keys, KvStore};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::debug;

pub struct RegisteredUsersPoller {
    handle: JoinHandle<()>,
    receiver: watch::Receiver<Vec<RegisteredUser>>,
}

impl RegisteredUsersPoller {
    /// Start polling on a fixed period. The task runs until the poller is
    /// dropped.
    pub fn spawn(store: Arc<dyn KvStore>, period: Duration) -> Self {
        let (sender, receiver) = watch::channel(Vec::new());
        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                match store::read_collection::<RegisteredUser>(
                    store.as_ref(),
                    keys::REGISTERED_USERS,
                )
                .await
                {
                    Ok(users) => {
                        // full replacement; a concurrent writer's update is
                        // simply picked up on the next tick
                        let _ = sender.send(users);
                    }
                    Err(err) => {
                        debug!(error = %err, "registered-users poll failed, keeping last snapshot");
                    }
                }
            }
        });
        Self { handle, receiver }
    }

    /// Subscribe to snapshot replacements.
    pub fn subscribe(&self) -> watch::Receiver<Vec<RegisteredUser>> {
        self.receiver.clone()
    }

    /// The most recent snapshot.
    pub fn latest(&self) -> Vec<RegisteredUser> {
        self.receiver.borrow().clone()
    }
}

impl Drop for RegisteredUsersPoller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
