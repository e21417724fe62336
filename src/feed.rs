use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

const CHANNEL_CAPACITY: usize = 64;

/// Notifications for ledgers rewritten by another process sharing the data
/// file. Local writes are not published.
#[derive(Clone)]
pub struct ChangeFeed {
    sender: broadcast::Sender<String>,
}

impl ChangeFeed {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn publish(&self, keys: &[String]) {
        for key in keys {
            // Err only means nobody is listening.
            let receivers = self.sender.send(key.clone()).unwrap_or(0);
            debug!("published external change of {key} to {receivers} listeners");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.sender.subscribe()
    }

    /// Runs `callback` for every external change of `ledger` until the
    /// returned handle is aborted.
    pub fn on_external_change<F>(&self, ledger: &str, mut callback: F) -> JoinHandle<()>
    where
        F: FnMut(&str) + Send + 'static,
    {
        let ledger = ledger.to_string();
        let mut receiver = self.subscribe();
        tokio::spawn(async move {
            loop {
                match receiver.recv().await {
                    Ok(key) if key == ledger => callback(&key),
                    Ok(_) => {}
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!("change listener for {ledger} skipped {skipped} notifications");
                        callback(&ledger);
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[tokio::test]
    async fn callback_fires_only_for_its_ledger() {
        let feed = ChangeFeed::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let handle = feed.on_external_change("ecoWasteLog", move |key| {
            sink.lock().unwrap().push(key.to_string());
        });

        feed.publish(&["ecoEnergyLog".to_string(), "ecoWasteLog".to_string()]);
        tokio::time::sleep(Duration::from_millis(50)).await;
        handle.abort();

        assert_eq!(*seen.lock().unwrap(), vec!["ecoWasteLog".to_string()]);
    }

    #[tokio::test]
    async fn subscribers_receive_every_key() {
        let feed = ChangeFeed::new();
        let mut receiver = feed.subscribe();
        feed.publish(&["a".to_string(), "b".to_string()]);
        assert_eq!(receiver.recv().await.unwrap(), "a");
        assert_eq!(receiver.recv().await.unwrap(), "b");
    }
}
