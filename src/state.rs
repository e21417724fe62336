use crate::errors::AppError;
use crate::feed::ChangeFeed;
use crate::storage::FileStore;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::error;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<FileStore>>,
    pub changes: ChangeFeed,
}

impl AppState {
    pub fn new(store: FileStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            changes: ChangeFeed::new(),
        }
    }

    /// Runs `f` against the store on the blocking pool, since every write
    /// rewrites the data file. The lock is held until `f` returns.
    pub async fn with_store<F, T>(&self, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut FileStore) -> T + Send + 'static,
        T: Send + 'static,
    {
        let mut store = Arc::clone(&self.store).lock_owned().await;
        tokio::task::spawn_blocking(move || f(&mut store))
            .await
            .map_err(AppError::internal)
    }

    /// Re-reads the data file and announces ledgers another writer changed.
    pub async fn refresh_external(&self) -> Vec<String> {
        let changed = match self.with_store(|store| store.refresh()).await {
            Ok(changed) => changed,
            Err(err) => {
                error!("refresh of the data file failed: {}", err.message);
                return Vec::new();
            }
        };
        if !changed.is_empty() {
            self.changes.publish(&changed);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{keys, load, save};
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("eco_meter_state_{name}_{}_{}.json", std::process::id(), nanos));
        path
    }

    #[tokio::test]
    async fn writes_reach_the_data_file() {
        let path = temp_path("write");
        let state = AppState::new(FileStore::open(path.clone()).await);

        state
            .with_store(|store| save(store, keys::ENERGY_LOG, &[7][..]))
            .await
            .unwrap()
            .unwrap();

        let reopened = FileStore::open(path.clone()).await;
        let values: Vec<i32> = load(&reopened, keys::ENERGY_LOG);
        assert_eq!(values, vec![7]);
        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn refresh_publishes_changed_keys() {
        let path = temp_path("refresh");
        let state = AppState::new(FileStore::open(path.clone()).await);
        let mut receiver = state.changes.subscribe();

        let mut other = FileStore::open(path.clone()).await;
        save(&mut other, keys::WASTE_LOG, &[1][..]).unwrap();

        assert_eq!(state.refresh_external().await, vec![keys::WASTE_LOG.to_string()]);
        assert_eq!(receiver.recv().await.unwrap(), keys::WASTE_LOG);
        assert!(state.refresh_external().await.is_empty());
        let _ = std::fs::remove_file(path);
    }
}
