use crate::errors::StorageError;
use crate::models::Category;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

/// Storage keys. The browser-era names are kept verbatim so existing
/// documents stay readable.
pub mod keys {
    pub const AUTH_USER: &str = "ecoAuthUser";
    pub const QUIZ_HISTORY: &str = "ecoQuizHistoryV2";
    pub const QUIZ_HISTORY_LEGACY: &str = "ecoQuizHistory";
    pub const RECENT_ACTIONS: &str = "ecoRecentActions";
    pub const WASTE_LOG: &str = "ecoWasteLog";
    pub const ENERGY_LOG: &str = "ecoEnergyLog";
    pub const TREES_PLANTED: &str = "ecoTreesPlanted";
    pub const CARPOOL_COUNT: &str = "carPoolCount";
    pub const PUBLIC_TRANSPORT_COUNT: &str = "publicTransportCount";
    pub const PROFILE: &str = "ecoProfileUserData";
    pub const CARPOOL_LOG: &str = "ecoCarPoolLog";
    pub const PUBLIC_TRANSPORT_LOG: &str = "ecoPublicTransportLog";
    pub const YOGA_SESSIONS: &str = "ecoYogaSessions";
    pub const CARBON_LOG: &str = "ecoCarbonLog";
    pub const REDEMPTIONS: &str = "ecoRedemptions";
}

pub const RECENT_ACTIONS_LIMIT: usize = 20;

/// Per-category ledger. Quiz results live in the quiz history instead.
pub fn category_ledger(category: Category) -> Option<&'static str> {
    match category {
        Category::Carpool => Some(keys::CARPOOL_LOG),
        Category::PublicTransport => Some(keys::PUBLIC_TRANSPORT_LOG),
        Category::TreePlanting => Some(keys::TREES_PLANTED),
        Category::WasteSegregation => Some(keys::WASTE_LOG),
        Category::EnergySaving => Some(keys::ENERGY_LOG),
        Category::Yoga => Some(keys::YOGA_SESSIONS),
        Category::CarbonCalculation => Some(keys::CARBON_LOG),
        Category::Quiz => None,
    }
}

/// One pending change in an atomic write. `None` removes the key.
pub type WriteBatch = Vec<(String, Option<Value>)>;

/// Key-value persistence. `write` applies the whole batch or nothing.
pub trait LedgerStore {
    fn read(&self, key: &str) -> Option<Value>;

    fn write(&mut self, batch: WriteBatch) -> Result<(), StorageError>;
}

/// Loads a ledger; absent or malformed data reads as empty.
pub fn load<T, S>(store: &S, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
    S: LedgerStore + ?Sized,
{
    let Some(value) = store.read(key) else {
        return Vec::new();
    };
    match serde_json::from_value(value) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("ledger {key} is malformed, treating as empty: {err}");
            Vec::new()
        }
    }
}

pub fn load_object<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: LedgerStore + ?Sized,
{
    let value = store.read(key)?;
    match serde_json::from_value(value) {
        Ok(object) => Some(object),
        Err(err) => {
            warn!("value under {key} is malformed, ignoring: {err}");
            None
        }
    }
}

/// Counters were historically stored as strings ("3"); both forms are accepted.
pub fn load_counter<S: LedgerStore + ?Sized>(store: &S, key: &str) -> u64 {
    match store.read(key) {
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

pub fn save<T, S>(store: &mut S, key: &str, entries: &[T]) -> Result<(), StorageError>
where
    T: Serialize,
    S: LedgerStore + ?Sized,
{
    let value = encode(key, entries)?;
    store.write(vec![(key.to_string(), Some(value))])
}

pub fn encode<T: Serialize + ?Sized>(key: &str, value: &T) -> Result<Value, StorageError> {
    serde_json::to_value(value).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })
}

/// In-process store, used by tests and as the document cache of `FileStore`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(entries: BTreeMap<String, Value>) -> Self {
        Self { entries }
    }

    pub fn as_map(&self) -> &BTreeMap<String, Value> {
        &self.entries
    }

    pub fn insert_raw(&mut self, key: &str, value: Value) {
        self.entries.insert(key.to_string(), value);
    }

    pub(crate) fn apply(&mut self, batch: WriteBatch) {
        for (key, value) in batch {
            match value {
                Some(value) => {
                    self.entries.insert(key, value);
                }
                None => {
                    self.entries.remove(&key);
                }
            }
        }
    }
}

impl LedgerStore for MemoryStore {
    fn read(&self, key: &str) -> Option<Value> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, batch: WriteBatch) -> Result<(), StorageError> {
        self.apply(batch);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_ledger_is_empty() {
        let store = MemoryStore::new();
        let entries: Vec<Value> = load(&store, keys::WASTE_LOG);
        assert!(entries.is_empty());
    }

    #[test]
    fn malformed_ledger_is_empty() {
        let mut store = MemoryStore::new();
        store.insert_raw(keys::WASTE_LOG, json!("not a list"));
        store.insert_raw(keys::ENERGY_LOG, json!([{ "id": "oops" }]));
        let waste: Vec<crate::models::ActivityEntry> = load(&store, keys::WASTE_LOG);
        let energy: Vec<crate::models::ActivityEntry> = load(&store, keys::ENERGY_LOG);
        assert!(waste.is_empty());
        assert!(energy.is_empty());
    }

    #[test]
    fn save_overwrites_whole_ledger() {
        let mut store = MemoryStore::new();
        save(&mut store, "list", &[1, 2, 3][..]).unwrap();
        save(&mut store, "list", &[4][..]).unwrap();
        let values: Vec<i32> = load(&store, "list");
        assert_eq!(values, vec![4]);
    }

    #[test]
    fn counters_accept_strings_and_numbers() {
        let mut store = MemoryStore::new();
        store.insert_raw(keys::CARPOOL_COUNT, json!("7"));
        store.insert_raw(keys::PUBLIC_TRANSPORT_COUNT, json!(4));
        assert_eq!(load_counter(&store, keys::CARPOOL_COUNT), 7);
        assert_eq!(load_counter(&store, keys::PUBLIC_TRANSPORT_COUNT), 4);
        assert_eq!(load_counter(&store, "missing"), 0);
    }

    #[test]
    fn write_batch_removes_keys() {
        let mut store = MemoryStore::new();
        store.insert_raw(keys::AUTH_USER, json!({ "name": "a", "email": "b" }));
        store
            .write(vec![(keys::AUTH_USER.to_string(), None)])
            .unwrap();
        assert!(store.read(keys::AUTH_USER).is_none());
    }
}
