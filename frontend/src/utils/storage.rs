use shared::model::{SessionStore, StorageFault};
use web_sys::{window, Storage};

fn local_storage() -> Result<Storage, StorageFault> {
    window()
        .ok_or_else(|| StorageFault("no window".to_string()))?
        .local_storage()
        .map_err(|err| StorageFault(format!("{err:?}")))?
        .ok_or_else(|| StorageFault("localStorage disabled".to_string()))
}

/// Browser `localStorage` backing the session cache.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalSessionStore;

impl SessionStore for LocalSessionStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageFault> {
        local_storage()?
            .get_item(key)
            .map_err(|err| StorageFault(format!("{err:?}")))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageFault> {
        local_storage()?
            .set_item(key, value)
            .map_err(|err| StorageFault(format!("{err:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), StorageFault> {
        local_storage()?
            .remove_item(key)
            .map_err(|err| StorageFault(format!("{err:?}")))
    }
}
