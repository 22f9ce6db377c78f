use anyhow::{anyhow, Result};
use backend::storage::{KeyValueStore, MemoryStore};
use log::warn;
use wasm_bindgen::JsValue;
use web_sys::Storage;

fn js_error(action: &str, key: &str, err: JsValue) -> anyhow::Error {
    anyhow!("localStorage {} failed for {:?}: {:?}", action, key, err)
}

/// `window.localStorage` as a [`KeyValueStore`]
#[derive(Debug, Clone)]
pub struct BrowserStore {
    storage: Storage,
}

impl BrowserStore {
    /// `None` when the browser denies storage (private mode, sandboxed frames)
    pub fn local() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(|e| js_error("read", key, e))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage.set_item(key, value).map_err(|e| js_error("write", key, e))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage.remove_item(key).map_err(|e| js_error("remove", key, e))
    }
}

/// Storage the page actually runs on: the browser's, or memory when that's unavailable
#[derive(Debug)]
pub enum ClientStore {
    Browser(BrowserStore),
    Memory(MemoryStore),
}

impl ClientStore {
    pub fn detect() -> Self {
        match BrowserStore::local() {
            Some(store) => ClientStore::Browser(store),
            None => {
                warn!("localStorage unavailable; records will not survive a reload");
                ClientStore::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for ClientStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match self {
            ClientStore::Browser(store) => store.get(key),
            ClientStore::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        match self {
            ClientStore::Browser(store) => store.set(key, value),
            ClientStore::Memory(store) => store.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> Result<()> {
        match self {
            ClientStore::Browser(store) => store.remove(key),
            ClientStore::Memory(store) => store.remove(key),
        }
    }
}
