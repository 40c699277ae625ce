// src/store.rs

use crate::error::StoreError;
use std::collections::HashMap;

/// Almacén clave-valor local (el `localStorage` del navegador o un directorio en escritorio).
///
/// Escribir una clave reemplaza su valor completo.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key)
    }
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }
}

/// Almacén en memoria: para tests y como último recurso si no hay otro.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.items.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Un fichero `<clave>.json` por clave dentro de `dir`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> std::path::PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        // Escribe en un temporal y renombra: nunca queda un valor a medias
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// `window.localStorage`.
#[cfg(target_arch = "wasm32")]
pub struct WebStore {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl WebStore {
    pub fn open() -> Result<Self, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("sin window".into()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StoreError::Web(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage desactivado".into()))?;
        Ok(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for WebStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(key)
            .map_err(|e| StoreError::Web(format!("{e:?}")))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Web(format!("{e:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_replaces_values() {
        let mut store = MemoryStore::with_item("k", "1");
        store.set_item("k", "2").expect("set ok");
        assert_eq!(store.get_item("k").expect("get ok").as_deref(), Some("2"));
        assert_eq!(store.get_item("otra").expect("get ok"), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_round_trip_and_missing_key() {
        let dir = std::env::temp_dir().join(format!("aws_quiz_store_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let mut store = FileStore::new(&dir);
        assert_eq!(store.get_item("progreso").expect("get ok"), None);

        store.set_item("progreso", "{\"1\":[\"A\"]}").expect("set ok");
        store.set_item("progreso", "{}").expect("set ok");
        assert_eq!(store.get_item("progreso").expect("get ok").as_deref(), Some("{}"));
        assert!(!dir.join("progreso.json.tmp").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
