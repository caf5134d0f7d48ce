use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    LocalStorage::set(key, value).map_err(|e| format!("Error guardando en localStorage: {}", e))
}

/// Devuelve `None` si la clave no existe o no se puede deserializar
pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    LocalStorage::get(key).ok()
}

pub fn remove_from_storage(key: &str) {
    LocalStorage::delete(key);
}
