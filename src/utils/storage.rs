use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Guardar un valor crudo (el token se persiste tal cual, sin envolver en JSON)
pub fn save_raw(key: &str, value: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage.set_item(key, value)
        .map_err(|_| format!("Error guardando '{}' en localStorage", key))?;
    Ok(())
}

pub fn load_raw(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

/// Guardar un valor serializable como JSON
pub fn save_json<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Error serializando datos: {}", e))?;
    save_raw(key, &json)
}

pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let json = load_raw(key)?;
    serde_json::from_str(&json).ok()
}

pub fn remove_key(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage.remove_item(key)
        .map_err(|_| format!("Error eliminando '{}' de localStorage", key))?;
    Ok(())
}

/// Eliminar varias claves de una vez (limpieza de sesión)
pub fn remove_keys(keys: &[&str]) {
    for key in keys {
        let _ = remove_key(key);
    }
}
