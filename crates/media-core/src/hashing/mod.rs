//! Módulo de hashing y canonicalización JSON.

pub mod canonical_json;
pub mod hash;

pub use canonical_json::to_canonical_json;
pub use hash::{hash_bytes, hash_str};

use crate::errors::CoreError;
use serde::Serialize;
use serde_json::Value;

/// Hashea un `Value` sobre su forma canónica (claves ordenadas, sin espacios).
pub fn hash_value(value: &Value) -> String {
    let canonical = to_canonical_json(value);
    // sólo la longitud: el documento lleva el payload en base64
    log::trace!("canonical document: {} bytes", canonical.len());
    hash_str(&canonical)
}

/// Serializa cualquier modelo a `Value` y lo hashea canónicamente.
///
/// # Errores
/// Retorna `CoreError::Serialization` si el modelo no se puede representar
/// como JSON (p.ej. mapas con claves no textuales).
pub fn hash_serializable<T: Serialize + ?Sized>(input: &T) -> Result<String, CoreError> {
    let value = serde_json::to_value(input)?;
    Ok(hash_value(&value))
}
