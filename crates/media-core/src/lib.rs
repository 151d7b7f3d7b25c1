//! media-core: hashing canónico neutral (sin dependencias de dominio).
//!
//! Expone la canonicalización JSON, el wrapper de digest SHA-256 y los
//! modelos previos a canonicalizar que usan los fingerprinters de
//! `media-domain`.
pub mod constants;
pub mod errors;
pub mod hashing;
pub mod model;

pub use constants::FINGERPRINT_SCHEME;
pub use errors::CoreError;
pub use hashing::{hash_bytes, hash_serializable, hash_str, hash_value, to_canonical_json};
pub use model::{NodeFingerprintInput, ResourceFingerprintInput};
