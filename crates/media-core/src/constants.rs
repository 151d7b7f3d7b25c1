//! Constantes del esquema de fingerprint.
//!
//! `FINGERPRINT_SCHEME` forma parte del documento canónico que se hashea, de
//! modo que un cambio de versión del esquema cambia todos los digests aunque
//! los datos no cambien. Sólo se garantiza determinismo dentro de la misma
//! versión.

/// Versión lógica del esquema de canonicalización. Mantener estable mientras
/// no haya cambios incompatibles en el documento canónico.
pub const FINGERPRINT_SCHEME: &str = "mmhash/1";

/// Longitud en caracteres hex de todo digest público (SHA-256).
pub const DIGEST_HEX_LEN: usize = 64;
