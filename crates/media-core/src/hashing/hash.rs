//! Hash helpers – abstracción para poder cambiar de algoritmo sin tocar el
//! resto del core. Todo digest público es SHA-256 en hex minúscula.

use sha2::{Digest, Sha256};

/// Hashea bytes arbitrarios y devuelve hex (64 caracteres).
pub fn hash_bytes(input: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input);
    format!("{:x}", hasher.finalize())
}

/// Hashea un string y devuelve hex.
pub fn hash_str(input: &str) -> String {
    hash_bytes(input.as_bytes())
}
