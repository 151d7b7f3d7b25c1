//! Modelos previos a canonicalizar (inputs de fingerprint).

pub mod fingerprint;

pub use fingerprint::{NodeFingerprintInput, ResourceFingerprintInput};
