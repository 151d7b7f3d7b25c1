//! mediahash
//!
//! Fachada del workspace:
//! - `hashing` re-exporta la canonicalización JSON y los helpers de hash.
//! - El resto re-exporta el dominio (`MediaResource`, `Node`) y sus
//!   fingerprinters.
//!
//! Todo digest es SHA-256 en hex minúscula (64 caracteres), determinista
//! para una misma versión de `FINGERPRINT_SCHEME`.

pub use media_core as hashing;
pub use media_core::FINGERPRINT_SCHEME;
pub use media_domain::{fingerprint_node, fingerprint_resource, DomainError, ExtensionMimeResolver, MediaResource,
                       MimeTypeResolver, Node, NodeSlot, ObjectType};
