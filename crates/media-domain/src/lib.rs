// media-domain library entry point
pub mod error;
pub mod fingerprint;
pub mod media_resource;
pub mod mime;
pub mod node;
pub use error::DomainError;
pub use fingerprint::{fingerprint_node, fingerprint_resource};
pub use media_resource::MediaResource;
pub use mime::{ExtensionMimeResolver, MimeTypeResolver};
pub use node::{Node, NodeSlot, ObjectType};
