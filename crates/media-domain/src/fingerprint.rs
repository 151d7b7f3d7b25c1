//! Fingerprinters deterministas de `MediaResource` y `Node`.
//!
//! Ambos construyen un modelo previo (`media_core::model`) con un token por
//! campo en orden fijo, lo canonicalizan como documento JSON de claves
//! ordenadas y lo hashean con SHA-256. Un campo ausente es `null`; uno
//! presente es siempre un string JSON, así que vacío y ausente nunca
//! coinciden y los límites entre campos no son ambiguos.

use crate::{DomainError, MediaResource, Node, NodeSlot};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use media_core::{hash_serializable, NodeFingerprintInput, ResourceFingerprintInput, FINGERPRINT_SCHEME};

/// Calcula el digest (64 hex) de un recurso.
///
/// Campos: `data, text, path, url, mimetype` más `scheme`. El documento
/// canónico ordena las claves, así que los bytes hasheados siguen el orden
/// `data, mimetype, path, scheme, text, url`. `data` se codifica en base64
/// sobre los bytes exactos.
///
/// # Errores
/// `DomainError::Encoding { field: "path" }` si la ruta no es UTF-8 válido.
pub fn fingerprint_resource(resource: &MediaResource) -> Result<String, DomainError> {
    let data = resource.data.as_deref().map(|bytes| STANDARD.encode(bytes));
    let path = match resource.path.as_deref() {
        Some(p) => Some(p.to_str().ok_or_else(|| DomainError::encoding("path"))?),
        None => None,
    };
    let input = ResourceFingerprintInput { scheme: FINGERPRINT_SCHEME,
                                           data: data.as_deref(),
                                           text: resource.text.as_deref(),
                                           path,
                                           url: resource.url.as_ref().map(|u| u.as_str()),
                                           mimetype: resource.mimetype.as_deref() };
    let digest = hash_serializable(&input)?;
    log::debug!("media resource fingerprint: {digest}");
    Ok(digest)
}

/// Calcula el digest de un nodo a partir de los digests de sus cuatro slots.
/// Como en `fingerprint_resource`, el orden en bytes lo fija el orden de
/// claves: `audio_resource, image_resource, scheme, text_resource,
/// video_resource`.
/// Ni `id` ni `metadata` participan.
///
/// # Errores
/// Propaga `DomainError::Encoding` con el campo prefijado por el slot
/// (p.ej. `image_resource.path`).
pub fn fingerprint_node(node: &Node) -> Result<String, DomainError> {
    let [text, image, audio, video] = NodeSlot::ALL.map(|slot| slot_digest(node, slot));
    let (text, image, audio, video) = (text?, image?, audio?, video?);
    let input = NodeFingerprintInput { scheme: FINGERPRINT_SCHEME,
                                       text_resource: text.as_deref(),
                                       image_resource: image.as_deref(),
                                       audio_resource: audio.as_deref(),
                                       video_resource: video.as_deref() };
    let digest = hash_serializable(&input)?;
    log::debug!("node {} fingerprint: {digest}", node.id);
    Ok(digest)
}

fn slot_digest(node: &Node, slot: NodeSlot) -> Result<Option<String>, DomainError> {
    node.slot(slot)
        .map(|resource| fingerprint_resource(resource).map_err(|e| e.within(slot.field_name())))
        .transpose()
}
