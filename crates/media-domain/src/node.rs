// node.rs
use crate::fingerprint::fingerprint_node;
use crate::{DomainError, MediaResource};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Tipo de objeto dentro del esquema de nodos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    Text,
    Image,
    Index,
    Document,
    Multimodal,
}

/// Posiciones de sub-recurso de un `Node`, en el orden fijo en que entran al
/// fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeSlot {
    Text,
    Image,
    Audio,
    Video,
}

impl NodeSlot {
    pub const ALL: [NodeSlot; 4] = [NodeSlot::Text, NodeSlot::Image, NodeSlot::Audio, NodeSlot::Video];

    /// Nombre del campo correspondiente en `Node`.
    pub fn field_name(self) -> &'static str {
        match self {
            NodeSlot::Text => "text_resource",
            NodeSlot::Image => "image_resource",
            NodeSlot::Audio => "audio_resource",
            NodeSlot::Video => "video_resource",
        }
    }
}

/// Registro multimodal con hasta cuatro sub-recursos independientes.
///
/// Un slot sin asignar (`None`) es distinto de un slot asignado a un
/// `MediaResource` vacío. `id` y `metadata` son información auxiliar y no
/// entran al hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_resource: Option<MediaResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_resource: Option<MediaResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_resource: Option<MediaResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_resource: Option<MediaResource>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

impl Default for Node {
    fn default() -> Self {
        Self { id: Uuid::new_v4(),
               text_resource: None,
               image_resource: None,
               audio_resource: None,
               video_resource: None,
               metadata: Map::new() }
    }
}

impl Node {
    /// Nodo con todos los slots sin asignar y un `id` nuevo.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class_name() -> &'static str {
        "Node"
    }

    pub fn object_type() -> ObjectType {
        ObjectType::Multimodal
    }

    pub fn with_text_resource(mut self, resource: MediaResource) -> Self {
        self.text_resource = Some(resource);
        self
    }

    pub fn with_image_resource(mut self, resource: MediaResource) -> Self {
        self.image_resource = Some(resource);
        self
    }

    pub fn with_audio_resource(mut self, resource: MediaResource) -> Self {
        self.audio_resource = Some(resource);
        self
    }

    pub fn with_video_resource(mut self, resource: MediaResource) -> Self {
        self.video_resource = Some(resource);
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Obtiene el recurso de un slot, si está asignado.
    pub fn slot(&self, slot: NodeSlot) -> Option<&MediaResource> {
        match slot {
            NodeSlot::Text => self.text_resource.as_ref(),
            NodeSlot::Image => self.image_resource.as_ref(),
            NodeSlot::Audio => self.audio_resource.as_ref(),
            NodeSlot::Video => self.video_resource.as_ref(),
        }
    }

    /// Reemplaza (o desasigna con `None`) el recurso de un slot.
    pub fn set_slot(&mut self, slot: NodeSlot, resource: Option<MediaResource>) {
        let target = match slot {
            NodeSlot::Text => &mut self.text_resource,
            NodeSlot::Image => &mut self.image_resource,
            NodeSlot::Audio => &mut self.audio_resource,
            NodeSlot::Video => &mut self.video_resource,
        };
        *target = resource;
    }

    /// Texto del recurso de texto, o `""` si no hay.
    pub fn content(&self) -> &str {
        self.text_resource.as_ref().and_then(|r| r.text.as_deref()).unwrap_or("")
    }

    /// Fingerprint SHA-256 (64 hex) del nodo. Se recalcula en cada llamada.
    pub fn hash(&self) -> Result<String, DomainError> {
        fingerprint_node(self)
    }
}
