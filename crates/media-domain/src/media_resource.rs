// media_resource.rs
use crate::fingerprint::fingerprint_resource;
use crate::mime::MimeTypeResolver;
use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use url::Url;

/// Sub-recurso multimedia: un conjunto opcional de bytes, texto, ruta, URL y
/// MIME type.
///
/// Cada campo es `Option`: `None` significa "nunca asignado" y `Some` un valor
/// presente, aunque esté vacío. Esa distinción es parte de la identidad del
/// recurso y se conserva en el fingerprint (`text: Some("")` y `text: None`
/// producen hashes distintos).
///
/// `embeddings` es información auxiliar y no entra al hash.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaResource {
    #[serde(default, with = "base64_bytes", skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mimetype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embeddings: Option<BTreeMap<String, Vec<f32>>>,
}

impl MediaResource {
    /// Recurso con todos los campos sin asignar.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_url(mut self, url: Url) -> Self {
        self.url = Some(url);
        self
    }

    /// Variante de `with_url` que parsea la URL.
    ///
    /// # Errores
    /// Retorna `DomainError::ValidationError` si el texto no es una URL válida.
    pub fn with_url_str(self, url: &str) -> Result<Self, DomainError> {
        let parsed = Url::parse(url).map_err(|e| DomainError::ValidationError(format!("URL inválida '{url}': {e}")))?;
        Ok(self.with_url(parsed))
    }

    pub fn with_mimetype(mut self, mimetype: impl Into<String>) -> Self {
        self.mimetype = Some(mimetype.into());
        self
    }

    pub fn with_embeddings(mut self, embeddings: BTreeMap<String, Vec<f32>>) -> Self {
        self.embeddings = Some(embeddings);
        self
    }

    /// Completa `mimetype` con la respuesta del resolver, sólo si no estaba
    /// asignado. Un MIME explícito nunca se sobrescribe.
    pub fn resolve_mimetype(mut self, resolver: &dyn MimeTypeResolver) -> Self {
        if self.mimetype.is_none() {
            self.mimetype = resolver.resolve(self.data.as_deref(), self.path.as_deref());
        }
        self
    }

    /// Indica si ninguno de los campos de contenido (data, text, path, url)
    /// está asignado.
    pub fn is_empty(&self) -> bool {
        self.data.is_none() && self.text.is_none() && self.path.is_none() && self.url.is_none()
    }

    /// Fingerprint SHA-256 (64 hex) del recurso. Se recalcula en cada llamada.
    pub fn hash(&self) -> Result<String, DomainError> {
        fingerprint_resource(self)
    }
}

/// Representación JSON de los bytes como base64 estándar.
mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(data: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
        match data {
            Some(bytes) => serializer.serialize_some(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error> {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        encoded.map(|s| STANDARD.decode(s.as_bytes()).map_err(<D::Error as serde::de::Error>::custom))
               .transpose()
    }
}
