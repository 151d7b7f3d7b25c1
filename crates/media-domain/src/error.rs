use media_core::CoreError;
use thiserror::Error;

/// Errores del dominio multimedia.
///
/// `Encoding` es la única falla posible al calcular un fingerprint: un campo
/// presente que no admite representación canónica. Nunca se degrada a un hash
/// parcial.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DomainError {
    #[error("Campo no codificable canónicamente: {field}")]
    Encoding { field: String },

    #[error("Error de validación: {0}")]
    ValidationError(String),

    #[error("Error de serialización: {0}")]
    SerializationError(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl DomainError {
    pub(crate) fn encoding(field: impl Into<String>) -> Self {
        DomainError::Encoding { field: field.into() }
    }

    /// Prefija el nombre del campo con el slot del nodo que lo contiene.
    pub(crate) fn within(self, slot: &str) -> Self {
        match self {
            DomainError::Encoding { field } => DomainError::Encoding { field: format!("{slot}.{field}") },
            other => other,
        }
    }
}

// Implementación de conversión desde serde_json::Error a DomainError
impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::SerializationError(e.to_string())
    }
}
