//! Punto de integración con la resolución de MIME type.
//!
//! La resolución ocurre antes de calcular el fingerprint y sólo cuando
//! `mimetype` no está asignado; su resultado pasa a ser un campo presente.

use std::path::Path;

/// Resuelve un MIME type a partir del payload binario y/o la ruta.
pub trait MimeTypeResolver: Send + Sync {
    fn resolve(&self, data: Option<&[u8]>, path: Option<&Path>) -> Option<String>;
}

/// Resolver basado en la extensión de la ruta (`mime_guess`). No inspecciona
/// el contenido binario.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionMimeResolver;

impl MimeTypeResolver for ExtensionMimeResolver {
    fn resolve(&self, _data: Option<&[u8]>, path: Option<&Path>) -> Option<String> {
        let guess = mime_guess::from_path(path?).first_raw()?;
        log::debug!("mimetype resuelto por extensión: {guess}");
        Some(guess.to_string())
    }
}
