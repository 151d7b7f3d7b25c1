use serde::Serialize;

/// Insumos para calcular el fingerprint de un recurso multimedia.
/// NO es el fingerprint final (string hash) sino el modelo previo a
/// canonicalizar. `None` se serializa como `null`, que ningún valor presente
/// puede producir (los presentes son siempre strings JSON).
#[derive(Debug, Serialize)]
pub struct ResourceFingerprintInput<'a> {
    pub scheme: &'a str,
    pub data: Option<&'a str>, // base64 estándar de los bytes exactos
    pub text: Option<&'a str>,
    pub path: Option<&'a str>,
    pub url: Option<&'a str>,
    pub mimetype: Option<&'a str>,
}

/// Insumos para el fingerprint de un nodo: un digest (o `null`) por slot.
#[derive(Debug, Serialize)]
pub struct NodeFingerprintInput<'a> {
    pub scheme: &'a str,
    pub text_resource: Option<&'a str>,
    pub image_resource: Option<&'a str>,
    pub audio_resource: Option<&'a str>,
    pub video_resource: Option<&'a str>,
}
