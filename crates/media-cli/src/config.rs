//! Carga de configuración desde variables de entorno (.env opcional).

use once_cell::sync::Lazy;
use std::env;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenvy::dotenv(); // ignora error si no existe .env
});

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Filtro de logging en sintaxis EnvFilter (`MEDIAHASH_LOG`).
    pub log_filter: String,
    /// Resolver MIME types no asignados antes de hashear (`MEDIAHASH_RESOLVE_MIME`).
    pub resolve_mime: bool,
}

impl CliConfig {
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        Self::from_vars(env::var("MEDIAHASH_LOG").ok(), env::var("MEDIAHASH_RESOLVE_MIME").ok())
    }

    fn from_vars(log: Option<String>, resolve_mime: Option<String>) -> Self {
        let log_filter = log.filter(|v| !v.trim().is_empty()).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let resolve_mime = resolve_mime.map(|v| parse_flag(&v)).unwrap_or(false);
        Self { log_filter, resolve_mime }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
