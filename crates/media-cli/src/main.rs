//! `media-cli`: imprime el fingerprint de un `MediaResource` o `Node`
//! descrito en JSON (`-` lee de stdin). Los bytes de `data` van en base64.
//!
//! Códigos de salida: 0 ok, 1 error de entrada/parseo, 2 error de codificación.

mod config;

use clap::{Parser, Subcommand};
use config::CliConfig;
use media_domain::{DomainError, ExtensionMimeResolver, MediaResource, Node, NodeSlot};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "media-cli", version, about = "Deterministic fingerprints for multimodal records")]
struct Cli {
    /// Resolve unset mimetypes from the path extension before hashing
    #[arg(long, global = true, overrides_with = "no_resolve_mime")]
    resolve_mime: bool,

    /// Never resolve mimetypes, even if MEDIAHASH_RESOLVE_MIME is set
    #[arg(long, global = true, overrides_with = "resolve_mime")]
    no_resolve_mime: bool,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    /// Los flags explícitos tienen prioridad sobre el valor del entorno.
    fn resolve_mime(&self, env_default: bool) -> bool {
        if self.resolve_mime {
            true
        } else if self.no_resolve_mime {
            false
        } else {
            env_default
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fingerprint a single media resource
    Resource {
        /// JSON file, or `-` for stdin
        file: PathBuf,
    },
    /// Fingerprint a node with up to four resource slots
    Node {
        /// JSON file, or `-` for stdin
        file: PathBuf,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Input(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Input(_) | CliError::Domain(DomainError::SerializationError(_)) => 1,
            CliError::Domain(_) => 2,
        }
    }
}

fn main() -> ExitCode {
    let cfg = CliConfig::from_env();
    init_logging(&cfg.log_filter);
    let cli = Cli::parse();
    let resolve_mime = cli.resolve_mime(cfg.resolve_mime);

    match run(&cli.command, resolve_mime) {
        Ok(digest) => {
            println!("{digest}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[media-cli] {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    // el bridge tracing-log reenvía los registros `log` de las librerías
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

fn run(command: &Command, resolve_mime: bool) -> Result<String, CliError> {
    match command {
        Command::Resource { file } => {
            let mut resource: MediaResource = parse_json(&read_input(file)?)?;
            if resolve_mime {
                resource = resource.resolve_mimetype(&ExtensionMimeResolver);
            }
            Ok(resource.hash()?)
        }
        Command::Node { file } => {
            let mut node: Node = parse_json(&read_input(file)?)?;
            if resolve_mime {
                for slot in NodeSlot::ALL {
                    let resolved = node.slot(slot).cloned().map(|r| r.resolve_mimetype(&ExtensionMimeResolver));
                    node.set_slot(slot, resolved);
                }
            }
            log::info!("hashing node {}", node.id);
            Ok(node.hash()?)
        }
    }
}

fn read_input(file: &Path) -> Result<String, CliError> {
    let mut buf = String::new();
    if file == Path::new("-") {
        std::io::stdin().read_to_string(&mut buf)
                        .map_err(|e| CliError::Input(format!("stdin: {e}")))?;
    } else {
        buf = std::fs::read_to_string(file).map_err(|e| CliError::Input(format!("{}: {e}", file.display())))?;
    }
    Ok(buf)
}

fn parse_json<T: serde::de::DeserializeOwned>(raw: &str) -> Result<T, CliError> {
    serde_json::from_str(raw).map_err(|e| CliError::Domain(DomainError::from(e)))
}
