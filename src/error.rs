use std::path::PathBuf;

use thiserror::Error;

/// Failures reading a JSON document before any validation can run.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("unable to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Contract violations raised by the ergonomics layer.
#[derive(Debug, Error, PartialEq)]
pub enum ResolveError {
    #[error("unsupported archetype for physical resolution: {0}")]
    UnsupportedArchetype(String),

    #[error("archetype tag {tag} does not match generated {intent} intent")]
    ArchetypeMismatch { tag: String, intent: String },

    #[error("reference body field {field} must be a positive finite value, got {value}")]
    InvalidReferenceBody { field: &'static str, value: f64 },
}

/// Contract violations raised while assembling adapter inputs.
#[derive(Debug, Error, PartialEq)]
pub enum AdapterError {
    #[error(
        "{archetype} adapter input missing physical resolution; ergonomics must be applied by the {archetype} builder"
    )]
    MissingPhysical {
        archetype: String,
        #[source]
        source: ResolveError,
    },
}
