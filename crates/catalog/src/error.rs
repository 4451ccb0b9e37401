use std::path::PathBuf;

use foundation::IndexOutOfBounds;

#[derive(Debug)]
pub enum CatalogError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    InvalidRecord(String),
    IndexOutOfBounds(IndexOutOfBounds),
    AlreadyInCast {
        movie: String,
        actor: String,
    },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io { path, source } => {
                write!(f, "catalogue I/O error on {}: {source}", path.display())
            }
            CatalogError::Parse(err) => write!(f, "catalogue parse error: {err}"),
            CatalogError::InvalidRecord(msg) => write!(f, "invalid catalogue record: {msg}"),
            CatalogError::IndexOutOfBounds(err) => write!(f, "no such movie: {err}"),
            CatalogError::AlreadyInCast { movie, actor } => {
                write!(f, "{actor} already appears in {movie}")
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io { source, .. } => Some(source),
            CatalogError::Parse(err) => Some(err),
            CatalogError::IndexOutOfBounds(err) => Some(err),
            CatalogError::InvalidRecord(_) | CatalogError::AlreadyInCast { .. } => None,
        }
    }
}

impl From<IndexOutOfBounds> for CatalogError {
    fn from(err: IndexOutOfBounds) -> Self {
        CatalogError::IndexOutOfBounds(err)
    }
}
