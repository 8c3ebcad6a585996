use std::path::PathBuf;

/// Broad classes of failure, for callers that only need to branch on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// No element, edge, line, ion or table row matches the key.
    NotFound,
    /// The request (or the table it hit) cannot be evaluated.
    InvalidInput,
    /// The reference store holds a malformed row or cannot be decoded.
    DataIntegrity,
    /// The reference store could not be read.
    Io,
}

#[derive(Debug, thiserror::Error)]
pub enum XrayDbError {
    #[error("unknown element: {0}")]
    UnknownElement(String),

    #[error("unknown edge '{edge}' for element '{element}'")]
    UnknownEdge { element: String, edge: String },

    #[error("no Coster-Kronig transition {initial}->{final_level} for element '{element}'")]
    UnknownTransition {
        element: String,
        initial: String,
        final_level: String,
    },

    #[error("unknown ion: {0}")]
    UnknownIon(String),

    #[error("no {table} data for element '{element}'")]
    MissingTable {
        table: &'static str,
        element: String,
    },

    #[error("unknown cross-section kind: {0}")]
    UnknownKind(String),

    #[error("invalid energy {0} eV: energies must be positive and finite")]
    InvalidEnergy(f64),

    #[error("tabulated x values must be strictly increasing (interval starting at index {index})")]
    NonIncreasing { index: usize },

    #[error("data error: {0}")]
    DataError(String),

    #[error("failed to read reference store {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("reference store location not configured (set {0})")]
    StoreNotConfigured(&'static str),
}

pub type Result<T> = std::result::Result<T, XrayDbError>;

impl XrayDbError {
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownElement(_)
            | Self::UnknownEdge { .. }
            | Self::UnknownTransition { .. }
            | Self::UnknownIon(_)
            | Self::MissingTable { .. } => ErrorCategory::NotFound,
            Self::UnknownKind(_) | Self::InvalidEnergy(_) | Self::NonIncreasing { .. } => {
                ErrorCategory::InvalidInput
            }
            Self::DataError(_) => ErrorCategory::DataIntegrity,
            Self::Io { .. } | Self::StoreNotConfigured(_) => ErrorCategory::Io,
        }
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self.category(), ErrorCategory::NotFound)
    }

    pub(crate) fn malformed(table: &str, element: &str, detail: impl std::fmt::Display) -> Self {
        let message = format!("malformed {table} row for '{element}': {detail}");
        tracing::warn!("{message}");
        Self::DataError(message)
    }
}
