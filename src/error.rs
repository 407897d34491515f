use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum EtiquetteError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// The members or categories database rejected a statement
    Database(#[from] rusqlite::Error),

    #[error("cannot parse preferences: {0}")]
    /// The preferences file could not be deserialized
    Preferences(#[from] serde_json::Error),

    #[error("no member selected to generate labels")]
    /// The caller asked for labels with an empty selection
    EmptySelection,
}
