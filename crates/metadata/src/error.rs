//! Error types for metadata fetching

/// Errors that can occur while fetching a volume from a source
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Google Books error: {0}")]
    GoogleBooks(#[from] googlebooks::GoogleBooksError),
}
