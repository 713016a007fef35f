use thiserror::Error;

/// Errors that can occur while rewriting a document.
#[derive(Debug, Error)]
pub enum RewriteError {
    /// The HTML rewriter rejected the document stream.
    #[error("Rewriting error: {0}")]
    Rewriting(#[from] lol_html::errors::RewritingError),
    /// IO error during streaming.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// UTF-8 encoding error.
    #[error("Encoding error: {0}")]
    EncodingError(#[from] std::string::FromUtf8Error),
}
