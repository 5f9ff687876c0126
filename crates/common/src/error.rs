/// Generic error type for the zklint-common crate
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Generic error with a message
    #[error("Error: {0}")]
    Generic(String),
    /// An error occurred while communicating with the RPC provider
    #[error("RPC error: {0}")]
    RpcError(String),
    /// An error occurred while accessing the filesystem
    #[error("Filesystem error: {0}")]
    FilesystemError(#[from] std::io::Error),
    /// An error occurred while parsing user input
    #[error("Parse error: {0}")]
    ParseError(String),
}
