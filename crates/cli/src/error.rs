/// Error type for the zklint CLI
#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    /// Generic error with a message
    #[error("{0}")]
    Generic(String),
    /// An error returned by the check module
    #[error("Check error: {0}")]
    CheckError(#[from] zklint_check::Error),
}
