/// Error type for the Check module
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Generic internal error that may occur during the check
    #[error("Internal error: {0}")]
    Eyre(#[from] eyre::Report),
    /// The configured rule set is invalid
    #[error("Invalid rule set: {0}")]
    InvalidRuleSet(String),
    /// The target has no bytecode to scan
    #[error("No bytecode found: {0}")]
    NoBytecode(String),
}
