/// The chain has no known deployment of the requested sticker contract.
///
/// Lookups never return a placeholder address alongside this error.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, thiserror::Error)]
#[error("chain not supported")]
pub struct ChainNotSupported;

/// Error type for loading sticker deployments from the environment, a genesis
/// file, or other sources.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Missing genesis field.
    #[error("missing {0} field in genesis")]
    Missing(&'static str),
    /// Error loading from environment variable
    #[error("missing or non-unicode environment variable: {0}")]
    Var(String),
    /// Error parsing environment variable
    #[error("failed to parse environment variable: {0}")]
    Parse(#[from] std::num::ParseIntError),
    /// Error parsing hex from environment variable
    #[error("failed to parse hex: {0}")]
    Hex(#[from] alloy::primitives::hex::FromHexError),
    /// Error parsing JSON
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Two deployments were registered for the same chain.
    #[error("duplicate sticker deployment for chain {0}")]
    DuplicateChain(u64),
}

impl ConfigError {
    /// Missing or non-unicode env var.
    pub fn missing(s: &str) -> Self {
        ConfigError::Var(s.to_string())
    }
}
