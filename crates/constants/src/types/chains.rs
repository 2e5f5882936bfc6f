use crate::{ChainNotSupported, StickerContracts};
use std::{fmt, str::FromStr};

/// The list of known chains as a string.
const KNOWN_CHAINS: &str = "mainnet, goerli, sepolia";

/// Error type for parsing struct from a chain name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseChainError {
    /// The chain name is not supported.
    #[error("chain name {0} is not parseable. supported chains: {KNOWN_CHAINS}")]
    ChainNotSupported(String),
}

/// Networks with a known sticker deployment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum KnownChains {
    /// Ethereum mainnet.
    Mainnet,
    /// Goerli testnet.
    Goerli,
    /// Sepolia testnet.
    Sepolia,
}

impl KnownChains {
    /// Every known chain.
    pub const ALL: &'static [Self] = &[Self::Mainnet, Self::Goerli, Self::Sepolia];

    /// Get the known chain with the given chain id, if any.
    pub const fn from_chain_id(chain_id: u64) -> Option<Self> {
        match chain_id {
            crate::mainnet::CHAIN_ID => Some(Self::Mainnet),
            crate::goerli::CHAIN_ID => Some(Self::Goerli),
            crate::sepolia::CHAIN_ID => Some(Self::Sepolia),
            _ => None,
        }
    }

    /// Get the chain id.
    pub const fn chain_id(&self) -> u64 {
        self.contracts().chain_id()
    }

    /// Get the human-readable chain name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mainnet => crate::mainnet::NAME,
            Self::Goerli => crate::goerli::NAME,
            Self::Sepolia => crate::sepolia::NAME,
        }
    }

    /// Get the sticker contracts deployed on this chain.
    pub const fn contracts(&self) -> StickerContracts {
        match self {
            Self::Mainnet => crate::mainnet::STICKERS,
            Self::Goerli => crate::goerli::STICKERS,
            Self::Sepolia => crate::sepolia::STICKERS,
        }
    }
}

impl fmt::Display for KnownChains {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KnownChains {
    type Err = ParseChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "mainnet" => Ok(Self::Mainnet),
            "goerli" => Ok(Self::Goerli),
            "sepolia" => Ok(Self::Sepolia),
            _ => Err(ParseChainError::ChainNotSupported(s)),
        }
    }
}

impl TryFrom<u64> for KnownChains {
    type Error = ChainNotSupported;

    fn try_from(chain_id: u64) -> Result<Self, Self::Error> {
        Self::from_chain_id(chain_id).ok_or(ChainNotSupported)
    }
}
