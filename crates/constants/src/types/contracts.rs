use crate::{ConfigError, ContractCategory, KnownChains, ParseChainError};
use alloy::{genesis::Genesis, primitives::Address};
use std::{env, fmt, str::FromStr};

/// Read a non-empty, trimmed environment variable.
fn env_var(key: &str) -> Result<String, ConfigError> {
    env::var(key)
        .ok()
        .map(|val| val.trim().to_owned())
        .filter(|val| !val.is_empty())
        .ok_or_else(|| ConfigError::missing(key))
}

/// The sticker contracts deployed on a single chain.
///
/// The three contracts are always deployed together, so a chain either has
/// all three addresses or none of them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StickerContracts {
    /// Chain ID.
    chain_id: u64,
    /// Address of the sticker type registry.
    sticker_type: Address,
    /// Address of the sticker market.
    sticker_market: Address,
    /// Address of the sticker pack registry.
    sticker_pack: Address,
}

impl fmt::Display for StickerContracts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ type: {}, market: {}, pack: {} }}",
            self.sticker_type, self.sticker_market, self.sticker_pack
        )
    }
}

impl StickerContracts {
    /// Environment variable holding the chain id of a custom deployment.
    pub const CHAIN_ID_ENV: &'static str = "STICKERS_CHAIN_ID";
    /// Environment variable holding the `StickerType` address of a custom
    /// deployment.
    pub const STICKER_TYPE_ENV: &'static str = "STICKER_TYPE_ADDRESS";
    /// Environment variable holding the `StickerMarket` address of a custom
    /// deployment.
    pub const STICKER_MARKET_ENV: &'static str = "STICKER_MARKET_ADDRESS";
    /// Environment variable holding the `StickerPack` address of a custom
    /// deployment.
    pub const STICKER_PACK_ENV: &'static str = "STICKER_PACK_ADDRESS";

    /// Create a new set of sticker contract addresses.
    pub const fn new(
        chain_id: u64,
        sticker_type: Address,
        sticker_market: Address,
        sticker_pack: Address,
    ) -> Self {
        Self { chain_id, sticker_type, sticker_market, sticker_pack }
    }

    /// Get the hard-coded Mainnet deployment.
    pub const fn mainnet() -> Self {
        crate::chains::mainnet::STICKERS
    }

    /// Get the hard-coded Goerli deployment.
    pub const fn goerli() -> Self {
        crate::chains::goerli::STICKERS
    }

    /// Get the hard-coded Sepolia deployment.
    pub const fn sepolia() -> Self {
        crate::chains::sepolia::STICKERS
    }

    /// Get the hard-coded local test deployment.
    #[cfg(any(test, feature = "test-utils"))]
    pub const fn test() -> Self {
        crate::chains::test_utils::STICKERS
    }

    /// Load the deployment from a [`Genesis`].
    pub fn try_from_genesis(genesis: &Genesis) -> Result<Self, ConfigError> {
        let k = "stickerContracts";
        let contracts = genesis.config.extra_fields.get(k).ok_or(ConfigError::Missing(k))?;
        serde_json::from_value(contracts.clone()).map_err(Into::into)
    }

    /// True if the environment names a custom deployment, i.e.
    /// `STICKERS_CHAIN_ID` is set and non-empty.
    pub fn env_configured() -> bool {
        env_var(Self::CHAIN_ID_ENV).is_ok()
    }

    /// Load the deployment from the environment.
    ///
    /// Reads `STICKERS_CHAIN_ID`, `STICKER_TYPE_ADDRESS`,
    /// `STICKER_MARKET_ADDRESS` and `STICKER_PACK_ADDRESS`. Values are
    /// trimmed, and empty values count as missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        let contracts = Self::new(
            env_var(Self::CHAIN_ID_ENV)?.parse()?,
            env_var(Self::STICKER_TYPE_ENV)?.parse()?,
            env_var(Self::STICKER_MARKET_ENV)?.parse()?,
            env_var(Self::STICKER_PACK_ENV)?.parse()?,
        );
        tracing::debug!(chain_id = contracts.chain_id, %contracts, "loaded sticker contracts from env");
        Ok(contracts)
    }

    /// Get the chain ID.
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Get the address of the sticker type registry.
    pub const fn sticker_type(&self) -> Address {
        self.sticker_type
    }

    /// Get the address of the sticker market.
    pub const fn sticker_market(&self) -> Address {
        self.sticker_market
    }

    /// Get the address of the sticker pack registry.
    pub const fn sticker_pack(&self) -> Address {
        self.sticker_pack
    }

    /// Get the address of the contract in the given category.
    pub const fn address_for(&self, category: ContractCategory) -> Address {
        match category {
            ContractCategory::Type => self.sticker_type,
            ContractCategory::Market => self.sticker_market,
            ContractCategory::Pack => self.sticker_pack,
        }
    }

    /// Get the category of the contract at the given address.
    pub const fn const_category_of(&self, address: Address) -> Option<ContractCategory> {
        if address.const_eq(&self.sticker_type) {
            Some(ContractCategory::Type)
        } else if address.const_eq(&self.sticker_market) {
            Some(ContractCategory::Market)
        } else if address.const_eq(&self.sticker_pack) {
            Some(ContractCategory::Pack)
        } else {
            None
        }
    }

    /// Get the category of the contract at the given address.
    pub fn category_of(&self, address: Address) -> Option<ContractCategory> {
        if address == self.sticker_type {
            Some(ContractCategory::Type)
        } else if address == self.sticker_market {
            Some(ContractCategory::Market)
        } else if address == self.sticker_pack {
            Some(ContractCategory::Pack)
        } else {
            None
        }
    }

    /// True if the address is one of the sticker contracts.
    pub const fn const_is_sticker_contract(&self, address: Address) -> bool {
        self.const_category_of(address).is_some()
    }

    /// True if the address is one of the sticker contracts.
    pub fn is_sticker_contract(&self, address: Address) -> bool {
        self.category_of(address).is_some()
    }
}

impl From<KnownChains> for StickerContracts {
    fn from(chain: KnownChains) -> Self {
        chain.contracts()
    }
}

impl FromStr for StickerContracts {
    type Err = ParseChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<KnownChains>().map(Into::into)
    }
}
