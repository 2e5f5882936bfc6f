use crate::{ChainNotSupported, ConfigError, ContractCategory, KnownChains, StickerContracts};
use alloy::{genesis::Genesis, primitives::Address};
use std::borrow::Cow;

/// Every compiled-in sticker deployment.
pub const KNOWN_DEPLOYMENTS: &[StickerContracts] = &[
    crate::chains::mainnet::STICKERS,
    crate::chains::goerli::STICKERS,
    crate::chains::sepolia::STICKERS,
];

/// Resolve the address of a sticker contract on the given chain.
///
/// Returns [`ChainNotSupported`] if the chain has no known deployment.
pub const fn resolve(
    chain_id: u64,
    category: ContractCategory,
) -> Result<Address, ChainNotSupported> {
    match KnownChains::from_chain_id(chain_id) {
        Some(chain) => Ok(chain.contracts().address_for(category)),
        None => Err(ChainNotSupported),
    }
}

/// Resolve the `StickerType` address on the given chain.
pub const fn sticker_type_address(chain_id: u64) -> Result<Address, ChainNotSupported> {
    resolve(chain_id, ContractCategory::Type)
}

/// Resolve the `StickerMarket` address on the given chain.
pub const fn sticker_market_address(chain_id: u64) -> Result<Address, ChainNotSupported> {
    resolve(chain_id, ContractCategory::Market)
}

/// Resolve the `StickerPack` address on the given chain.
pub const fn sticker_pack_address(chain_id: u64) -> Result<Address, ChainNotSupported> {
    resolve(chain_id, ContractCategory::Pack)
}

/// A table of sticker deployments, keyed by chain id.
///
/// [`AddressRegistry::known`] is the compiled-in table, and behaves exactly
/// like the free functions in this crate. Hosts that also talk to private or
/// development networks can extend it with further deployments. Chain ids are
/// unique within a registry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<StickerContracts>", into = "Vec<StickerContracts>")]
pub struct AddressRegistry {
    deployments: Cow<'static, [StickerContracts]>,
}

impl Default for AddressRegistry {
    fn default() -> Self {
        Self::known()
    }
}

impl AddressRegistry {
    /// The compiled-in deployments.
    pub const fn known() -> Self {
        Self { deployments: Cow::Borrowed(KNOWN_DEPLOYMENTS) }
    }

    /// Create a registry from a list of deployments. Fails if two
    /// deployments share a chain id.
    pub fn try_from_deployments(deployments: Vec<StickerContracts>) -> Result<Self, ConfigError> {
        deployments.into_iter().try_fold(
            Self { deployments: Cow::Owned(Vec::new()) },
            Self::with_deployment,
        )
    }

    /// Add a deployment. Fails if the chain already has one.
    pub fn with_deployment(mut self, contracts: StickerContracts) -> Result<Self, ConfigError> {
        if self.is_supported(contracts.chain_id()) {
            return Err(ConfigError::DuplicateChain(contracts.chain_id()));
        }
        tracing::debug!(chain_id = contracts.chain_id(), %contracts, "registered sticker deployment");
        self.deployments.to_mut().push(contracts);
        Ok(self)
    }

    /// Load the compiled-in deployments, plus a custom deployment from the
    /// environment if `STICKERS_CHAIN_ID` is set.
    ///
    /// See [`StickerContracts::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, ConfigError> {
        let registry = Self::known();
        if !StickerContracts::env_configured() {
            return Ok(registry);
        }
        registry.with_deployment(StickerContracts::from_env()?)
    }

    /// Load the deployments from a [`Genesis`].
    pub fn try_from_genesis(genesis: &Genesis) -> Result<Self, ConfigError> {
        let k = "stickerDeployments";
        let deployments = genesis.config.extra_fields.get(k).ok_or(ConfigError::Missing(k))?;
        serde_json::from_value(deployments.clone()).map_err(Into::into)
    }

    /// Get the deployment on the given chain, if any.
    pub fn deployment(&self, chain_id: u64) -> Option<&StickerContracts> {
        self.deployments.iter().find(|c| c.chain_id() == chain_id)
    }

    /// True if the chain has a sticker deployment.
    pub fn is_supported(&self, chain_id: u64) -> bool {
        self.deployment(chain_id).is_some()
    }

    /// Resolve the address of a sticker contract on the given chain.
    pub fn resolve(
        &self,
        chain_id: u64,
        category: ContractCategory,
    ) -> Result<Address, ChainNotSupported> {
        self.deployment(chain_id).map(|c| c.address_for(category)).ok_or(ChainNotSupported)
    }

    /// Resolve the `StickerType` address on the given chain.
    pub fn sticker_type(&self, chain_id: u64) -> Result<Address, ChainNotSupported> {
        self.resolve(chain_id, ContractCategory::Type)
    }

    /// Resolve the `StickerMarket` address on the given chain.
    pub fn sticker_market(&self, chain_id: u64) -> Result<Address, ChainNotSupported> {
        self.resolve(chain_id, ContractCategory::Market)
    }

    /// Resolve the `StickerPack` address on the given chain.
    pub fn sticker_pack(&self, chain_id: u64) -> Result<Address, ChainNotSupported> {
        self.resolve(chain_id, ContractCategory::Pack)
    }

    /// Iterate over the chain ids with a deployment.
    pub fn chain_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.deployments.iter().map(StickerContracts::chain_id)
    }

    /// Iterate over the deployments.
    pub fn iter(&self) -> impl Iterator<Item = &StickerContracts> {
        self.deployments.iter()
    }

    /// Number of deployments.
    pub fn len(&self) -> usize {
        self.deployments.len()
    }

    /// True if the registry has no deployments.
    pub fn is_empty(&self) -> bool {
        self.deployments.is_empty()
    }
}

impl TryFrom<Vec<StickerContracts>> for AddressRegistry {
    type Error = ConfigError;

    fn try_from(deployments: Vec<StickerContracts>) -> Result<Self, Self::Error> {
        Self::try_from_deployments(deployments)
    }
}

impl From<AddressRegistry> for Vec<StickerContracts> {
    fn from(registry: AddressRegistry) -> Self {
        registry.deployments.into_owned()
    }
}
