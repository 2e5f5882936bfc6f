//! Sticker contract addresses.
//!
//! This crate contains the deployed addresses of the sticker contracts (the
//! sticker type registry, the sticker market, and the sticker pack registry)
//! for every network they are deployed on, and the lookups used to resolve
//! them by chain id.
//!
//! ```
//! use stickers_constants::{sticker_type_address, ChainNotSupported};
//!
//! assert_eq!(
//!     sticker_type_address(1),
//!     Ok(stickers_constants::mainnet::STICKER_TYPE)
//! );
//! assert_eq!(sticker_type_address(42), Err(ChainNotSupported));
//! ```

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod chains;
pub use chains::{goerli, mainnet, sepolia};
#[cfg(any(test, feature = "test-utils"))]
pub use chains::test_utils;

mod registry;
pub use registry::{
    resolve, sticker_market_address, sticker_pack_address, sticker_type_address,
    AddressRegistry, KNOWN_DEPLOYMENTS,
};

mod types;
pub use types::{
    ChainNotSupported, ConfigError, ContractCategory, KnownChains, ParseCategoryError,
    ParseChainError, StickerContracts,
};
