//! Constants for the Goerli testnet.

use crate::StickerContracts;
use alloy::primitives::{address, Address};

/// Name for the chain.
pub const NAME: &str = "Goerli";
/// Chain ID for the Goerli testnet.
pub const CHAIN_ID: u64 = 5;

/// `StickerType` contract address on the Goerli testnet.
pub const STICKER_TYPE: Address = address!("0x07f7cb0c0a4ff77e590f3b2a2bd9e3a0a1d5fdd2");
/// `StickerMarket` contract address on the Goerli testnet.
pub const STICKER_MARKET: Address = address!("0xf1e149a7df70d5ff1e265daaa738d785d3274717");
/// `StickerPack` contract address on the Goerli testnet.
pub const STICKER_PACK: Address = address!("0x8d3fd2ea24bd53a8bd2b1026727db8bbe9a8c8af");

/// Sticker contracts deployed on the Goerli testnet.
pub const STICKERS: StickerContracts =
    StickerContracts::new(CHAIN_ID, STICKER_TYPE, STICKER_MARKET, STICKER_PACK);
