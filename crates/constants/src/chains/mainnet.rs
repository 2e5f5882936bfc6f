//! Constants for the Mainnet.

use crate::StickerContracts;
use alloy::primitives::{address, Address};

/// Name for the chain.
pub const NAME: &str = "Mainnet";
/// Chain ID for Mainnet.
pub const CHAIN_ID: u64 = 1;

/// `StickerType` contract address on Mainnet.
pub const STICKER_TYPE: Address = address!("0x0577215622f43a39f4bc9640806dfea9b10d2a36");
/// `StickerMarket` contract address on Mainnet.
pub const STICKER_MARKET: Address = address!("0x12824271339304d3a9f7e096e62a2a7e73b4a7e7");
/// `StickerPack` contract address on Mainnet.
pub const STICKER_PACK: Address = address!("0x110101156e8f0743948b2a61afcf3994a8fb172e");

/// Sticker contracts deployed on Mainnet.
pub const STICKERS: StickerContracts =
    StickerContracts::new(CHAIN_ID, STICKER_TYPE, STICKER_MARKET, STICKER_PACK);
