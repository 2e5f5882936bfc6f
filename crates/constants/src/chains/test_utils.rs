//! Constants for local test chains.

use crate::StickerContracts;
use alloy::primitives::Address;

/// Name for the chain.
pub const NAME: &str = "Test";
/// Test chain id. Matches the default of local dev nodes.
pub const CHAIN_ID: u64 = 31337;

/// Test address for the `StickerType` contract.
pub const STICKER_TYPE: Address = Address::repeat_byte(0x11);
/// Test address for the `StickerMarket` contract.
pub const STICKER_MARKET: Address = Address::repeat_byte(0x22);
/// Test address for the `StickerPack` contract.
pub const STICKER_PACK: Address = Address::repeat_byte(0x33);

/// Sticker contracts for unit tests.
pub const STICKERS: StickerContracts =
    StickerContracts::new(CHAIN_ID, STICKER_TYPE, STICKER_MARKET, STICKER_PACK);
