//! Constants for the Sepolia testnet.

use crate::StickerContracts;
use alloy::primitives::{address, Address};

/// Name for the chain.
pub const NAME: &str = "Sepolia";
/// Chain ID for the Sepolia testnet.
pub const CHAIN_ID: u64 = 11155111;

/// `StickerType` contract address on the Sepolia testnet.
pub const STICKER_TYPE: Address = address!("0x5acbae26c23427aeee0a7f26949f093577a61aab");
/// `StickerMarket` contract address on the Sepolia testnet.
pub const STICKER_MARKET: Address = address!("0xf852198d0385c4b871e0b91804ecd47c6ba97351");
/// `StickerPack` contract address on the Sepolia testnet.
pub const STICKER_PACK: Address = address!("0x8cc272396be7583c65bee82cd7b743c69a87287d");

/// Sticker contracts deployed on the Sepolia testnet.
pub const STICKERS: StickerContracts =
    StickerContracts::new(CHAIN_ID, STICKER_TYPE, STICKER_MARKET, STICKER_PACK);
