/// Mainnet chain constants.
pub mod mainnet;

/// Goerli testnet chain constants.
pub mod goerli;

/// Sepolia testnet chain constants.
pub mod sepolia;

/// Test utilities for chains.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
