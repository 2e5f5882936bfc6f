mod error;
pub use error::{ChainNotSupported, ConfigError};

mod category;
pub use category::{ContractCategory, ParseCategoryError};

mod chains;
pub use chains::{KnownChains, ParseChainError};

mod contracts;
pub use contracts::StickerContracts;
