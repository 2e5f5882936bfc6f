use alloy::primitives::Address;
use stickers_constants::{
    sticker_type_address, AddressRegistry, ChainNotSupported, ConfigError, StickerContracts,
};

// All environment manipulation lives in one test so nothing races on the
// process environment.
#[test]
fn load_from_env() {
    std::env::remove_var(StickerContracts::CHAIN_ID_ENV);
    let registry = AddressRegistry::from_env().unwrap();
    assert_eq!(registry, AddressRegistry::known());

    assert!(matches!(
        StickerContracts::from_env(),
        Err(ConfigError::Var(var)) if var == StickerContracts::CHAIN_ID_ENV
    ));

    // an empty chain id does not configure a custom deployment
    std::env::set_var(StickerContracts::CHAIN_ID_ENV, "  ");
    assert_eq!(AddressRegistry::from_env().unwrap(), AddressRegistry::known());

    std::env::set_var(StickerContracts::CHAIN_ID_ENV, " 1337 ");
    std::env::set_var(
        StickerContracts::STICKER_TYPE_ENV,
        "0x1111111111111111111111111111111111111111",
    );
    std::env::set_var(
        StickerContracts::STICKER_MARKET_ENV,
        "0x2222222222222222222222222222222222222222",
    );
    std::env::set_var(StickerContracts::STICKER_PACK_ENV, "not an address");
    assert!(matches!(StickerContracts::from_env(), Err(ConfigError::Hex(_))));

    std::env::set_var(
        StickerContracts::STICKER_PACK_ENV,
        "0x3333333333333333333333333333333333333333\n",
    );
    let contracts = StickerContracts::from_env().unwrap();
    assert_eq!(
        contracts,
        StickerContracts::new(
            1337,
            Address::repeat_byte(0x11),
            Address::repeat_byte(0x22),
            Address::repeat_byte(0x33),
        )
    );

    let registry = AddressRegistry::from_env().unwrap();
    assert_eq!(registry.sticker_pack(1337), Ok(Address::repeat_byte(0x33)));
    assert_eq!(registry.len(), AddressRegistry::known().len() + 1);
    // the compiled-in lookups ignore the environment
    assert_eq!(sticker_type_address(1337), Err(ChainNotSupported));

    // a custom deployment may not shadow a known chain
    std::env::set_var(StickerContracts::CHAIN_ID_ENV, "1");
    assert!(matches!(AddressRegistry::from_env(), Err(ConfigError::DuplicateChain(1))));

    std::env::set_var(StickerContracts::CHAIN_ID_ENV, "one");
    assert!(matches!(StickerContracts::from_env(), Err(ConfigError::Parse(_))));

    for key in [
        StickerContracts::CHAIN_ID_ENV,
        StickerContracts::STICKER_TYPE_ENV,
        StickerContracts::STICKER_MARKET_ENV,
        StickerContracts::STICKER_PACK_ENV,
    ] {
        std::env::remove_var(key);
    }
}
