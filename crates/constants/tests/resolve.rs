use alloy::primitives::{address, Address};
use stickers_constants::{
    resolve, sticker_market_address, sticker_pack_address, sticker_type_address, AddressRegistry,
    ChainNotSupported, ContractCategory, KnownChains, StickerContracts,
};

#[test]
fn mainnet_sticker_type() {
    assert_eq!(
        sticker_type_address(1),
        Ok(address!("0x0577215622f43a39f4bc9640806dfea9b10d2a36"))
    );
}

#[test]
fn goerli_sticker_market() {
    assert_eq!(
        sticker_market_address(5),
        Ok(address!("0xf1e149a7df70d5ff1e265daaa738d785d3274717"))
    );
}

#[test]
fn sepolia_sticker_pack() {
    assert_eq!(
        sticker_pack_address(11155111),
        Ok(address!("0x8cc272396be7583c65bee82cd7b743c69a87287d"))
    );
}

#[test]
fn unsupported_chain() {
    assert_eq!(sticker_type_address(42), Err(ChainNotSupported));
    for category in ContractCategory::ALL {
        assert_eq!(resolve(999999, category), Err(ChainNotSupported));
    }
}

#[test]
fn only_documented_chains_resolve() {
    let mut ids: Vec<u64> = KnownChains::ALL.iter().map(KnownChains::chain_id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 5, 11155111]);

    // local dev chain ids have no deployment, whatever features are enabled
    for chain_id in [31337, 1337] {
        for category in ContractCategory::ALL {
            assert_eq!(resolve(chain_id, category), Err(ChainNotSupported));
        }
    }
}

#[test]
fn every_known_chain_has_all_contracts() {
    assert_eq!(KnownChains::ALL.len(), 3);
    for &chain in KnownChains::ALL {
        let id = chain.chain_id();
        let addresses =
            [sticker_type_address(id), sticker_market_address(id), sticker_pack_address(id)];
        for address in addresses {
            let address = address.expect("known chain");
            assert_ne!(address, Address::ZERO);
            assert_eq!(address.len(), 20);
        }
        assert_eq!(StickerContracts::from(chain).chain_id(), id);
    }
}

#[test]
fn tables_are_independent() {
    // a miss in one category says nothing about the others
    let registry = AddressRegistry::known();
    assert_eq!(registry.sticker_pack(42), Err(ChainNotSupported));
    assert_eq!(registry.sticker_type(5), sticker_type_address(5));
    assert_eq!(registry.sticker_market(5), sticker_market_address(5));
    assert_eq!(registry.sticker_pack(5), sticker_pack_address(5));
}

#[test]
fn parse_chain_names() {
    let sepolia: StickerContracts = "sepolia".parse().unwrap();
    assert_eq!(sepolia.sticker_type(), stickers_constants::sepolia::STICKER_TYPE);
    assert!("localnet".parse::<KnownChains>().is_err());
}
