use std::{fmt, str::FromStr};

/// Error type for parsing a [`ContractCategory`] from its name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sticker contract category {0}. expected one of: type, market, pack")]
pub struct ParseCategoryError(pub String);

/// The sticker contracts co-deployed on every supported network.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ContractCategory {
    /// The `StickerType` registry, holding pack metadata.
    Type,
    /// The `StickerMarket`, selling packs.
    Market,
    /// The `StickerPack` registry, minting owned packs.
    Pack,
}

impl ContractCategory {
    /// Every category, in declaration order.
    pub const ALL: [Self; 3] = [Self::Type, Self::Market, Self::Pack];

    /// The lowercase name of the category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Market => "market",
            Self::Pack => "pack",
        }
    }
}

impl fmt::Display for ContractCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "type" => Ok(Self::Type),
            "market" => Ok(Self::Market),
            "pack" => Ok(Self::Pack),
            _ => Err(ParseCategoryError(s)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_names() {
        for category in ContractCategory::ALL {
            assert_eq!(category.as_str().parse::<ContractCategory>(), Ok(category));
            assert_eq!(category.to_string().to_uppercase().parse(), Ok(category));
        }
        assert_eq!(" Market ".parse(), Ok(ContractCategory::Market));
        assert_eq!(
            "sticker".parse::<ContractCategory>(),
            Err(ParseCategoryError("sticker".to_string()))
        );
    }

    #[test]
    fn serde_names() {
        let json = serde_json::to_string(&ContractCategory::ALL).unwrap();
        assert_eq!(json, r#"["type","market","pack"]"#);

        let back: Vec<ContractCategory> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ContractCategory::ALL);
    }
}
