use serde::{Deserialize, Serialize};

/// A single stem offered in the bouquet constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flower {
    pub id: u32,
    pub name: String,
    /// Unit price in rubles, always positive.
    pub price: u32,
    /// Image reference, kept as an opaque string and never fetched.
    pub image: String,
    /// Stems on display. Informational only, never decremented.
    pub available: u32,
}

/// A pre-assembled bouquet from the showcase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bouquet {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: u32,
    pub image: String,
}

/// Reference to a catalog entry. Cart additions arrive as references and
/// are resolved against the catalog, so cart lines never carry
/// client-supplied names or prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogRef {
    Flower(u32),
    Bouquet(u32),
}

impl std::fmt::Display for CatalogRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogRef::Flower(id) => write!(f, "flower:{}", id),
            CatalogRef::Bouquet(id) => write!(f, "bouquet:{}", id),
        }
    }
}

impl std::str::FromStr for CatalogRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, id) = s
            .split_once(':')
            .ok_or_else(|| format!("Invalid catalog reference: {}", s))?;
        let id: u32 = id
            .parse()
            .map_err(|_| format!("Invalid catalog reference: {}", s))?;
        match kind {
            "flower" => Ok(CatalogRef::Flower(id)),
            "bouquet" => Ok(CatalogRef::Bouquet(id)),
            _ => Err(format!("Invalid catalog reference: {}", s)),
        }
    }
}
