//! Restaurant metadata as delivered by a restaurant-search provider.

use serde::{Deserialize, Deserializer, Serialize};

/// Display name used when a restaurant has none.
pub const DEFAULT_RESTAURANT_NAME: &str = "Unknown Restaurant";

/// Coarse price tier, mirroring Google Places' `priceLevel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PriceLevel {
    #[serde(rename = "PRICE_LEVEL_FREE")]
    Free,
    #[serde(rename = "PRICE_LEVEL_INEXPENSIVE")]
    Inexpensive,
    #[serde(rename = "PRICE_LEVEL_MODERATE")]
    Moderate,
    #[serde(rename = "PRICE_LEVEL_EXPENSIVE")]
    Expensive,
    #[serde(rename = "PRICE_LEVEL_VERY_EXPENSIVE")]
    VeryExpensive,
}

impl PriceLevel {
    /// All tiers, cheapest first.
    pub const ALL: [PriceLevel; 5] = [
        PriceLevel::Free,
        PriceLevel::Inexpensive,
        PriceLevel::Moderate,
        PriceLevel::Expensive,
        PriceLevel::VeryExpensive,
    ];

    /// Parse a tier name.
    ///
    /// Accepts the Places form (`PRICE_LEVEL_MODERATE`) and the bare form
    /// (`MODERATE`), case-insensitively. Anything else, including Google's
    /// `PRICE_LEVEL_UNSPECIFIED`, is treated as unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        let upper = value.trim().to_ascii_uppercase();
        let bare = upper.strip_prefix("PRICE_LEVEL_").unwrap_or(&upper);
        match bare {
            "FREE" => Some(Self::Free),
            "INEXPENSIVE" => Some(Self::Inexpensive),
            "MODERATE" => Some(Self::Moderate),
            "EXPENSIVE" => Some(Self::Expensive),
            "VERY_EXPENSIVE" => Some(Self::VeryExpensive),
            _ => None,
        }
    }

    /// Places wire name, e.g. `PRICE_LEVEL_MODERATE`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "PRICE_LEVEL_FREE",
            Self::Inexpensive => "PRICE_LEVEL_INEXPENSIVE",
            Self::Moderate => "PRICE_LEVEL_MODERATE",
            Self::Expensive => "PRICE_LEVEL_EXPENSIVE",
            Self::VeryExpensive => "PRICE_LEVEL_VERY_EXPENSIVE",
        }
    }

    /// Short lowercase label for display (`moderate`, `very_expensive`).
    pub fn label(&self) -> String {
        self.as_str()["PRICE_LEVEL_".len()..].to_ascii_lowercase()
    }
}

impl std::fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized tier strings become `None` instead of failing the whole record.
fn deserialize_price_level<'de, D>(deserializer: D) -> Result<Option<PriceLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(PriceLevel::parse))
}

/// Price-range bounds as callers actually send them.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDollars {
    Whole(u64),
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

impl RawDollars {
    fn whole_dollars(self) -> Option<u32> {
        match self {
            RawDollars::Whole(n) => u32::try_from(n).ok(),
            RawDollars::Number(x) => {
                if x.is_finite() && x >= 0.0 && x.fract() == 0.0 && x <= f64::from(u32::MAX) {
                    Some(x as u32)
                } else {
                    None
                }
            }
            RawDollars::Text(s) => s.trim().parse().ok(),
            RawDollars::Other(_) => None,
        }
    }
}

/// Whole floats (`20.0`) and numeric strings count; negative, fractional or
/// otherwise unusable bounds become `None`.
fn deserialize_whole_dollars<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawDollars> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(RawDollars::whole_dollars))
}

/// Public metadata for one restaurant.
///
/// Only `id`, `name`, `price_level`, `price_range_low` and `delivery` feed
/// menu generation. The remaining fields are carried through from search
/// results for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestaurantMetadata {
    /// Stable place identifier, the seed for every generated value.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_price_level")]
    pub price_level: Option<PriceLevel>,
    /// Lower bound of the typical per-person spend, in whole dollars.
    #[serde(default, deserialize_with = "deserialize_whole_dollars")]
    pub price_range_low: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_whole_dollars")]
    pub price_range_high: Option<u32>,
    /// `None` when the provider does not know.
    #[serde(default)]
    pub delivery: Option<bool>,
    #[serde(default)]
    pub types: Vec<String>,
}

impl RestaurantMetadata {
    /// Metadata with only an id set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_price_level(mut self, level: PriceLevel) -> Self {
        self.price_level = Some(level);
        self
    }

    pub fn with_price_range_low(mut self, low: u32) -> Self {
        self.price_range_low = Some(low);
        self
    }

    pub fn with_delivery(mut self, delivery: bool) -> Self {
        self.delivery = Some(delivery);
        self
    }

    /// Display name, falling back to [`DEFAULT_RESTAURANT_NAME`].
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_RESTAURANT_NAME)
    }
}
