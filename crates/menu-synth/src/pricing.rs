//! Price calibration from a tier and an optional real price range.

use rand::Rng;

use crate::restaurant::PriceLevel;

/// Tuna roll price band used when the tier is unset or unrecognized.
pub const DEFAULT_PRICE_RANGE: (f64, f64) = (8.00, 14.00);

/// A tuna roll costs this share of the per-person spend (`price_range_low`).
pub const TUNA_SHARE_OF_SPEND: (f64, f64) = (0.30, 0.55);

impl PriceLevel {
    /// Tuna roll price band for this tier, in dollars.
    pub fn tuna_price_range(&self) -> (f64, f64) {
        match self {
            Self::Free => (4.00, 6.00),
            Self::Inexpensive => (5.00, 8.00),
            Self::Moderate => (8.00, 13.00),
            Self::Expensive => (14.00, 20.00),
            Self::VeryExpensive => (18.00, 28.00),
        }
    }
}

/// Bounds a calibrated price is drawn from.
///
/// A positive `price_range_low` raises the low end to `0.30 * low` when that is
/// higher, and lowers the high end to `0.55 * low` only if that estimate still
/// sits above the new low end. Otherwise the tier's high end is kept, which
/// can leave `low > high` when the spend estimate dwarfs the tier; callers
/// sample between the two bounds in either order.
pub fn price_bounds(price_level: Option<PriceLevel>, price_range_low: Option<u32>) -> (f64, f64) {
    let (mut low, mut high) = price_level
        .map(|level| level.tuna_price_range())
        .unwrap_or(DEFAULT_PRICE_RANGE);

    if let Some(spend) = price_range_low.filter(|&spend| spend > 0) {
        let spend = f64::from(spend);
        let estimated_low = spend * TUNA_SHARE_OF_SPEND.0;
        let estimated_high = spend * TUNA_SHARE_OF_SPEND.1;
        low = low.max(estimated_low);
        if estimated_high > low {
            high = high.min(estimated_high);
        }
    }

    (low, high)
}

/// Uniform draw between `a` and `b`, in either order.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64) -> f64 {
    a + (b - a) * rng.gen::<f64>()
}

/// Round to whole cents.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Snap a raw price to a menu ending: nearest half dollar, minus one cent.
///
/// `9.20` becomes `8.99`, `9.30` becomes `9.49`.
pub fn snap_price(raw: f64) -> f64 {
    round_cents((raw * 2.0).round() / 2.0 - 0.01)
}

/// Draw one calibrated price from `rng`.
///
/// Each menu item calls this with its own stream, so items within one
/// restaurant get independent but reproducible prices.
pub fn calibrated_price<R: Rng + ?Sized>(
    rng: &mut R,
    price_level: Option<PriceLevel>,
    price_range_low: Option<u32>,
) -> f64 {
    let (low, high) = price_bounds(price_level, price_range_low);
    snap_price(uniform(rng, low, high))
}
