//! Reproducible random streams keyed by restaurant and decision.
//!
//! Every independent random decision for a restaurant draws from its own
//! stream: one for the restaurant as a whole (`"base"`), one per item name.
//! Adding or reordering draws for one item therefore never shifts the values
//! produced for another.

use rand::rngs::StdRng;
use rand::SeedableRng;
use sha2::{Digest, Sha256};

/// Restaurant id used when the metadata carries none.
pub const FALLBACK_RESTAURANT_ID: &str = "unknown";

/// Sub-key for restaurant-wide decisions (variant selection, delivery).
pub const BASE_SUB_KEY: &str = "base";

/// Generator returned by [`seeded_rng`].
pub type SeededRng = StdRng;

fn digest(restaurant_id: &str, sub_key: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(format!("{}:{}", restaurant_id, sub_key).as_bytes());
    let digest = hasher.finalize();
    let mut seed = [0u8; 32];
    seed.copy_from_slice(&digest);
    seed
}

/// Hex form of the seed for `(restaurant_id, sub_key)`, for logging.
pub fn seed_hex(restaurant_id: &str, sub_key: &str) -> String {
    hex::encode(digest(restaurant_id, sub_key))
}

/// Create the random stream for `(restaurant_id, sub_key)`.
///
/// The stream is seeded from the SHA-256 digest of `"{restaurant_id}:{sub_key}"`,
/// so its entire sequence is a pure function of the two strings.
pub fn seeded_rng(restaurant_id: &str, sub_key: &str) -> SeededRng {
    StdRng::from_seed(digest(restaurant_id, sub_key))
}
