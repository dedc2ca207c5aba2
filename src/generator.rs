//! Synthetic currency records for the "Add Random Currency" action.

use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;
use tinyrand::{Rand, Seeded, StdRand};

use crate::currency::CurrencyInfo;

const CURRENCY_GLYPHS: &[&str] = &["$", "€", "£", "¥", "₹", "₪", "₩", "₴", "₽"];

const SAMPLE_NAMES: &[&str] = &[
    // crypto-flavoured
    "Solar", "Quantum", "Nexus", "Phoenix", "Dragon", "Titan", "Atlas", "Nova", "Omega", "Alpha",
    "Delta", "Sigma", "Vector", "Cyber", "Meta", "Hyper",
    // country-flavoured
    "Northern", "Southern", "Eastern", "Western", "United", "Federal", "Republic", "Kingdom",
    "State", "Empire", "Union", "Commonwealth", "Democratic", "Central",
];

const CRYPTO_NAME_SUFFIX: &str = "Coin";
const FIAT_NAME_SUFFIX: &str = "Currency";

/// Source of new records for the store.
///
/// Uniqueness of `id` against the existing collection is the generator's
/// job; the store appends whatever it gets.
pub trait RecordGenerator: Send + Sync + 'static {
    fn generate(&self) -> CurrencyInfo;
}

impl<F> RecordGenerator for F
where
    F: Fn() -> CurrencyInfo + Send + Sync + 'static,
{
    fn generate(&self) -> CurrencyInfo {
        self()
    }
}

/// Coin-flip generator producing either a crypto-shaped or a fiat-shaped record.
///
/// Tickers are three random uppercase letters; ids are UUID v4 so they never
/// collide with existing rows.
pub struct RandomCurrencyGenerator {
    rng: Mutex<StdRand>,
}

impl RandomCurrencyGenerator {
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::with_seed(seed)
    }

    /// Deterministic generator, for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRand::seed(seed)),
        }
    }
}

impl Default for RandomCurrencyGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordGenerator for RandomCurrencyGenerator {
    fn generate(&self) -> CurrencyInfo {
        let mut rng = self.rng.lock();
        let is_crypto = rng.next_u64() & 1 == 0;
        let word = pick(&mut rng, SAMPLE_NAMES);
        let ticker = random_ticker(&mut rng);
        let id = uuid::Uuid::new_v4().to_string();

        if is_crypto {
            CurrencyInfo::crypto(id, format!("{} {}", word, CRYPTO_NAME_SUFFIX), ticker)
        } else {
            let glyph = pick(&mut rng, CURRENCY_GLYPHS);
            CurrencyInfo::fiat(id, format!("{} {}", word, FIAT_NAME_SUFFIX), glyph, ticker)
        }
    }
}

fn pick<'a>(rng: &mut StdRand, items: &[&'a str]) -> &'a str {
    items[(rng.next_u64() % items.len() as u64) as usize]
}

fn random_ticker(rng: &mut StdRand) -> String {
    (0..3)
        .map(|_| (b'A' + (rng.next_u64() % 26) as u8) as char)
        .collect()
}
