//! Currency records and category classification.
//!
//! A record is fiat when it carries an ISO-style `code` and crypto otherwise.
//! Nothing enforces this beyond convention: callers must not set `code` on
//! values meant to be crypto.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single entry of the currency collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyInfo {
    /// Stable identity key, unique within a collection.
    pub id: String,
    /// Human-readable display name (e.g. "Bitcoin").
    pub name: String,
    /// Short glyph or ticker (e.g. "BTC", "€").
    pub symbol: String,
    /// Present for fiat currencies only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl CurrencyInfo {
    pub fn crypto(id: impl Into<String>, name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            symbol: symbol.into(),
            code: None,
        }
    }

    pub fn fiat(
        id: impl Into<String>,
        name: impl Into<String>,
        symbol: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            symbol: symbol.into(),
            code: Some(code.into()),
        }
    }

    pub fn category(&self) -> Category {
        if is_crypto(self) {
            Category::Crypto
        } else {
            Category::Fiat
        }
    }
}

/// True iff the record has no `code`.
pub fn is_crypto(record: &CurrencyInfo) -> bool {
    record.code.is_none()
}

pub fn is_fiat(record: &CurrencyInfo) -> bool {
    !is_crypto(record)
}

/// Active category selection of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    Crypto,
    Fiat,
}

impl Category {
    /// Stable lowercase key used in config files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Crypto => "crypto",
            Self::Fiat => "fiat",
        }
    }

    /// Display label for filter controls.
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => crate::strings::FILTER_ALL,
            Self::Crypto => crate::strings::FILTER_CRYPTO,
            Self::Fiat => crate::strings::FILTER_FIAT,
        }
    }

    /// All variants in display order.
    pub fn all() -> &'static [Category] {
        &[Self::All, Self::Crypto, Self::Fiat]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a textual category selector is not one of `all`, `crypto`, `fiat`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown currency category '{0}' (expected one of: all, crypto, fiat)")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "crypto" => Ok(Self::Crypto),
            "fiat" => Ok(Self::Fiat),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

/// The seed collection: 14 crypto records followed by 3 fiat records.
pub fn seed_currencies() -> Vec<CurrencyInfo> {
    let crypto = [
        ("BTC", "Bitcoin"),
        ("ETH", "Ethereum"),
        ("XRP", "XRP"),
        ("BCH", "Bitcoin Cash"),
        ("LTC", "Litecoin"),
        ("EOS", "EOS"),
        ("BNB", "Binance Coin"),
        ("LINK", "Chainlink"),
        ("NEO", "NEO"),
        ("ETC", "Ethereum Classic"),
        ("ONT", "Ontology"),
        ("CRO", "Crypto.com Chain"),
        ("CUC", "Cucumber"),
        ("USDC", "USD Coin"),
    ];
    let fiat = [
        ("SGD", "Singapore Dollar", "$"),
        ("EUR", "Euro", "€"),
        ("GBP", "British Pound", "£"),
    ];

    crypto
        .into_iter()
        .map(|(ticker, name)| CurrencyInfo::crypto(ticker, name, ticker))
        .chain(
            fiat.into_iter()
                .map(|(code, name, symbol)| CurrencyInfo::fiat(code, name, symbol, code)),
        )
        .collect()
}
