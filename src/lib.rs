//! Currency list engine: a persisted collection of currency records with a
//! category filter and debounced free-text search layered on top.

pub mod config;
pub mod currency;
pub mod debounce;
pub mod filter;
pub mod generator;
pub mod logging;
pub mod mvi;
pub mod search;
pub mod storage;
pub mod store;
pub mod strings;

pub use currency::{Category, CurrencyInfo};
pub use store::CurrencyStore;
