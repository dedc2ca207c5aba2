//! User-facing strings shared by every presentation surface.

pub const SEARCH_PLACEHOLDER: &str = "Search currencies...";

pub const NO_RESULTS: &str = "No Results";

pub const FILTER_ALL: &str = "All";
pub const FILTER_CRYPTO: &str = "Crypto";
pub const FILTER_FIAT: &str = "Fiat";

pub const CLEAR_DATA: &str = "Clear Data";
pub const ADD_RANDOM_CURRENCY: &str = "Add Random Currency";
pub const RESET_DATA: &str = "Reset Data";

/// Suggestion shown under the empty state, e.g. `Try "BTC"`.
pub fn search_hint(suggestion: &str) -> String {
    format!("Try \"{}\"", suggestion)
}
