//! Free-text search over a currency list.
//!
//! Matching is case-insensitive substring containment on `name`, `symbol`
//! and, for fiat records, `code`. No ranking: results keep input order.

use std::borrow::Cow;

use crate::currency::CurrencyInfo;
use crate::strings;

/// Keep the records matching `query`. An empty query borrows the input untouched.
pub fn search<'a>(records: &'a [CurrencyInfo], query: &str) -> Cow<'a, [CurrencyInfo]> {
    if query.is_empty() {
        return Cow::Borrowed(records);
    }

    let term = query.to_lowercase();
    Cow::Owned(
        records
            .iter()
            .filter(|record| matches(record, &term))
            .cloned()
            .collect(),
    )
}

/// `term` must already be lower-cased.
fn matches(record: &CurrencyInfo, term: &str) -> bool {
    if record.name.to_lowercase().contains(term) {
        return true;
    }
    if record.symbol.to_lowercase().contains(term) {
        return true;
    }
    record
        .code
        .as_deref()
        .is_some_and(|code| code.to_lowercase().contains(term))
}

/// Suggestion for the empty state, built from the first record.
///
/// Prefers `code`, then `symbol`. Empty when there is nothing to suggest.
pub fn search_hint(records: &[CurrencyInfo]) -> String {
    let Some(first) = records.first() else {
        return String::new();
    };

    let suggestion = first
        .code
        .as_deref()
        .filter(|code| !code.is_empty())
        .unwrap_or(first.symbol.as_str());

    if suggestion.is_empty() {
        String::new()
    } else {
        strings::search_hint(suggestion)
    }
}
