//! Category filter policy.

use std::borrow::Cow;

use crate::currency::{is_crypto, Category, CurrencyInfo};

/// Narrow `records` to the given category, preserving order.
///
/// `Category::All` borrows the input untouched; the other selectors allocate
/// a filtered copy.
pub fn apply_category(records: &[CurrencyInfo], category: Category) -> Cow<'_, [CurrencyInfo]> {
    match category {
        Category::All => Cow::Borrowed(records),
        Category::Crypto => Cow::Owned(records.iter().filter(|c| is_crypto(c)).cloned().collect()),
        Category::Fiat => Cow::Owned(records.iter().filter(|c| !is_crypto(c)).cloned().collect()),
    }
}
