use crate::currency::{Category, CurrencyInfo};
use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum CurrencyIntent {
    /// Initial load finished; carries persisted records or the seed set.
    Loaded(Vec<CurrencyInfo>),
    Clear,
    /// Append one record at the end of the raw collection.
    Append(CurrencyInfo),
    /// Replace the raw collection with the seed set.
    Reset,
    SetCategory(Category),
    /// New settled search query.
    SetQuery(String),
}

impl Intent for CurrencyIntent {
    fn is_persistent(&self) -> bool {
        matches!(self, Self::Clear | Self::Append(_) | Self::Reset)
    }
}

impl CurrencyIntent {
    /// Short name for log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Loaded(_) => "loaded",
            Self::Clear => "clear",
            Self::Append(_) => "append",
            Self::Reset => "reset",
            Self::SetCategory(_) => "set_category",
            Self::SetQuery(_) => "set_query",
        }
    }
}
