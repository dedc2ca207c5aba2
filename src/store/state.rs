use crate::currency::{Category, CurrencyInfo};
use crate::filter::apply_category;
use crate::mvi::ViewState;
use crate::search::{search, search_hint};

/// Raw collection, selectors and the list derived from them.
///
/// `visible` is only ever produced by [`CurrencyViewState::recompute`], so it
/// always equals `search(apply_category(raw, category), query)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyViewState {
    pub(super) raw: Vec<CurrencyInfo>,
    pub(super) category: Category,
    pub(super) query: String,
    pub(super) visible: Vec<CurrencyInfo>,
    pub(super) is_loading: bool,
}

impl Default for CurrencyViewState {
    fn default() -> Self {
        Self {
            raw: Vec::new(),
            category: Category::All,
            query: String::new(),
            visible: Vec::new(),
            is_loading: true,
        }
    }
}

impl ViewState for CurrencyViewState {}

impl CurrencyViewState {
    pub fn raw(&self) -> &[CurrencyInfo] {
        &self.raw
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Effective (settled) search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn visible(&self) -> &[CurrencyInfo] {
        &self.visible
    }

    /// True until the first storage read has completed.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Empty-state suggestion: only set when the search emptied a non-empty category.
    pub fn hint(&self) -> String {
        if !self.visible.is_empty() {
            return String::new();
        }
        search_hint(&apply_category(&self.raw, self.category))
    }

    pub(super) fn recompute(mut self) -> Self {
        self.visible = derive_visible(&self.raw, self.category, &self.query);
        self
    }
}

/// Category first, then text search.
pub fn derive_visible(raw: &[CurrencyInfo], category: Category, query: &str) -> Vec<CurrencyInfo> {
    search(&apply_category(raw, category), query).into_owned()
}
