use crate::currency::seed_currencies;
use crate::mvi::Reducer;
use crate::store::intent::CurrencyIntent;
use crate::store::state::CurrencyViewState;

pub struct CurrencyReducer;

impl Reducer for CurrencyReducer {
    type State = CurrencyViewState;
    type Intent = CurrencyIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CurrencyIntent::Loaded(records) => CurrencyViewState {
                raw: records,
                is_loading: false,
                ..state
            }
            .recompute(),
            CurrencyIntent::Clear => CurrencyViewState {
                raw: Vec::new(),
                visible: Vec::new(),
                ..state
            },
            CurrencyIntent::Append(record) => {
                let mut raw = state.raw;
                raw.push(record);
                CurrencyViewState { raw, ..state }.recompute()
            }
            CurrencyIntent::Reset => CurrencyViewState {
                raw: seed_currencies(),
                ..state
            }
            .recompute(),
            CurrencyIntent::SetCategory(category) => {
                CurrencyViewState { category, ..state }.recompute()
            }
            CurrencyIntent::SetQuery(query) => CurrencyViewState { query, ..state }.recompute(),
        }
    }
}
