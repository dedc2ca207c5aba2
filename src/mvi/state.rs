/// Marker trait for reducer-owned state.
///
/// `Default` is the pre-initialization state; `PartialEq` lets observers skip
/// redundant renders.
pub trait ViewState: Clone + PartialEq + Default + Send + 'static {}
