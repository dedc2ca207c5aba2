/// Marker trait for intents.
///
/// Intents are plain data: anything impure (random generation, storage reads)
/// happens before the intent is built, so reducers stay deterministic.
pub trait Intent: Send + 'static {
    /// Whether applying this intent changes data that must be persisted.
    fn is_persistent(&self) -> bool {
        false
    }
}
