//! Model-View-Intent primitives for the currency view.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ render
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: everything a presentation layer needs to draw the list
//! - **Intent**: a requested change (user action or load completion)
//! - **Reducer**: pure function folding an intent into the state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::ViewState;
