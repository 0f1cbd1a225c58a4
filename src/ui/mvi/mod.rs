//! Model-View-Intent primitives for the demo screens.
//!
//! ```text
//! Intent ──→ Reducer ──→ UiState ──→ render
//!    ↑                                 │
//!    └──────── key / app events ───────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
