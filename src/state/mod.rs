//! Tri-state content lifecycle.
//!
//! ```text
//!                 with_loading                 with_content
//!   Loading(c?) ───────────────► Loading(c?) ───────────────► Present(c)
//!        │                          ▲                              │
//!        │ with_error               │ with_loading                 │ with_error
//!        ▼                          │                              ▼
//!   Failed(e, c?) ──────────────────┘                         Failed(e, c)
//! ```
//!
//! Content survives `Loading` and `Failed` transitions. Only [`State::purged`]
//! drops it.

mod decode;
mod machine;

pub use decode::DecodeError;
pub use machine::{SafeState, State, StateCase};
