//! Modal alert shown when a reload fails while content stays on screen.
//!
//! - `state.rs` - Hidden / Visible
//! - `intent.rs` - Show / Dismiss
//! - `reducer.rs` - Transitions
//! - `dialog.rs` - Rendering

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_alert;
pub use intent::AlertIntent;
pub use reducer::AlertReducer;
pub use state::AlertState;
