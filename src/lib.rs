//! Tri-state content loading: a `Loading` / `Failed` / `Present` state
//! machine that retains content across reloads, an observable store for it,
//! a single-flight content provider, and rules for presenting each state.
//!
//! ```no_run
//! use stateful::binding::{ContentBindable, Region, RegionView, StateBinder};
//! use stateful::provider::{from_fn, ContentProvider};
//! use stateful::StateController;
//!
//! #[derive(Default)]
//! struct List(Vec<String>);
//!
//! impl ContentBindable<Vec<u32>> for List {
//!     fn bind(&mut self, content: &Vec<u32>) {
//!         self.0 = content.iter().map(u32::to_string).collect();
//!     }
//! }
//!
//! let provider = ContentProvider::new(from_fn(|completion| {
//!     completion.complete(Ok::<Vec<u32>, String>(vec![1, 2, 3]))
//! }));
//! let controller = StateController::new(
//!     provider,
//!     StateBinder::emptiable(),
//!     RegionView::new(List::default()),
//!     |error: &String| eprintln!("reload failed: {error}"),
//! );
//! controller.reload();
//! assert_eq!(controller.with_view(|view| view.active_region()), Region::Content);
//! ```

pub mod binding;
pub mod config;
pub mod controller;
pub mod emptiable;
pub mod logging;
pub mod provider;
pub mod state;
pub mod store;
pub mod ui;

pub use binding::{Message, Region, StateBinder, StateView};
pub use controller::StateController;
pub use emptiable::Emptiable;
pub use provider::{Completion, ContentProvider, ContentSource};
pub use state::{SafeState, State, StateCase};
pub use store::{StateStore, Subscription};
