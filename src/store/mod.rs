//! Observable single-value container for [`State`](crate::state::State).
//!
//! A [`StateStore`] holds the current state and broadcasts every replacement
//! to its subscribers, synchronously and in subscription order. New
//! subscribers immediately receive the current value (replay-one); there is no
//! history.
//!
//! # Re-entrancy
//!
//! Subscribers run with the store unlocked and may call back into it:
//! - a publish made during a notification pass replaces the value and is
//!   delivered in a follow-up pass once the current one finishes;
//! - a subscriber added during a pass gets its replay once the current round
//!   ends, or the follow-up pass if one is due, and never a value older than
//!   one already delivered to others;
//! - a replay is serialized with publishes from other threads the same way;
//! - a revoked [`Subscription`] is skipped immediately and removed from the
//!   list on the next pass.

mod container;
mod subscription;

pub use container::StateStore;
pub use subscription::Subscription;
