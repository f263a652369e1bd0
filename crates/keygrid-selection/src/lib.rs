#![forbid(unsafe_code)]

//! Selection engine for keygrid.
//!
//! A grid cell selection is a conversation between three parties: the user
//! gesturing at cells, the platform's selection backend deciding what the
//! selection means, and the renderer painting the result. This crate owns
//! the middle of that conversation:
//!
//! - [`session`] — the backend contract ([`SelectionSession`]): begin /
//!   select / confirm / cancel, the modal probe, and lifecycle
//!   subscriptions with guaranteed teardown.
//! - [`state`] — the reducer. One [`SelectionState`] per grid, mutated
//!   exclusively through [`SelectionAction`]s.
//! - [`store`] — the single-consumer apply loop. Lifecycle callbacks
//!   dispatch actions into a channel; the host drains it after every
//!   delivered event.
//! - [`toggle`] — the gesture protocol for toggling one cell in or out of
//!   the pending selection, including its announcements.
//! - [`bridge`] — maps backend lifecycle events onto reducer actions and
//!   captures refocus intent before a confirm tears the grid down.
//!
//! Selection calls are optimistic: local state updates at gesture time and
//! is reconciled only when the backend broadcasts a lifecycle event.

pub mod bridge;
pub mod session;
pub mod state;
pub mod store;
pub mod toggle;

#[cfg(any(test, feature = "test-support"))]
pub mod fake;

pub use bridge::attach_session;
pub use session::{
    DATA_CUBE_PATH, EventHandler, ListenerSet, SELECT_CELLS_METHOD, SelectRequest,
    SelectionSession, SessionEvent, SessionSubscriptions, SubscriptionId,
};
pub use state::{SelectedRow, SelectionAction, SelectionState};
pub use store::{Dispatcher, SelectionStore};
pub use toggle::toggle_cell;
