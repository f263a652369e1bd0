#![forbid(unsafe_code)]

//! Selection and keyboard-navigation engine for data grids.
//!
//! This crate is the public facade: it re-exports the engine's types from
//! the member crates and adds the [`KeyRouter`], the piece that turns key
//! events on the grid's three regions (container, header cells, body
//! cells) into focus movement, selection gestures, and screen-reader
//! announcements.
//!
//! The engine coordinates three timelines that never share a thread:
//! synchronous key input, asynchronous selection-session lifecycle events,
//! and the live regions a screen reader observes. It owns no widgets and
//! performs no I/O; everything it touches belongs to the host and is
//! reached through a trait.
//!
//! # Wiring
//!
//! A host embeds the engine by implementing four traits and keeping two
//! loops running:
//!
//! - [`GridSurface`] exposes the rendered grid: live shape, focus marker
//!   writes, selection styling, and the selection toolbar.
//! - [`SelectionSession`] adapts the platform's selection backend: begin /
//!   select / confirm / cancel plus lifecycle subscriptions.
//! - [`KeyboardAssist`] adapts the host's keyboard-mode controller, if it
//!   has one (everything degrades gracefully when `enabled()` is false).
//! - [`Translator`] resolves announcement keys; [`strings::default_catalog`]
//!   is a ready-made English implementation.
//!
//! The loops: deliver every key event to the matching [`KeyRouter`] method
//! and honor its `bool` (consumed events must not reach the host's default
//! handling), and call [`SelectionStore::pump`] after each delivered event
//! so queued lifecycle actions reach the reducer.

pub mod router;

// --- Core re-exports -------------------------------------------------------

pub use keygrid_core::assist::KeyboardAssist;
pub use keygrid_core::cell::{ElementId, GridCell};
pub use keygrid_core::coord::{CellCoord, GridShape, PageInfo};
pub use keygrid_core::event::{KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use keygrid_core::nav::next_coord;
pub use keygrid_core::surface::{Constraints, FocusKind, GridSurface, selections_enabled};

// --- I18n re-exports -------------------------------------------------------

pub use keygrid_i18n::{Arg, I18nError, LocaleStrings, StringCatalog, Translator};

// --- Accessibility re-exports ----------------------------------------------

pub use keygrid_a11y::strings;
pub use keygrid_a11y::{
    AnnounceKey, Announcement, Announcer, FocusModel, LiveRegion, Politeness, RefocusFlag,
};

// --- Selection re-exports --------------------------------------------------

pub use keygrid_selection::{
    DATA_CUBE_PATH, Dispatcher, EventHandler, ListenerSet, SELECT_CELLS_METHOD, SelectRequest,
    SelectedRow, SelectionAction, SelectionSession, SelectionState, SelectionStore, SessionEvent,
    SessionSubscriptions, SubscriptionId, attach_session, toggle_cell,
};

// --- Router ----------------------------------------------------------------

pub use router::{KeyRouter, PageHost, announce_grid_entered};

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        AnnounceKey, Announcement, Announcer, CellCoord, Constraints, ElementId, FocusKind,
        FocusModel, GridCell, GridShape, GridSurface, KeyCode, KeyEvent, KeyRouter, KeyboardAssist,
        LiveRegion, Modifiers, PageHost, PageInfo, Politeness, SelectionSession, SelectionStore,
        Translator, attach_session, selections_enabled, toggle_cell,
    };
}

pub use keygrid_a11y as a11y;
pub use keygrid_core as core;
pub use keygrid_i18n as i18n;
pub use keygrid_selection as selection;
