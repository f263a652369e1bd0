#![forbid(unsafe_code)]

//! Core data model and host-boundary traits for the keygrid engine.
//!
//! This crate holds everything the other keygrid crates agree on but that
//! carries no interaction logic of its own:
//!
//! - [`event`] — key codes, modifier flags, and key events as delivered by
//!   the host shell.
//! - [`coord`] — cell coordinates, grid shapes, and paging arithmetic.
//! - [`cell`] — the data payload of a body cell (element identity, data-row
//!   position, dimension flag).
//! - [`nav`] — pure arrow-key traversal math over a grid shape.
//! - [`surface`] — the renderer boundary ([`GridSurface`]) through which
//!   focus markers are written back, plus the interaction constraints that
//!   gate selections.
//! - [`assist`] — the embedding shell's keyboard-mode controller.
//!
//! Everything here is deliberately renderer-agnostic: coordinates and shapes
//! are plain `usize` pairs, and the traits describe capabilities ("focus
//! this cell", "is this cell styled selected") rather than any particular
//! widget tree.

pub mod assist;
pub mod cell;
pub mod coord;
pub mod event;
pub mod nav;
pub mod surface;

pub use assist::KeyboardAssist;
pub use cell::{ElementId, GridCell};
pub use coord::{CellCoord, GridShape, PageInfo};
pub use event::{KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use nav::next_coord;
pub use surface::{Constraints, FocusKind, GridSurface, selections_enabled};
