#![forbid(unsafe_code)]

//! Accessibility layer for keygrid.
//!
//! Two concerns live here, both driven by the interaction engine and both
//! invisible to sighted users:
//!
//! - [`announce`] — the dual-channel live-region announcer. Selection and
//!   paging state changes are narrated to assistive technology through two
//!   alternating notification targets, with an invisible text nudge so
//!   repeated messages are still observed as mutations.
//! - [`focus`] — which cell holds the roving tab stop, and the
//!   pending-refocus handshake around re-renders that replace the focused
//!   element.
//!
//! The announcement texts themselves are resolved through
//! [`keygrid_i18n::Translator`]; [`strings`] carries the key constants and
//! a complete English catalog.

pub mod announce;
pub mod focus;
pub mod live;
pub mod strings;

pub use announce::{AnnounceKey, Announcement, Announcer};
pub use focus::{FocusModel, RefocusFlag};
pub use live::{LiveRegion, Politeness};
