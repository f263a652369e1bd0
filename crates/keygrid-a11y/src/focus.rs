#![forbid(unsafe_code)]

//! Roving tab stop and refocus bookkeeping.
//!
//! Exactly one cell participates in the host's tab order at a time. The
//! model tracks which one, and carries the pending-refocus handshake: when
//! something is about to replace the rendered rows (page change, confirmed
//! selection), the flag is armed *while the old cells still exist*, and
//! the post-render reset consumes it to put real focus back into the grid.
//!
//! The flag itself is a small shared handle ([`RefocusFlag`]) because two
//! parties write it on different schedules: the key router arms it
//! synchronously before a page change, and the session bridge arms it from
//! a lifecycle callback.

use std::cell::Cell;
use std::rc::Rc;

use keygrid_core::assist::KeyboardAssist;
use keygrid_core::coord::CellCoord;
use keygrid_core::surface::{FocusKind, GridSurface};
use tracing::debug;

/// Shared "focus should return to the grid after the next re-render" flag.
///
/// Clones share one flag. Arming is idempotent; [`take`](Self::take)
/// consumes the armed state.
#[derive(Debug, Clone, Default)]
pub struct RefocusFlag {
    armed: Rc<Cell<bool>>,
}

impl RefocusFlag {
    /// Create an unarmed flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the flag.
    pub fn arm(&self) {
        self.armed.set(true);
    }

    /// Whether the flag is armed.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.get()
    }

    /// Consume the armed state, returning whether it was armed.
    pub fn take(&self) -> bool {
        self.armed.replace(false)
    }
}

/// Which cell holds the tab stop, plus the pending-refocus flag.
///
/// One per grid instance, alive as long as the grid is mounted.
#[derive(Debug, Default)]
pub struct FocusModel {
    focused: CellCoord,
    refocus: RefocusFlag,
}

impl FocusModel {
    /// Start at the grid origin with no refocus pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Coordinate currently holding the tab stop.
    #[must_use]
    pub fn focused(&self) -> CellCoord {
        self.focused
    }

    /// Record that `coord` now holds the tab stop.
    ///
    /// Callers that move focus themselves (the router's arrow handling)
    /// update the surface first and then record the result here.
    pub fn set_focused(&mut self, coord: CellCoord) {
        self.focused = coord;
    }

    /// A handle on the shared refocus flag, for parties that arm it from
    /// outside the model (the session bridge's confirmed handler).
    #[must_use]
    pub fn refocus_flag(&self) -> RefocusFlag {
        self.refocus.clone()
    }

    /// Arm the refocus flag if input focus currently sits inside the grid.
    ///
    /// Must run before the triggering re-render: afterwards the focused
    /// element may already be gone and the probe reports nothing.
    pub fn arm_refocus(&mut self, surface: &dyn GridSurface) {
        if surface.has_focus_within() {
            self.refocus.arm();
        }
    }

    /// Whether a refocus is armed.
    #[must_use]
    pub fn refocus_pending(&self) -> bool {
        self.refocus.is_armed()
    }

    /// Re-establish the tab stop after the rendered rows changed.
    ///
    /// The stale coordinate loses its tab stop, then:
    ///
    /// - with a selection gesture open, focus stays in place (clamped into
    ///   the new shape, keeping the locked column reachable);
    /// - otherwise focus returns to the grid origin.
    ///
    /// The tab stop is only re-applied when the keyboard-assist policy
    /// leaves this widget tabbable (`!enabled || active`). An armed refocus
    /// is consumed here and upgrades the tab stop to real input focus.
    pub fn reset_focus(
        &mut self,
        surface: &mut dyn GridSurface,
        keyboard: &dyn KeyboardAssist,
        in_selection: bool,
    ) {
        surface.apply_focus(self.focused, FocusKind::RemoveTabStop);

        let shape = surface.shape();
        let target = if in_selection {
            self.focused.clamped(shape)
        } else {
            CellCoord::ORIGIN
        };
        self.focused = target;

        let tabbable = !keyboard.enabled() || keyboard.active();
        debug!(?target, tabbable, pending = self.refocus.is_armed(), "reset focus");
        if tabbable {
            let kind = if self.refocus.take() {
                FocusKind::Focus
            } else {
                FocusKind::AddTabStop
            };
            surface.apply_focus(target, kind);
        }
    }

    /// React to input focus leaving the grid.
    ///
    /// `moved_inside` is whether the receiving element is still inside the
    /// grid container. A true departure hands keyboard control back to the
    /// shell, unless a refocus is armed (focus is only away momentarily
    /// while rows re-render).
    pub fn focus_out(&self, keyboard: &dyn KeyboardAssist, moved_inside: bool) {
        if keyboard.enabled() && !self.refocus.is_armed() && !moved_inside {
            keyboard.blur(false);
        }
    }

    /// Move the tab stop to a cell the user clicked.
    ///
    /// The host gives the clicked cell real input focus on its own; only
    /// the tab-order bookkeeping happens here.
    pub fn click_focus(&mut self, surface: &mut dyn GridSurface, coord: CellCoord) {
        surface.apply_focus(self.focused, FocusKind::RemoveTabStop);
        self.focused = coord;
        surface.apply_focus(coord, FocusKind::AddTabStop);
    }
}
