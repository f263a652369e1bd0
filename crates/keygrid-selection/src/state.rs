#![forbid(unsafe_code)]

//! Selection state and its reducer.
//!
//! One [`SelectionState`] exists per mounted grid. Nothing mutates it
//! except [`SelectionState::apply`], which takes the closed set of
//! [`SelectionAction`]s — there is no unknown-action case to fail on at
//! runtime, the `match` is exhaustive.

use std::fmt;
use std::rc::Rc;

use keygrid_core::cell::ElementId;
use tracing::debug;

use crate::session::SelectionSession;

/// One row in the pending selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectedRow {
    /// Stable identity of the selected value; membership is compared on
    /// this, never on position.
    pub elem: ElementId,

    /// Rendered row position at selection time, kept for backend calls
    /// and messaging.
    pub row: usize,
}

impl SelectedRow {
    /// Create a selected row.
    #[must_use]
    pub const fn new(elem: ElementId, row: usize) -> Self {
        Self { elem, row }
    }
}

/// Everything that can happen to [`SelectionState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    /// Replace the pending selection wholesale.
    Select {
        /// New pending rows.
        rows: Vec<SelectedRow>,
        /// Column the session is locked to.
        col: usize,
    },

    /// Drop the pending selection and the column lock. Ignored while the
    /// session reports modal; lifecycle events that close the session
    /// re-dispatch this afterwards.
    Reset,

    /// Drop the pending rows but keep the column lock.
    Clear,

    /// Flip whether selection gestures are accepted at all.
    SetEnabled {
        /// New enabled flag.
        enabled: bool,
    },
}

impl SelectionAction {
    /// Short tag for logging.
    const fn tag(&self) -> &'static str {
        match self {
            Self::Select { .. } => "select",
            Self::Reset => "reset",
            Self::Clear => "clear",
            Self::SetEnabled { .. } => "set-enabled",
        }
    }
}

/// The selection half of a grid's interaction state.
///
/// Created once per mount via [`SelectionStore`](crate::SelectionStore),
/// dropped on unmount, never persisted.
pub struct SelectionState {
    session: Option<Rc<dyn SelectionSession>>,
    rows: Vec<SelectedRow>,
    active_col: Option<usize>,
    enabled: bool,
}

impl SelectionState {
    /// Fresh state: nothing pending, no column lock.
    #[must_use]
    pub fn new(session: Option<Rc<dyn SelectionSession>>, enabled: bool) -> Self {
        Self {
            session,
            rows: Vec::new(),
            active_col: None,
            enabled,
        }
    }

    /// The session handle, when the platform provided one.
    #[must_use]
    pub fn session(&self) -> Option<&Rc<dyn SelectionSession>> {
        self.session.as_ref()
    }

    /// Rows pending selection, in gesture order.
    #[must_use]
    pub fn rows(&self) -> &[SelectedRow] {
        &self.rows
    }

    /// Column the open session is locked to.
    #[must_use]
    pub fn active_col(&self) -> Option<usize> {
        self.active_col
    }

    /// Whether selection gestures are accepted.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a selection session is open right now. Asks the handle;
    /// a missing handle is never modal.
    #[must_use]
    pub fn is_modal(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_modal())
    }

    /// Whether `elem` is in the pending selection. Renderers derive the
    /// selected styling from this.
    #[must_use]
    pub fn is_selected(&self, elem: ElementId) -> bool {
        self.rows.iter().any(|r| r.elem == elem)
    }

    /// Apply one action. Returns whether the state changed, so callers
    /// can skip re-renders on identity no-ops.
    pub fn apply(&mut self, action: SelectionAction) -> bool {
        let tag = action.tag();
        let changed = match action {
            SelectionAction::Select { rows, col } => {
                self.rows = rows;
                self.active_col = Some(col);
                true
            }
            SelectionAction::Reset => {
                if self.is_modal() {
                    false
                } else {
                    let changed = !self.rows.is_empty() || self.active_col.is_some();
                    self.rows.clear();
                    self.active_col = None;
                    changed
                }
            }
            SelectionAction::Clear => {
                if self.rows.is_empty() {
                    // Identity no-op: the untouched buffer is the signal
                    // that nothing needs re-rendering.
                    false
                } else {
                    self.rows.clear();
                    true
                }
            }
            SelectionAction::SetEnabled { enabled } => {
                let changed = self.enabled != enabled;
                self.enabled = enabled;
                changed
            }
        };
        debug!(
            action = tag,
            changed,
            rows = self.rows.len(),
            col = ?self.active_col,
            "apply"
        );
        changed
    }
}

impl fmt::Debug for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionState")
            .field("session", &self.session.is_some())
            .field("rows", &self.rows)
            .field("active_col", &self.active_col)
            .field("enabled", &self.enabled)
            .finish()
    }
}
