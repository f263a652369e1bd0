#![forbid(unsafe_code)]

//! The single-consumer apply loop.
//!
//! Two streams mutate selection state: synchronous user gestures and
//! asynchronous session lifecycle callbacks. Both end in
//! [`SelectionState::apply`], but they arrive on different schedules, so
//! the store funnels the asynchronous side through an in-memory channel:
//! lifecycle handlers hold a [`Dispatcher`] and send actions; the host
//! calls [`SelectionStore::pump`] after every delivered event to drain
//! them. Gesture code inside the same call stack applies directly with
//! [`SelectionStore::apply_now`].
//!
//! Actions are applied strictly in arrival order and the last applied one
//! wins; nothing is merged or reordered.

use std::fmt;
use std::rc::Rc;
use std::sync::mpsc;

use crate::session::SelectionSession;
use crate::state::{SelectionAction, SelectionState};

/// Owns a grid's [`SelectionState`] and the action channel feeding it.
pub struct SelectionStore {
    state: SelectionState,
    tx: mpsc::Sender<SelectionAction>,
    rx: mpsc::Receiver<SelectionAction>,
}

impl SelectionStore {
    /// Create the store for one grid mount.
    #[must_use]
    pub fn new(session: Option<Rc<dyn SelectionSession>>, enabled: bool) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            state: SelectionState::new(session, enabled),
            tx,
            rx,
        }
    }

    /// Read-only view of the current state.
    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// A sender for parties that dispatch from outside the host's call
    /// stack (lifecycle handlers). Cheap to clone.
    #[must_use]
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher {
            tx: self.tx.clone(),
        }
    }

    /// Apply an action synchronously. Returns whether state changed.
    pub fn apply_now(&mut self, action: SelectionAction) -> bool {
        self.state.apply(action)
    }

    /// Drain and apply everything dispatched since the last pump.
    ///
    /// Returns whether any action changed the state. Hosts call this once
    /// after each delivered lifecycle event; calling it more often is
    /// harmless.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Ok(action) = self.rx.try_recv() {
            changed |= self.state.apply(action);
        }
        changed
    }
}

impl fmt::Debug for SelectionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionStore")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Sends [`SelectionAction`]s into a store's channel.
///
/// Outlives nothing: once the store is dropped, dispatches are silently
/// discarded, which is exactly what a late lifecycle callback on an
/// unmounted grid should do.
#[derive(Clone)]
pub struct Dispatcher {
    tx: mpsc::Sender<SelectionAction>,
}

impl Dispatcher {
    /// Queue `action` for the next [`SelectionStore::pump`].
    pub fn dispatch(&self, action: SelectionAction) {
        let _ = self.tx.send(action);
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use keygrid_core::cell::ElementId;

    use super::*;
    use crate::state::SelectedRow;

    #[test]
    fn pump_applies_dispatched_actions_in_order() {
        let mut store = SelectionStore::new(None, true);
        let dispatcher = store.dispatcher();

        dispatcher.dispatch(SelectionAction::Select {
            rows: vec![SelectedRow::new(ElementId(1), 0)],
            col: 2,
        });
        dispatcher.dispatch(SelectionAction::Clear);

        assert!(store.state().rows().is_empty(), "nothing applied yet");
        assert!(store.pump());
        assert!(store.state().rows().is_empty(), "clear arrived last");
        assert_eq!(store.state().active_col(), Some(2));
    }

    #[test]
    fn pump_reports_no_change_for_identity_no_ops() {
        let mut store = SelectionStore::new(None, true);
        let dispatcher = store.dispatcher();
        dispatcher.dispatch(SelectionAction::Clear);
        assert!(!store.pump(), "clear on empty rows changes nothing");
        assert!(!store.pump(), "empty channel changes nothing");
    }

    #[test]
    fn dispatch_after_drop_is_discarded() {
        let store = SelectionStore::new(None, true);
        let dispatcher = store.dispatcher();
        drop(store);
        dispatcher.dispatch(SelectionAction::Reset);
    }

    #[test]
    fn apply_now_bypasses_the_channel() {
        let mut store = SelectionStore::new(None, true);
        assert!(store.apply_now(SelectionAction::Select {
            rows: vec![SelectedRow::new(ElementId(9), 4)],
            col: 0,
        }));
        assert_eq!(store.state().rows().len(), 1);
    }
}
