#![forbid(unsafe_code)]

//! Lifecycle bridge from the selection engine to the local buffer.
//!
//! The engine owns the truth about a selection's lifetime: it decides
//! when a gesture is deactivated, canceled, confirmed, or cleared, and
//! it reports those transitions through [`SelectionSession`] events.
//! [`attach_session`] wires each event to the one [`SelectionAction`]
//! that reconciles the local buffer, so the buffer never second-guesses
//! the engine.
//!
//! Confirmation carries one extra duty: before the reset is queued, the
//! handler records where focus should go afterwards. If focus sits
//! inside the grid the [`RefocusFlag`] is armed and the next focus reset
//! restores the remembered cell; if focus already left and keyboard
//! assistance is on, the assist layer is blurred with its focus state
//! reset. That probe happens at event time, not at pump time, because
//! by the time the queued reset lands the DOM focus may have moved on.

use std::rc::Rc;

use keygrid_a11y::RefocusFlag;
use keygrid_core::assist::KeyboardAssist;
use tracing::{debug, trace};

use crate::session::{SelectionSession, SessionEvent, SessionSubscriptions};
use crate::state::SelectionAction;
use crate::store::Dispatcher;

/// Subscribes to the four lifecycle events of `session` and returns the
/// RAII guard holding the subscriptions.
///
/// Returns `None` when no session exists (a grid rendered outside an
/// analysis context); the buffer then simply never receives lifecycle
/// resets. Handlers only queue actions through `dispatcher`; the host
/// applies them on its next [`SelectionStore::pump`] call.
///
/// Note that the engine emits these events after it has already left
/// modal state, which is why the queued reset is applied rather than
/// swallowed by the reducer's modal guard.
///
/// [`SelectionStore::pump`]: crate::store::SelectionStore::pump
pub fn attach_session(
    session: Option<Rc<dyn SelectionSession>>,
    dispatcher: Dispatcher,
    refocus: RefocusFlag,
    focus_within: Box<dyn Fn() -> bool>,
    keyboard: Rc<dyn KeyboardAssist>,
) -> Option<SessionSubscriptions> {
    let Some(session) = session else {
        debug!("no selection session, lifecycle bridge not attached");
        return None;
    };

    let mut tokens = Vec::with_capacity(SessionEvent::ALL.len());

    let tx = dispatcher.clone();
    let id = session.subscribe(
        SessionEvent::Deactivated,
        Box::new(move || {
            trace!("session deactivated");
            tx.dispatch(SelectionAction::Reset);
        }),
    );
    tokens.push((SessionEvent::Deactivated, id));

    let tx = dispatcher.clone();
    let id = session.subscribe(
        SessionEvent::Canceled,
        Box::new(move || {
            trace!("session canceled");
            tx.dispatch(SelectionAction::Reset);
        }),
    );
    tokens.push((SessionEvent::Canceled, id));

    let tx = dispatcher.clone();
    let id = session.subscribe(
        SessionEvent::Confirmed,
        Box::new(move || {
            trace!("session confirmed");
            // Capture the refocus intent before the reset is queued;
            // the flag is the only record that focus sat inside the
            // grid at the moment the engine confirmed.
            if focus_within() {
                refocus.arm();
            } else if keyboard.enabled() {
                keyboard.blur(true);
            }
            tx.dispatch(SelectionAction::Reset);
        }),
    );
    tokens.push((SessionEvent::Confirmed, id));

    let tx = dispatcher;
    let id = session.subscribe(
        SessionEvent::Cleared,
        Box::new(move || {
            trace!("session cleared");
            tx.dispatch(SelectionAction::Clear);
        }),
    );
    tokens.push((SessionEvent::Cleared, id));

    debug!(listeners = tokens.len(), "selection lifecycle bridge attached");
    Some(SessionSubscriptions::new(session, tokens))
}
