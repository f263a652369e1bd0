#![forbid(unsafe_code)]

//! Selection-backend contract and subscription plumbing.
//!
//! The engine never owns the selection session: the platform creates it,
//! decides when it is modal, and broadcasts lifecycle events. Everything
//! the engine needs from it fits in [`SelectionSession`]. Implementations
//! are handles (`&self` methods, interior mutability) and usually live
//! behind `Rc`.
//!
//! Subscriptions are symmetric by construction: every `subscribe` returns
//! a token, and [`SessionSubscriptions`] returns all of its tokens on
//! drop. A bridge that goes out of scope can not leave handlers behind.

use std::fmt;
use std::rc::Rc;

use ahash::AHashMap;

/// Fixed object path selections are opened against.
pub const DATA_CUBE_PATH: &str = "/dataCubeDef";

/// Backend method that applies a pending cell selection.
pub const SELECT_CELLS_METHOD: &str = "selectCubeCells";

/// Token identifying one lifecycle subscription.
pub type SubscriptionId = u64;

/// A lifecycle event broadcast by the selection backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionEvent {
    /// Another object took over the selection session.
    Deactivated,

    /// The session was canceled; pending selections are void.
    Canceled,

    /// The pending selection was applied.
    Confirmed,

    /// Pending selections were wiped but the session stays open.
    Cleared,
}

impl SessionEvent {
    /// Every lifecycle event, in broadcast-registration order.
    pub const ALL: [Self; 4] = [
        Self::Deactivated,
        Self::Canceled,
        Self::Confirmed,
        Self::Cleared,
    ];
}

/// Payload of one backend selection call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectRequest {
    /// Backend method name, normally [`SELECT_CELLS_METHOD`].
    pub method: &'static str,

    /// Object path, normally [`DATA_CUBE_PATH`].
    pub path: &'static str,

    /// Row positions (on the current page) of the pending selection.
    pub rows: Vec<usize>,

    /// Columns of the pending selection; always a single locked column.
    pub cols: Vec<usize>,
}

/// A lifecycle event handler.
///
/// Handlers must not re-enter the session's listener registry
/// (no subscribing or unsubscribing from inside a handler).
pub type EventHandler = Box<dyn FnMut()>;

/// The platform's selection session, as the engine sees it.
pub trait SelectionSession {
    /// Open a selection session against `path`.
    fn begin(&self, path: &str);

    /// Replace the pending selection. Fire-and-forget; the outcome comes
    /// back through lifecycle events, if at all.
    fn select(&self, request: SelectRequest);

    /// Apply the pending selection and close the session.
    fn confirm(&self);

    /// Discard the pending selection and close the session.
    fn cancel(&self);

    /// Whether a session is currently open on this handle.
    fn is_modal(&self) -> bool;

    /// Register `handler` for `event`. The token stays valid until passed
    /// to [`unsubscribe`](Self::unsubscribe).
    fn subscribe(&self, event: SessionEvent, handler: EventHandler) -> SubscriptionId;

    /// Remove a handler registered for `event`.
    fn unsubscribe(&self, event: SessionEvent, id: SubscriptionId);
}

/// Token-keyed handler registry for [`SelectionSession`] implementors.
///
/// Handles the bookkeeping half of `subscribe`/`unsubscribe` so backends
/// only decide when to [`emit`](Self::emit). Handlers run in subscription
/// order.
#[derive(Default)]
pub struct ListenerSet {
    next_id: SubscriptionId,
    listeners: AHashMap<SubscriptionId, (SessionEvent, EventHandler)>,
}

impl ListenerSet {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler, returning its token.
    pub fn subscribe(&mut self, event: SessionEvent, handler: EventHandler) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.insert(id, (event, handler));
        id
    }

    /// Remove the handler behind `id`, if it was registered for `event`.
    ///
    /// Returns whether something was removed.
    pub fn unsubscribe(&mut self, event: SessionEvent, id: SubscriptionId) -> bool {
        match self.listeners.get(&id) {
            Some((registered, _)) if *registered == event => {
                self.listeners.remove(&id);
                true
            }
            _ => false,
        }
    }

    /// Run every handler registered for `event`, in subscription order.
    ///
    /// Returns how many handlers ran.
    pub fn emit(&mut self, event: SessionEvent) -> usize {
        let mut ids: Vec<SubscriptionId> = self
            .listeners
            .iter()
            .filter(|(_, (registered, _))| *registered == event)
            .map(|(id, _)| *id)
            .collect();
        ids.sort_unstable();

        let mut ran = 0;
        for id in ids {
            if let Some((_, handler)) = self.listeners.get_mut(&id) {
                handler();
                ran += 1;
            }
        }
        ran
    }

    /// Number of registered handlers across all events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// True when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for ListenerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSet")
            .field("len", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

/// RAII guard over a batch of lifecycle subscriptions.
///
/// Dropping the guard unsubscribes every token it holds, in registration
/// order. Hosts keep it alive exactly as long as the grid is mounted.
pub struct SessionSubscriptions {
    session: Rc<dyn SelectionSession>,
    tokens: Vec<(SessionEvent, SubscriptionId)>,
}

impl SessionSubscriptions {
    pub(crate) fn new(
        session: Rc<dyn SelectionSession>,
        tokens: Vec<(SessionEvent, SubscriptionId)>,
    ) -> Self {
        Self { session, tokens }
    }

    /// Number of live subscriptions held by this guard.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when the guard holds no subscriptions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Drop for SessionSubscriptions {
    fn drop(&mut self) {
        for (event, id) in self.tokens.drain(..) {
            self.session.unsubscribe(event, id);
        }
    }
}

impl fmt::Debug for SessionSubscriptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionSubscriptions")
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn listeners_run_in_subscription_order() {
        let order = Rc::new(Cell::new(String::new()));
        let mut set = ListenerSet::new();
        for tag in ["a", "b", "c"] {
            let order = Rc::clone(&order);
            set.subscribe(
                SessionEvent::Confirmed,
                Box::new(move || {
                    let mut s = order.take();
                    s.push_str(tag);
                    order.set(s);
                }),
            );
        }

        assert_eq!(set.emit(SessionEvent::Confirmed), 3);
        assert_eq!(order.take(), "abc");
    }

    #[test]
    fn emit_only_reaches_the_matching_event() {
        let hits = Rc::new(Cell::new(0));
        let mut set = ListenerSet::new();
        let h = Rc::clone(&hits);
        set.subscribe(SessionEvent::Canceled, Box::new(move || h.set(h.get() + 1)));

        assert_eq!(set.emit(SessionEvent::Confirmed), 0);
        assert_eq!(hits.get(), 0);
        assert_eq!(set.emit(SessionEvent::Canceled), 1);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn unsubscribe_requires_the_matching_event() {
        let mut set = ListenerSet::new();
        let id = set.subscribe(SessionEvent::Cleared, Box::new(|| {}));

        assert!(!set.unsubscribe(SessionEvent::Confirmed, id));
        assert_eq!(set.len(), 1);
        assert!(set.unsubscribe(SessionEvent::Cleared, id));
        assert!(set.is_empty());
        assert!(!set.unsubscribe(SessionEvent::Cleared, id), "already gone");
    }
}
