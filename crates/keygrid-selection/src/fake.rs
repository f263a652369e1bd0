#![forbid(unsafe_code)]

//! Scripted selection session for tests.
//!
//! Records every backend call, lets the test flip the modal flag, and
//! exposes [`FakeSession::emit`] to fire lifecycle events by hand. The
//! modal flag follows the calls the way a real backend would: `begin`
//! opens, `confirm`/`cancel` close. Lifecycle events are *not* emitted
//! automatically; tests drive them explicitly to model the engine's
//! asynchronous delivery.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::session::{
    EventHandler, ListenerSet, SelectRequest, SelectionSession, SessionEvent, SubscriptionId,
};

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    /// `begin(path)`.
    Begin(String),

    /// `select(request)`.
    Select(SelectRequest),

    /// `confirm()`.
    Confirm,

    /// `cancel()`.
    Cancel,
}

/// A recording, scriptable [`SelectionSession`].
#[derive(Default)]
pub struct FakeSession {
    modal: Cell<bool>,
    calls: RefCell<Vec<ApiCall>>,
    listeners: RefCell<ListenerSet>,
}

impl FakeSession {
    /// Create a fresh session: not modal, nothing recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session already wrapped for handle use.
    #[must_use]
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::new())
    }

    /// Script the modal flag directly.
    pub fn set_modal(&self, modal: bool) {
        self.modal.set(modal);
    }

    /// Snapshot of the recorded calls.
    #[must_use]
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    /// Drain the recorded calls.
    pub fn take_calls(&self) -> Vec<ApiCall> {
        self.calls.borrow_mut().drain(..).collect()
    }

    /// Number of registered lifecycle handlers.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Fire `event`, running its handlers. Returns how many ran.
    pub fn emit(&self, event: SessionEvent) -> usize {
        self.listeners.borrow_mut().emit(event)
    }
}

impl SelectionSession for FakeSession {
    fn begin(&self, path: &str) {
        self.modal.set(true);
        self.calls.borrow_mut().push(ApiCall::Begin(path.to_owned()));
    }

    fn select(&self, request: SelectRequest) {
        self.calls.borrow_mut().push(ApiCall::Select(request));
    }

    fn confirm(&self) {
        self.modal.set(false);
        self.calls.borrow_mut().push(ApiCall::Confirm);
    }

    fn cancel(&self) {
        self.modal.set(false);
        self.calls.borrow_mut().push(ApiCall::Cancel);
    }

    fn is_modal(&self) -> bool {
        self.modal.get()
    }

    fn subscribe(&self, event: SessionEvent, handler: EventHandler) -> SubscriptionId {
        self.listeners.borrow_mut().subscribe(event, handler)
    }

    fn unsubscribe(&self, event: SessionEvent, id: SubscriptionId) {
        self.listeners.borrow_mut().unsubscribe(event, id);
    }
}

impl std::fmt::Debug for FakeSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeSession")
            .field("modal", &self.modal.get())
            .field("calls", &self.calls.borrow().len())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}
