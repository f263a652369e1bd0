#![forbid(unsafe_code)]

//! Keyboard-assist controller.
//!
//! Embedding shells that manage keyboard focus across several widgets
//! expose a controller with an on/off policy (`enabled`) and a live flag
//! (`active`) saying whether this widget currently holds keyboard control.
//! The engine only ever reads the two flags and hands control back via
//! [`KeyboardAssist::blur`]; it never takes control itself.

/// The embedding shell's keyboard-mode controller.
///
/// Implementations usually sit behind `Rc` and use interior mutability,
/// since lifecycle callbacks need to reach them outside any `&mut` chain.
pub trait KeyboardAssist {
    /// Whether the shell manages keyboard focus at all.
    fn enabled(&self) -> bool;

    /// Whether this widget currently holds keyboard control.
    fn active(&self) -> bool;

    /// Hand keyboard control back to the shell.
    ///
    /// With `reset_focus` the shell also returns the tab stop to the
    /// widget container, so the next Tab enters fresh.
    fn blur(&self, reset_focus: bool);
}
