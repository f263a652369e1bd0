#![forbid(unsafe_code)]

//! Internationalization (i18n) foundation for keygrid.
//!
//! Provides externalized string storage with key-based lookup, locale
//! fallback chains, and positional variable interpolation.
//!
//! # Role in keygrid
//! Accessibility announcements are the engine's only user-facing text.
//! `keygrid-i18n` isolates how those strings are resolved so the engine
//! stays deterministic while hosts ship whatever languages they need.
//!
//! # How it fits in the system
//! The announcer resolves keys through the [`Translator`] trait right
//! before writing to a live region. It does not depend on any other
//! keygrid crate, keeping the localization layer reusable and testable.

pub mod catalog;

pub use catalog::{Arg, I18nError, LocaleStrings, StringCatalog, Translator};
