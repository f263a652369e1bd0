#![forbid(unsafe_code)]

//! Announcement and label keys, plus the built-in English catalog.
//!
//! Keys are stable identifiers: hosts override or extend them per locale,
//! and an untranslated key degrades to the key text itself. The engine
//! only ever announces through these constants, so a host that wants a
//! fully localized grid knows exactly which entries to provide.

use keygrid_i18n::{LocaleStrings, StringCatalog};

/// A value was added to the selection; also read when focus lands on a
/// selected cell mid-session.
pub const SELECTED_VALUE: &str = "grid.selection.selected-value";

/// A value was removed from the selection.
pub const DESELECTED_VALUE: &str = "grid.selection.deselected-value";

/// Focus landed on an unselected cell mid-session.
pub const NOT_SELECTED_VALUE: &str = "grid.selection.not-selected-value";

/// Exactly one value is selected.
pub const ONE_SELECTED: &str = "grid.selection.one-selected";

/// More than one value is selected; `{0}` is the count.
pub const MANY_SELECTED: &str = "grid.selection.many-selected";

/// The pending selection was confirmed.
pub const SELECTIONS_CONFIRMED: &str = "grid.selection.confirmed";

/// The selection session ended without a selection.
pub const EXITED_SELECTION: &str = "grid.selection.exited";

/// The visible page changed; `{0}` is the 1-based page, `{1}` the total.
pub const PAGE_STATUS: &str = "grid.paging.page-status";

/// Container label; `{0}` rows, `{1}` columns.
pub const GRID_DIMENSIONS: &str = "grid.a11y.dimensions";

/// Container usage hint read when the grid takes focus.
pub const NAVIGATION_HINT: &str = "grid.a11y.navigation-hint";

/// The built-in English strings.
///
/// Hosts that localize push their own locales in front of this one, so
/// English remains the terminal fallback.
#[must_use]
pub fn english() -> LocaleStrings {
    LocaleStrings::new("en-US")
        .entry(SELECTED_VALUE, "Value is selected.")
        .entry(DESELECTED_VALUE, "Value is deselected.")
        .entry(NOT_SELECTED_VALUE, "Value is not selected.")
        .entry(ONE_SELECTED, "1 value selected.")
        .entry(MANY_SELECTED, "{0} values selected.")
        .entry(SELECTIONS_CONFIRMED, "Selections confirmed.")
        .entry(EXITED_SELECTION, "Exited selection mode.")
        .entry(PAGE_STATUS, "Page {0} of {1}.")
        .entry(GRID_DIMENSIONS, "Grid with {0} rows and {1} columns.")
        .entry(
            NAVIGATION_HINT,
            "Use arrow keys to navigate between cells. \
             Press space to select a value, enter to confirm, \
             and escape to cancel.",
        )
}

/// A catalog containing only the built-in English strings.
#[must_use]
pub fn default_catalog() -> StringCatalog {
    StringCatalog::new().with_locale(english())
}

#[cfg(test)]
mod tests {
    use keygrid_i18n::{Arg, Translator};

    use super::*;

    #[test]
    fn every_key_is_covered_in_english() {
        let english = english();
        for key in [
            SELECTED_VALUE,
            DESELECTED_VALUE,
            NOT_SELECTED_VALUE,
            ONE_SELECTED,
            MANY_SELECTED,
            SELECTIONS_CONFIRMED,
            EXITED_SELECTION,
            PAGE_STATUS,
            GRID_DIMENSIONS,
            NAVIGATION_HINT,
        ] {
            assert!(english.get(key).is_some(), "missing English text for {key}");
        }
    }

    #[test]
    fn counted_templates_interpolate() {
        let catalog = default_catalog();
        assert_eq!(
            catalog.resolve(MANY_SELECTED, &[Arg::Count(12)]),
            "12 values selected."
        );
        assert_eq!(
            catalog.resolve(PAGE_STATUS, &[Arg::Count(2), Arg::Count(9)]),
            "Page 2 of 9."
        );
    }
}
