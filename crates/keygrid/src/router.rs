#![forbid(unsafe_code)]

//! Key routing for the grid's three input regions.
//!
//! The host delivers each key event to the region that owns it: the outer
//! container, a header cell, or a body cell. Every handler returns whether
//! the event was consumed; the host maps `true` to suppressing its default
//! handling, and lets unconsumed events bubble to the container phase.
//! That bubbling is load-bearing: body Escape outside a selection is
//! deliberately unhandled so the container can hand the keyboard back to
//! the assist layer.
//!
//! Handlers borrow their collaborators per call. The only state the router
//! owns is the [`FocusModel`].

use std::rc::Rc;

use keygrid_a11y::strings;
use keygrid_a11y::{AnnounceKey, Announcement, Announcer, FocusModel};
use keygrid_core::assist::KeyboardAssist;
use keygrid_core::cell::GridCell;
use keygrid_core::coord::{CellCoord, GridShape, PageInfo};
use keygrid_core::event::{KeyCode, KeyEvent, KeyEventKind};
use keygrid_core::nav::next_coord;
use keygrid_core::surface::{FocusKind, GridSurface};
use keygrid_i18n::Arg;
use keygrid_selection::{SelectionStore, toggle_cell};
use tracing::{debug, trace};

/// Paging state and control, supplied by the host.
///
/// The engine never fetches rows. It asks where it is, does the page
/// arithmetic, and requests an index the math proved to be in range.
pub trait PageHost {
    /// Current page position.
    fn page_info(&self) -> PageInfo;

    /// Total data rows across all pages.
    fn total_rows(&self) -> usize;

    /// Show `page`.
    fn set_page(&mut self, page: usize);
}

/// The page-jump chord: Ctrl/Cmd+Shift plus a horizontal arrow.
fn page_chord(ev: KeyEvent) -> bool {
    ev.shift() && ev.primary_modifier()
}

fn toolbar_redirect(
    surface: &mut dyn GridSurface,
    keyboard: &dyn KeyboardAssist,
    in_selection: bool,
) -> bool {
    if keyboard.enabled() && in_selection {
        surface.focus_selection_toolbar(true);
        true
    } else {
        false
    }
}

/// Routes key events for one grid instance.
#[derive(Debug, Default)]
pub struct KeyRouter {
    focus: FocusModel,
}

impl KeyRouter {
    /// A router with the tab stop at the grid origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The focus model, for hosts reacting to clicks, focus-out, and
    /// re-renders.
    #[must_use]
    pub fn focus(&self) -> &FocusModel {
        &self.focus
    }

    /// Mutable access to the focus model.
    pub fn focus_mut(&mut self) -> &mut FocusModel {
        &mut self.focus
    }

    /// Handle a key event on the grid container.
    ///
    /// Ctrl/Cmd+Shift+Right/Left pages forward and back; Escape outside a
    /// selection hands the keyboard back to the assist layer. Everything
    /// else bubbles.
    pub fn container_key(
        &mut self,
        ev: KeyEvent,
        surface: &mut dyn GridSurface,
        paging: &mut dyn PageHost,
        store: &SelectionStore,
        keyboard: &dyn KeyboardAssist,
        announcer: &mut Announcer,
    ) -> bool {
        if ev.kind == KeyEventKind::Release {
            return false;
        }
        match ev.code {
            KeyCode::Right | KeyCode::Left if page_chord(ev) => {
                let info = paging.page_info();
                let last = info.last_page_index(paging.total_rows());
                let target = match ev.code {
                    KeyCode::Right if info.page < last => Some(info.page + 1),
                    KeyCode::Left => info.page.checked_sub(1),
                    _ => None,
                };
                if let Some(page) = target {
                    // The focused cell goes away with the old rows; arm
                    // the refocus before anything re-renders.
                    self.focus.arm_refocus(surface);
                    paging.set_page(page);
                    debug!(page, "page change via keyboard");
                    announcer.announce(
                        Announcement::keys([AnnounceKey::with_args(
                            strings::PAGE_STATUS,
                            [Arg::Count(page + 1), Arg::Count(last + 1)],
                        )])
                        .assertive(),
                    );
                }
                true
            }
            KeyCode::Escape if keyboard.enabled() && !store.state().is_modal() => {
                keyboard.blur(true);
                true
            }
            _ => false,
        }
    }

    /// Handle a key event on the header cell at column `col`.
    ///
    /// The header is row 0: Down enters the body, Right/Left walk along
    /// the header and wrap into the body the same way body cells wrap.
    /// Space and Enter sort the column when the host allows interaction.
    /// There is no Up: nothing sits above the header.
    pub fn header_key(
        &mut self,
        ev: KeyEvent,
        col: usize,
        surface: &mut dyn GridSurface,
        sort_allowed: bool,
        on_sort: &mut dyn FnMut(usize),
    ) -> bool {
        if ev.kind == KeyEventKind::Release || page_chord(ev) {
            return false;
        }
        match ev.code {
            KeyCode::Down | KeyCode::Right | KeyCode::Left => {
                self.move_focus(ev.code, CellCoord::new(0, col), surface, false);
                true
            }
            KeyCode::Enter | KeyCode::Char(' ') if sort_allowed => {
                debug!(col, "sort via keyboard");
                on_sort(col);
                true
            }
            _ => false,
        }
    }

    /// Handle a key event on a body cell.
    ///
    /// `cell` is the cell the event targeted; its focus-space coordinate is
    /// [`GridCell::focus_coord`]. Arrows move focus (and announce the
    /// landing cell's selection state while a session is open), Space
    /// toggles dimension cells, Enter confirms, Escape cancels, and
    /// Shift+Tab dives into the selection toolbar.
    pub fn body_key(
        &mut self,
        ev: KeyEvent,
        cell: &GridCell,
        surface: &mut dyn GridSurface,
        store: &mut SelectionStore,
        keyboard: &dyn KeyboardAssist,
        announcer: &mut Announcer,
    ) -> bool {
        if ev.kind == KeyEventKind::Release || page_chord(ev) {
            return false;
        }
        let in_selection = store.state().is_modal();
        match ev.code {
            code if code.is_arrow() => {
                let next = self.move_focus(code, cell.focus_coord(), surface, in_selection);
                if in_selection {
                    let key = if surface.cell_selected(next) {
                        strings::SELECTED_VALUE
                    } else {
                        strings::NOT_SELECTED_VALUE
                    };
                    announcer.announce(Announcement::key(key));
                }
                true
            }
            KeyCode::Char(' ') => {
                if cell.dimension {
                    toggle_cell(store, cell, ev.modifiers, announcer);
                }
                true
            }
            KeyCode::Enter => {
                if in_selection
                    && let Some(session) = store.state().session().map(Rc::clone)
                {
                    debug!("confirm selection via keyboard");
                    session.confirm();
                    announcer.announce(Announcement::key(strings::SELECTIONS_CONFIRMED));
                }
                true
            }
            KeyCode::Escape if store.state().enabled() && in_selection => {
                if let Some(session) = store.state().session().map(Rc::clone) {
                    debug!("cancel selection via keyboard");
                    session.cancel();
                    announcer.announce(Announcement::key(strings::EXITED_SELECTION));
                }
                true
            }
            KeyCode::BackTab => toolbar_redirect(surface, keyboard, in_selection),
            KeyCode::Tab if ev.shift() => toolbar_redirect(surface, keyboard, in_selection),
            _ => false,
        }
    }

    /// Handle forward Tab leaving the last body cell.
    ///
    /// While a selection is open the toolbar is the only sensible next
    /// stop, so Tab is redirected there instead of leaving the grid.
    pub fn trailing_tab(
        &self,
        ev: KeyEvent,
        surface: &mut dyn GridSurface,
        store: &SelectionStore,
    ) -> bool {
        if ev.kind == KeyEventKind::Release {
            return false;
        }
        if ev.code == KeyCode::Tab && !ev.shift() && store.state().is_modal() {
            surface.focus_selection_toolbar(false);
            return true;
        }
        false
    }

    /// Shared arrow handling: retire the old tab stop, compute the next
    /// coordinate against the live shape, focus it, record it.
    fn move_focus(
        &mut self,
        key: KeyCode,
        current: CellCoord,
        surface: &mut dyn GridSurface,
        in_selection: bool,
    ) -> CellCoord {
        surface.apply_focus(current, FocusKind::RemoveTabStop);
        let next = next_coord(key, current, surface.shape(), in_selection);
        surface.apply_focus(next, FocusKind::Focus);
        self.focus.set_focused(next);
        trace!(?current, ?next, in_selection, "move focus");
        next
    }
}

/// Announce the grid's size and the usage hint.
///
/// Hosts call this when input focus enters the grid from outside, so a
/// screen-reader user hears where they landed. Counts include the header
/// row.
pub fn announce_grid_entered(shape: GridShape, announcer: &mut Announcer) {
    announcer.announce(Announcement::keys([
        AnnounceKey::with_args(
            strings::GRID_DIMENSIONS,
            [Arg::Count(shape.row_count), Arg::Count(shape.column_count)],
        ),
        AnnounceKey::plain(strings::NAVIGATION_HINT),
    ]));
}
