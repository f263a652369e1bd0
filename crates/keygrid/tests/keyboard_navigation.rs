//! Integration test: keyboard navigation across the grid's regions.
//!
//! Drives the router the way a host would: header cells hand their column
//! index in, body cells hand their payload in, and everything unhandled
//! bubbles to the container. Covers the arrow-walk geometry (including the
//! wrap between rows), the frozen horizontal travel during a selection,
//! the pinned header-adjacent row, header sorting, and Escape routing.

use std::cell::RefCell;
use std::rc::Rc;

use keygrid::{
    Announcer, CellCoord, ElementId, FocusKind, GridCell, GridShape, GridSurface, KeyCode,
    KeyEvent, KeyRouter, KeyboardAssist, LiveRegion, Modifiers, PageHost, PageInfo, Politeness,
    SelectionSession, SelectionStore,
};
use keygrid_a11y::strings::default_catalog;
use keygrid_selection::fake::{ApiCall, FakeSession};

// ── Fixtures ──────────────────────────────────────────────────────────────

struct Surface {
    shape: GridShape,
    selected: Vec<CellCoord>,
    writes: Vec<(CellCoord, FocusKind)>,
    toolbar: Vec<bool>,
}

impl Surface {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            shape: GridShape::new(rows, cols),
            selected: Vec::new(),
            writes: Vec::new(),
            toolbar: Vec::new(),
        }
    }
}

impl GridSurface for Surface {
    fn shape(&self) -> GridShape {
        self.shape
    }

    fn apply_focus(&mut self, coord: CellCoord, kind: FocusKind) {
        self.writes.push((coord, kind));
    }

    fn cell_selected(&self, coord: CellCoord) -> bool {
        self.selected.contains(&coord)
    }

    fn has_focus_within(&self) -> bool {
        true
    }

    fn focus_selection_toolbar(&mut self, last: bool) {
        self.toolbar.push(last);
    }
}

struct Pager {
    info: PageInfo,
    total: usize,
}

impl PageHost for Pager {
    fn page_info(&self) -> PageInfo {
        self.info
    }

    fn total_rows(&self) -> usize {
        self.total
    }

    fn set_page(&mut self, page: usize) {
        self.info.page = page;
    }
}

struct Keys {
    enabled: bool,
    blurs: RefCell<Vec<bool>>,
}

impl Keys {
    fn new(enabled: bool) -> Self {
        Self {
            enabled,
            blurs: RefCell::new(Vec::new()),
        }
    }
}

impl KeyboardAssist for Keys {
    fn enabled(&self) -> bool {
        self.enabled
    }

    fn active(&self) -> bool {
        true
    }

    fn blur(&self, reset_focus: bool) {
        self.blurs.borrow_mut().push(reset_focus);
    }
}

struct Recorder(Rc<RefCell<Vec<String>>>);

impl LiveRegion for Recorder {
    fn set_text(&mut self, text: &str) {
        self.0.borrow_mut().push(text.to_owned());
    }

    fn set_atomic(&mut self, _atomic: bool) {}

    fn set_politeness(&mut self, _politeness: Politeness) {}
}

fn announcer() -> (Announcer, Rc<RefCell<Vec<String>>>) {
    let spoken = Rc::new(RefCell::new(Vec::new()));
    let announcer = Announcer::new(
        Box::new(Recorder(Rc::clone(&spoken))),
        Box::new(Recorder(Rc::clone(&spoken))),
        Box::new(default_catalog()),
    );
    (announcer, spoken)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code)
}

// ── Scenarios ─────────────────────────────────────────────────────────────

#[test]
fn arrows_walk_the_grid_with_wrapping() {
    let mut router = KeyRouter::new();
    let mut surface = Surface::new(3, 2);
    let mut store = SelectionStore::new(None, true);
    let keys = Keys::new(false);
    let (mut announcer, spoken) = announcer();
    let mut on_sort = |_: usize| {};

    // Down from the header lands on the first body cell.
    assert!(router.header_key(key(KeyCode::Down), 0, &mut surface, true, &mut on_sort));
    assert_eq!(router.focus().focused(), CellCoord::new(1, 0));
    assert_eq!(
        surface.writes,
        vec![
            (CellCoord::new(0, 0), FocusKind::RemoveTabStop),
            (CellCoord::new(1, 0), FocusKind::Focus),
        ]
    );

    // Right along the body row, then wrapping onto the next row.
    let e1 = GridCell::new(0, 0, ElementId(1), true);
    assert!(router.body_key(key(KeyCode::Right), &e1, &mut surface, &mut store, &keys, &mut announcer));
    assert_eq!(router.focus().focused(), CellCoord::new(1, 1));

    let m1 = GridCell::new(0, 1, ElementId(2), false);
    assert!(router.body_key(key(KeyCode::Right), &m1, &mut surface, &mut store, &keys, &mut announcer));
    assert_eq!(router.focus().focused(), CellCoord::new(2, 0));

    // Down on the last row has nowhere to go; the event stays consumed.
    let e2 = GridCell::new(1, 0, ElementId(3), true);
    assert!(router.body_key(key(KeyCode::Down), &e2, &mut surface, &mut store, &keys, &mut announcer));
    assert_eq!(router.focus().focused(), CellCoord::new(2, 0));

    // Left wraps back to the end of the previous row.
    assert!(router.body_key(key(KeyCode::Left), &e2, &mut surface, &mut store, &keys, &mut announcer));
    assert_eq!(router.focus().focused(), CellCoord::new(1, 1));

    // Nothing here announces: no selection session is open.
    assert!(spoken.borrow().is_empty());
}

#[test]
fn open_selection_freezes_columns_and_pins_the_first_body_row() {
    let mut router = KeyRouter::new();
    let mut surface = Surface::new(3, 2);
    let session = FakeSession::shared();
    session.set_modal(true);
    let mut store =
        SelectionStore::new(Some(session.clone() as Rc<dyn SelectionSession>), true);
    let keys = Keys::new(false);
    let (mut announcer, spoken) = announcer();

    let cell = GridCell::new(0, 1, ElementId(5), true);

    // Horizontal travel is frozen; the event is still consumed and the
    // landing cell (the same one) gets announced.
    assert!(router.body_key(key(KeyCode::Right), &cell, &mut surface, &mut store, &keys, &mut announcer));
    assert_eq!(router.focus().focused(), CellCoord::new(1, 1));
    assert!(spoken.borrow()[0].starts_with("Value is not selected."));

    // Up from the first body row is pinned while the session is open.
    assert!(router.body_key(key(KeyCode::Up), &cell, &mut surface, &mut store, &keys, &mut announcer));
    assert_eq!(router.focus().focused(), CellCoord::new(1, 1));

    // Vertical travel downward still works, and reads the landing cell's
    // styled state.
    surface.selected.push(CellCoord::new(2, 1));
    assert!(router.body_key(key(KeyCode::Down), &cell, &mut surface, &mut store, &keys, &mut announcer));
    assert_eq!(router.focus().focused(), CellCoord::new(2, 1));
    assert!(spoken.borrow()[2].starts_with("Value is selected."));

    // Once the session closes, the header is reachable again and landing
    // announcements stop.
    session.set_modal(false);
    let heard = spoken.borrow().len();
    assert!(router.body_key(key(KeyCode::Up), &cell, &mut surface, &mut store, &keys, &mut announcer));
    assert_eq!(router.focus().focused(), CellCoord::new(0, 1));
    assert_eq!(spoken.borrow().len(), heard);
}

#[test]
fn header_sorts_only_when_interaction_is_allowed() {
    let mut router = KeyRouter::new();
    let mut surface = Surface::new(3, 2);
    let sorted = RefCell::new(Vec::new());
    let mut on_sort = |col: usize| sorted.borrow_mut().push(col);

    assert!(router.header_key(key(KeyCode::Char(' ')), 1, &mut surface, true, &mut on_sort));
    assert!(router.header_key(key(KeyCode::Enter), 1, &mut surface, true, &mut on_sort));
    assert_eq!(*sorted.borrow(), vec![1, 1]);

    assert!(!router.header_key(key(KeyCode::Enter), 1, &mut surface, false, &mut on_sort));
    assert_eq!(sorted.borrow().len(), 2);

    // The page chord is the container's business even over a header cell.
    let chord = key(KeyCode::Right).with_modifiers(Modifiers::SHIFT | Modifiers::CTRL);
    assert!(!router.header_key(chord, 1, &mut surface, true, &mut on_sort));
}

#[test]
fn escape_bubbles_to_the_container_outside_a_selection() {
    let mut router = KeyRouter::new();
    let mut surface = Surface::new(3, 2);
    let mut pager = Pager {
        info: PageInfo::new(0, 10),
        total: 2,
    };
    let session = FakeSession::shared();
    let mut store =
        SelectionStore::new(Some(session.clone() as Rc<dyn SelectionSession>), true);
    let keys = Keys::new(true);
    let (mut announcer, spoken) = announcer();
    let cell = GridCell::new(0, 0, ElementId(9), true);

    // No session open: the body refuses Escape, the container blurs the
    // keyboard assist.
    assert!(!router.body_key(key(KeyCode::Escape), &cell, &mut surface, &mut store, &keys, &mut announcer));
    assert!(router.container_key(
        key(KeyCode::Escape),
        &mut surface,
        &mut pager,
        &store,
        &keys,
        &mut announcer,
    ));
    assert_eq!(*keys.blurs.borrow(), vec![true]);

    // Session open: the body owns Escape and cancels.
    session.set_modal(true);
    assert!(router.body_key(key(KeyCode::Escape), &cell, &mut surface, &mut store, &keys, &mut announcer));
    assert_eq!(session.calls(), vec![ApiCall::Cancel]);
    assert!(spoken.borrow().last().expect("spoken").starts_with("Exited selection mode."));
    assert_eq!(keys.blurs.borrow().len(), 1, "no second blur");
}
