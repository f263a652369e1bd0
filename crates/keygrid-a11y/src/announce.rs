#![forbid(unsafe_code)]

//! Dual-channel screen-reader announcer.
//!
//! Screen readers only react to live-region *mutations*. Two consecutive
//! identical messages written to one region are one mutation followed by
//! silence, so the announcer rotates between two regions on every call and
//! additionally appends an invisible marker (a space plus a soft hyphen) to
//! every second message. Between the two mechanisms, any sequence of
//! announcements, including repeats, produces an observable mutation each
//! time.
//!
//! Texts are translation keys, resolved at announce time; multiple keys in
//! one announcement are joined with single spaces into one message.

use keygrid_i18n::{Arg, Translator};
use tracing::trace;

use crate::live::{LiveRegion, Politeness};

/// Invisible suffix appended to every second announcement.
const REPEAT_MARKER: &str = " \u{00AD}";

/// One translation key plus its interpolation arguments.
#[derive(Debug, Clone)]
pub struct AnnounceKey {
    key: String,
    args: Vec<Arg>,
}

impl AnnounceKey {
    /// A key with no arguments.
    #[must_use]
    pub fn plain(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            args: Vec::new(),
        }
    }

    /// A key with interpolation arguments.
    #[must_use]
    pub fn with_args(key: impl Into<String>, args: impl IntoIterator<Item = Arg>) -> Self {
        Self {
            key: key.into(),
            args: args.into_iter().collect(),
        }
    }

    fn resolve(&self, translator: &dyn Translator) -> String {
        translator.resolve(&self.key, &self.args)
    }
}

/// A pending announcement: what to say and how urgently.
#[derive(Debug, Clone)]
pub struct Announcement {
    keys: Vec<AnnounceKey>,
    atomic: bool,
    politeness: Politeness,
}

impl Announcement {
    /// Announce a single plain key.
    #[must_use]
    pub fn key(key: impl Into<String>) -> Self {
        Self::keys([AnnounceKey::plain(key)])
    }

    /// Announce several keys as one message.
    #[must_use]
    pub fn keys(keys: impl IntoIterator<Item = AnnounceKey>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            atomic: true,
            politeness: Politeness::Polite,
        }
    }

    /// Append another key to the message.
    #[must_use]
    pub fn and(mut self, key: AnnounceKey) -> Self {
        self.keys.push(key);
        self
    }

    /// Interrupt the screen reader instead of waiting for idle.
    #[must_use]
    pub fn assertive(mut self) -> Self {
        self.politeness = Politeness::Assertive;
        self
    }

    /// Set an explicit politeness level.
    #[must_use]
    pub fn politeness(mut self, politeness: Politeness) -> Self {
        self.politeness = politeness;
        self
    }

    /// Only re-read the changed part of the region on mutation.
    #[must_use]
    pub fn non_atomic(mut self) -> Self {
        self.atomic = false;
        self
    }
}

/// Which of the two regions spoke last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    First,
    Second,
}

/// Writes announcements into two alternating live regions.
///
/// Owns nothing visual: the regions come from the host and stay mounted
/// for the grid's lifetime. One announcer per grid instance; the rotation
/// and marker state are per instance.
pub struct Announcer {
    first: Box<dyn LiveRegion>,
    second: Box<dyn LiveRegion>,
    translator: Box<dyn Translator>,
    last: Option<Channel>,
    marker_count: u64,
}

impl Announcer {
    /// Create an announcer over the host's two regions.
    #[must_use]
    pub fn new(
        first: Box<dyn LiveRegion>,
        second: Box<dyn LiveRegion>,
        translator: Box<dyn Translator>,
    ) -> Self {
        Self {
            first,
            second,
            translator,
            last: None,
            marker_count: 0,
        }
    }

    /// Start the marker cadence at `offset` instead of zero.
    ///
    /// The marker lands on calls where the running count is odd, so an odd
    /// offset makes the very first announcement carry it.
    #[must_use]
    pub fn with_parity_offset(mut self, offset: u64) -> Self {
        self.marker_count = offset;
        self
    }

    /// Resolve, decorate, and write one announcement.
    pub fn announce(&mut self, announcement: Announcement) {
        let Announcement {
            keys,
            atomic,
            politeness,
        } = announcement;

        let mut text = keys
            .iter()
            .map(|k| k.resolve(self.translator.as_ref()))
            .collect::<Vec<_>>()
            .join(" ");

        if self.marker_count % 2 == 1 {
            text.push_str(REPEAT_MARKER);
        }
        self.marker_count += 1;

        let channel = match self.last {
            None | Some(Channel::Second) => Channel::First,
            Some(Channel::First) => Channel::Second,
        };
        self.last = Some(channel);

        trace!(?channel, ?politeness, text = %text, "announce");

        let region = match channel {
            Channel::First => self.first.as_mut(),
            Channel::Second => self.second.as_mut(),
        };
        // Configure the region before the text lands, so the mutation is
        // observed with the right urgency already in place.
        region.set_atomic(atomic);
        region.set_politeness(politeness);
        region.set_text(&text);
    }
}

impl std::fmt::Debug for Announcer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Announcer")
            .field("last", &self.last)
            .field("marker_count", &self.marker_count)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use keygrid_i18n::{LocaleStrings, StringCatalog};

    use super::*;

    /// Recording region: every write is appended to a shared log.
    #[derive(Clone)]
    struct Recorder {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl LiveRegion for Recorder {
        fn set_text(&mut self, text: &str) {
            self.log.borrow_mut().push(format!("{}:text={text}", self.name));
        }

        fn set_atomic(&mut self, atomic: bool) {
            self.log
                .borrow_mut()
                .push(format!("{}:atomic={atomic}", self.name));
        }

        fn set_politeness(&mut self, politeness: Politeness) {
            self.log
                .borrow_mut()
                .push(format!("{}:live={}", self.name, politeness.as_str()));
        }
    }

    fn catalog() -> StringCatalog {
        StringCatalog::new().with_locale(
            LocaleStrings::new("en-US")
                .entry("one", "first thing")
                .entry("two", "second thing")
                .entry("count", "{0} things"),
        )
    }

    fn announcer(log: &Rc<RefCell<Vec<String>>>) -> Announcer {
        Announcer::new(
            Box::new(Recorder {
                name: "a",
                log: Rc::clone(log),
            }),
            Box::new(Recorder {
                name: "b",
                log: Rc::clone(log),
            }),
            Box::new(catalog()),
        )
    }

    fn texts(log: &Rc<RefCell<Vec<String>>>) -> Vec<String> {
        log.borrow()
            .iter()
            .filter(|e| e.contains(":text="))
            .cloned()
            .collect()
    }

    #[test]
    fn regions_alternate_every_call() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut announcer = announcer(&log);
        for _ in 0..4 {
            announcer.announce(Announcement::key("one"));
        }
        let texts = texts(&log);
        assert!(texts[0].starts_with("a:"));
        assert!(texts[1].starts_with("b:"));
        assert!(texts[2].starts_with("a:"));
        assert!(texts[3].starts_with("b:"));
    }

    #[test]
    fn marker_lands_on_every_second_call() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut announcer = announcer(&log);
        for _ in 0..4 {
            announcer.announce(Announcement::key("one"));
        }
        let texts = texts(&log);
        assert_eq!(texts[0], "a:text=first thing");
        assert_eq!(texts[1], format!("b:text=first thing{REPEAT_MARKER}"));
        assert_eq!(texts[2], "a:text=first thing");
        assert_eq!(texts[3], format!("b:text=first thing{REPEAT_MARKER}"));
    }

    #[test]
    fn marker_offset_shifts_the_cadence() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut announcer = announcer(&log).with_parity_offset(1);
        announcer.announce(Announcement::key("one"));
        announcer.announce(Announcement::key("one"));
        let texts = texts(&log);
        assert_eq!(texts[0], format!("a:text=first thing{REPEAT_MARKER}"));
        assert_eq!(texts[1], "b:text=first thing");
    }

    #[test]
    fn multiple_keys_join_into_one_message() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut announcer = announcer(&log);
        announcer.announce(
            Announcement::keys([
                AnnounceKey::plain("one"),
                AnnounceKey::with_args("count", [Arg::Count(3)]),
            ]),
        );
        assert_eq!(texts(&log)[0], "a:text=first thing 3 things");
    }

    #[test]
    fn attributes_are_written_before_text() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut announcer = announcer(&log);
        announcer.announce(Announcement::key("two").assertive().non_atomic());
        let entries = log.borrow().clone();
        assert_eq!(
            entries,
            vec![
                "a:atomic=false".to_owned(),
                "a:live=assertive".to_owned(),
                "a:text=second thing".to_owned(),
            ]
        );
    }

    #[test]
    fn unknown_keys_fall_back_to_the_key_text() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut announcer = announcer(&log);
        announcer.announce(Announcement::key("missing.key"));
        assert_eq!(texts(&log)[0], "a:text=missing.key");
    }
}
