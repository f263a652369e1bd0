#![forbid(unsafe_code)]

//! Live-region target contract.
//!
//! A live region is a host-owned notification element that assistive
//! technology watches for text mutations. The host creates the two regions
//! once, next to the grid, and keeps them mounted for the grid's lifetime;
//! the announcer only ever writes into them.

/// How urgently assistive technology should relay a region's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Politeness {
    /// Read when the user is idle.
    #[default]
    Polite,

    /// Interrupt whatever is currently being read.
    Assertive,

    /// Do not read at all.
    Off,
}

impl Politeness {
    /// Attribute value hosts write into their markup.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Polite => "polite",
            Self::Assertive => "assertive",
            Self::Off => "off",
        }
    }
}

/// One live-region element.
///
/// [`Announcer`](crate::Announcer) always configures a region before
/// writing: `set_atomic`, then `set_politeness`, then `set_text`.
/// Implementations should apply each call immediately, in order.
pub trait LiveRegion {
    /// Replace the region's text content.
    fn set_text(&mut self, text: &str);

    /// Whether the whole region text is re-read on any mutation.
    fn set_atomic(&mut self, atomic: bool);

    /// Set the region's urgency.
    fn set_politeness(&mut self, politeness: Politeness);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn politeness_attribute_values() {
        assert_eq!(Politeness::Polite.as_str(), "polite");
        assert_eq!(Politeness::Assertive.as_str(), "assertive");
        assert_eq!(Politeness::Off.as_str(), "off");
        assert_eq!(Politeness::default(), Politeness::Polite);
    }
}
