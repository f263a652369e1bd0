#![forbid(unsafe_code)]

//! String catalogs: key lookup, locale fallback, interpolation.
//!
//! Templates use positional placeholders: `"{0} values selected."`. A
//! placeholder is `{` + ASCII digits + `}`; anything else containing a
//! brace is literal text. Resolution never fails — missing keys resolve to
//! the key itself and missing arguments leave the placeholder in place, so
//! an incomplete catalog degrades to readable output instead of erroring
//! in the middle of an announcement.

use std::collections::HashMap;
use std::fmt;

/// Resolves a translation key plus arguments into display text.
///
/// Implementations must be total: when a key is unknown, return the key
/// itself rather than failing.
pub trait Translator {
    /// Resolve `key`, interpolating `args` into its template.
    fn resolve(&self, key: &str, args: &[Arg]) -> String;
}

/// An interpolation argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// A number, rendered in plain decimal.
    Count(usize),

    /// Pre-rendered text.
    Text(String),
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<usize> for Arg {
    fn from(n: usize) -> Self {
        Self::Count(n)
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Errors from loading externalized string entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// A non-comment line had no `=` between key and template.
    MissingDelimiter {
        /// Locale being parsed.
        locale: String,
        /// One-based line number.
        line: usize,
    },

    /// The key side of a line was empty.
    EmptyKey {
        /// Locale being parsed.
        locale: String,
        /// One-based line number.
        line: usize,
    },

    /// A template opened a positional placeholder and never closed it.
    UnclosedPlaceholder {
        /// Locale being parsed.
        locale: String,
        /// Key whose template is malformed.
        key: String,
    },
}

impl fmt::Display for I18nError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDelimiter { locale, line } => {
                write!(f, "{locale}: line {line} has no `=` delimiter")
            }
            Self::EmptyKey { locale, line } => {
                write!(f, "{locale}: line {line} has an empty key")
            }
            Self::UnclosedPlaceholder { locale, key } => {
                write!(f, "{locale}: template for `{key}` has an unclosed placeholder")
            }
        }
    }
}

impl std::error::Error for I18nError {}

/// The strings of one locale.
#[derive(Debug, Clone, Default)]
pub struct LocaleStrings {
    locale: String,
    entries: HashMap<String, String>,
}

impl LocaleStrings {
    /// Create an empty locale.
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            entries: HashMap::new(),
        }
    }

    /// Locale tag this set of strings belongs to.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Set one entry, replacing any previous template for `key`.
    pub fn set(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.entries.insert(key.into(), template.into());
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn entry(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.set(key, template);
        self
    }

    /// Template for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Parse line-oriented `key = template` entries.
    ///
    /// Blank lines and lines starting with `#` are skipped. Whitespace
    /// around the key and the template is trimmed. Templates are validated
    /// for unclosed positional placeholders at load time, so a bad catalog
    /// fails here and not mid-announcement.
    ///
    /// ```
    /// use keygrid_i18n::LocaleStrings;
    ///
    /// let strings = LocaleStrings::parse_entries(
    ///     "en-US",
    ///     "# selection strings\ngrid.selection.many-selected = {0} values selected.\n",
    /// )
    /// .unwrap();
    /// assert_eq!(
    ///     strings.get("grid.selection.many-selected"),
    ///     Some("{0} values selected."),
    /// );
    /// ```
    pub fn parse_entries(locale: impl Into<String>, text: &str) -> Result<Self, I18nError> {
        let mut strings = Self::new(locale);
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, template)) = line.split_once('=') else {
                return Err(I18nError::MissingDelimiter {
                    locale: strings.locale.clone(),
                    line: idx + 1,
                });
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(I18nError::EmptyKey {
                    locale: strings.locale.clone(),
                    line: idx + 1,
                });
            }
            let template = template.trim();
            if has_unclosed_placeholder(template) {
                return Err(I18nError::UnclosedPlaceholder {
                    locale: strings.locale.clone(),
                    key: key.to_owned(),
                });
            }
            strings.set(key, template);
        }
        Ok(strings)
    }
}

/// An ordered chain of locales: the first is the primary language,
/// the rest are fallbacks tried in order.
#[derive(Debug, Clone, Default)]
pub struct StringCatalog {
    chain: Vec<LocaleStrings>,
}

impl StringCatalog {
    /// Create an empty catalog. With no locales loaded every key resolves
    /// to itself.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a locale to the end of the fallback chain.
    pub fn push_locale(&mut self, strings: LocaleStrings) {
        self.chain.push(strings);
    }

    /// Builder form of [`push_locale`](Self::push_locale).
    #[must_use]
    pub fn with_locale(mut self, strings: LocaleStrings) -> Self {
        self.push_locale(strings);
        self
    }

    /// Locales currently in the chain, primary first.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.chain.iter().map(LocaleStrings::locale)
    }

    /// First template found for `key` walking the fallback chain.
    #[must_use]
    pub fn template(&self, key: &str) -> Option<&str> {
        self.chain.iter().find_map(|l| l.get(key))
    }
}

impl Translator for StringCatalog {
    fn resolve(&self, key: &str, args: &[Arg]) -> String {
        match self.template(key) {
            Some(template) => interpolate(template, args),
            None => key.to_owned(),
        }
    }
}

/// Replace `{n}` placeholders with the matching argument.
///
/// Out-of-range indices and bare `{` stay literal.
#[must_use]
pub fn interpolate(template: &str, args: &[Arg]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        match placeholder_index(tail) {
            Some((idx, consumed)) => {
                match args.get(idx) {
                    Some(arg) => out.push_str(&arg.to_string()),
                    // Keep the placeholder visible rather than dropping it.
                    None => {
                        out.push('{');
                        out.push_str(&tail[..consumed + 1]);
                    }
                }
                rest = &tail[consumed + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Parse the head of `tail` as `digits}`. Returns the index and how many
/// bytes the digits take.
fn placeholder_index(tail: &str) -> Option<(usize, usize)> {
    let close = tail.find('}')?;
    if close == 0 || !tail[..close].bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let idx = tail[..close].parse().ok()?;
    Some((idx, close))
}

/// True when the template opens a positional placeholder (`{` + digit)
/// that never closes.
fn has_unclosed_placeholder(template: &str) -> bool {
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let tail = &rest[open + 1..];
        let digits = tail.bytes().take_while(u8::is_ascii_digit).count();
        if digits > 0 && !tail[digits..].starts_with('}') {
            return true;
        }
        rest = tail;
    }
    false
}
