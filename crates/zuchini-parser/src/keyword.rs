//! Keyword roles and the literal-to-role lookup table.
//!
//! The [`KeywordTable`] maps literal keyword strings such as `Scenario
//! Outline` or `Given` onto structural roles. The tokenizer consults it for
//! every line, so the table is immutable once built and meant to be shared
//! behind an [`Arc`](std::sync::Arc) by concurrent parses. Swapping the table
//! is how a caller localises the parser.

use std::fmt;

use crate::trim::trim_keyword;

/// Keyword used to categorise a step.
///
/// The enum includes `And` and `But` variants for completeness, but callers
/// usually resolve them against the preceding `Given`/`When`/`Then` using
/// the [`resolve`](Self::resolve) method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StepKeyword {
    /// Setup preconditions for a scenario.
    Given,
    /// Perform an action when testing behaviour.
    When,
    /// Assert the expected outcome of a scenario.
    Then,
    /// Additional conditions that share context with the previous step.
    And,
    /// Negative or contrasting conditions.
    But,
}

impl StepKeyword {
    /// Return the keyword as a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use zuchini_parser::StepKeyword;
    ///
    /// assert_eq!(StepKeyword::Given.as_str(), "Given");
    /// assert_eq!(StepKeyword::And.as_str(), "And");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
            Self::And => "And",
            Self::But => "But",
        }
    }

    /// Returns `true` for `And` and `But`.
    #[must_use]
    pub const fn is_conjunction(&self) -> bool {
        matches!(self, Self::And | Self::But)
    }

    /// Resolve conjunctions to the semantic keyword of the previous step.
    ///
    /// When the current keyword is `And` or `But`, returns the value stored in
    /// `prev`. For primary keywords (`Given`/`When`/`Then`), updates `prev` and
    /// returns the keyword unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use zuchini_parser::StepKeyword;
    ///
    /// let mut prev = Some(StepKeyword::Given);
    /// assert_eq!(StepKeyword::And.resolve(&mut prev), StepKeyword::Given);
    /// assert_eq!(StepKeyword::When.resolve(&mut prev), StepKeyword::When);
    /// assert_eq!(prev, Some(StepKeyword::When));
    /// ```
    #[must_use]
    pub fn resolve(self, prev: &mut Option<Self>) -> Self {
        if self.is_conjunction() {
            prev.as_ref().copied().unwrap_or(Self::Given)
        } else {
            *prev = Some(self);
            self
        }
    }
}

impl fmt::Display for StepKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural category a recognised keyword maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum KeywordRole {
    /// Root of the document.
    Feature,
    /// Steps shared by every scenario of the feature.
    Background,
    /// A concrete scenario.
    Scenario,
    /// A scenario template expanded against Examples tables.
    Outline,
    /// An examples table belonging to an outline.
    Examples,
    /// A step line.
    Step(StepKeyword),
}

impl KeywordRole {
    /// Structural keywords are written with a trailing colon; steps are not.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        !matches!(self, Self::Step(_))
    }
}

/// A keyword recognised at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordMatch<'a> {
    /// The role of the keyword.
    pub role: KeywordRole,
    /// The keyword as written, trimmed of surrounding blanks and colons.
    pub keyword: &'a str,
    /// Trimmed text following the keyword (and colon, for structural roles).
    pub text: &'a str,
}

/// Immutable mapping from literal keyword strings to [`KeywordRole`]s.
///
/// Lookups try the longest literal first so that `Scenario Outline` wins over
/// `Scenario` and `Examples` over `Example`.
///
/// # Examples
/// ```
/// use zuchini_parser::{KeywordRole, KeywordTable, StepKeyword};
///
/// let table = KeywordTable::english().with_keyword("Soit", KeywordRole::Step(StepKeyword::Given));
/// let hit = table.match_line("Soit un utilisateur").unwrap();
/// assert_eq!(hit.keyword, "Soit");
/// assert_eq!(hit.text, "un utilisateur");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    entries: Vec<(String, KeywordRole)>,
}

impl KeywordTable {
    /// Build a table from `(literal, role)` pairs.
    ///
    /// Literals are trimmed of surrounding blanks and colons; empty literals
    /// are ignored. When a literal repeats, the last role wins.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, KeywordRole)>,
        S: AsRef<str>,
    {
        entries
            .into_iter()
            .fold(Self { entries: Vec::new() }, |table, (literal, role)| {
                table.with_keyword(literal.as_ref(), role)
            })
    }

    /// The default English keyword set.
    #[must_use]
    pub fn english() -> Self {
        Self::new([
            ("Feature", KeywordRole::Feature),
            ("Background", KeywordRole::Background),
            ("Scenario", KeywordRole::Scenario),
            ("Example", KeywordRole::Scenario),
            ("Scenario Outline", KeywordRole::Outline),
            ("Scenario Template", KeywordRole::Outline),
            ("Examples", KeywordRole::Examples),
            ("Scenarios", KeywordRole::Examples),
            ("Given", KeywordRole::Step(StepKeyword::Given)),
            ("When", KeywordRole::Step(StepKeyword::When)),
            ("Then", KeywordRole::Step(StepKeyword::Then)),
            ("And", KeywordRole::Step(StepKeyword::And)),
            ("But", KeywordRole::Step(StepKeyword::But)),
            ("*", KeywordRole::Step(StepKeyword::And)),
        ])
    }

    /// Return a copy of the table with `literal` mapped to `role`.
    #[must_use]
    pub fn with_keyword(mut self, literal: &str, role: KeywordRole) -> Self {
        let literal = trim_keyword(literal);
        if literal.is_empty() {
            return self;
        }
        self.entries.retain(|(existing, _)| existing != literal);
        let end = self.entries.len();
        let at = self
            .entries
            .iter()
            .position(|(existing, _)| existing.len() < literal.len())
            .unwrap_or(end);
        self.entries.insert(at, (literal.to_string(), role));
        self
    }

    /// Role registered for an exact literal.
    #[must_use]
    pub fn role_of(&self, literal: &str) -> Option<KeywordRole> {
        let literal = trim_keyword(literal);
        self.entries
            .iter()
            .find(|(existing, _)| existing == literal)
            .map(|(_, role)| *role)
    }

    /// Iterate over `(literal, role)` pairs, longest literal first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, KeywordRole)> {
        self.entries
            .iter()
            .map(|(literal, role)| (literal.as_str(), *role))
    }

    /// Number of registered literals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no literal is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Recognise a keyword at the start of an already left-trimmed line.
    ///
    /// Structural keywords must be followed by a colon (blanks allowed in
    /// between). Step keywords must be followed by whitespace or the end of
    /// the line.
    #[must_use]
    pub fn match_line<'a>(&self, line: &'a str) -> Option<KeywordMatch<'a>> {
        self.entries
            .iter()
            .find_map(|(literal, role)| match_entry(line, literal, *role))
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::english()
    }
}

fn match_entry<'a>(line: &'a str, literal: &str, role: KeywordRole) -> Option<KeywordMatch<'a>> {
    let rest = line.strip_prefix(literal)?;
    if role.is_structural() {
        let text = rest.trim_start_matches([' ', '\t']).strip_prefix(':')?;
        let raw = line.get(..line.len() - text.len())?;
        Some(KeywordMatch {
            role,
            keyword: trim_keyword(raw),
            text: text.trim(),
        })
    } else if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        let raw = line.get(..line.len() - rest.len())?;
        Some(KeywordMatch {
            role,
            keyword: trim_keyword(raw),
            text: rest.trim(),
        })
    } else {
        None
    }
}
