// Rule tags, annotation modes and options

use std::fmt;
use std::str::FromStr;

/// Error returned when a rule token does not name a [`RuleTag`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule tag: {0}")]
pub struct ParseRuleTagError(pub String);

/// Error returned when a mode name does not name a [`Mode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown annotation mode: {0} (expected plain, tajweed, tawafuq or both)")]
pub struct ParseModeError(pub String);

/// Pronunciation rule assigned to a cluster by the Tajweed pass.
///
/// An unannotated cluster carries `Option::<RuleTag>::None`. The mapping
/// from tag to display color belongs to the presentation layer; the stable
/// identifier it keys on is [`RuleTag::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleTag {
    /// Nasal sound. Present in legends; no rule assigns it.
    Ghunna,
    /// Assimilation with nasalization.
    Idghaam,
    /// Assimilation without nasalization (before laam and ra).
    IdghaamNoGhunna,
    /// Concealment of a silent noon or meem.
    Ikhfa,
    /// Silent noon turned into meem before ba.
    Iqlab,
    /// Echoing of a silenced qalqala letter.
    Qalqala,
    /// Natural prolongation.
    Madd,
    /// Prolongation before a hamza, including across a word boundary.
    MaddMunfasil,
    /// Prolongation before a shadda or a word-internal sukoon.
    MaddLazim,
    /// Silent laam of the definite article before a sun letter.
    LaamShamsiyya,
}

impl RuleTag {
    /// Every tag, in legend order.
    pub const ALL: [RuleTag; 10] = [
        RuleTag::Qalqala,
        RuleTag::Idghaam,
        RuleTag::IdghaamNoGhunna,
        RuleTag::Ikhfa,
        RuleTag::Iqlab,
        RuleTag::Ghunna,
        RuleTag::Madd,
        RuleTag::MaddMunfasil,
        RuleTag::MaddLazim,
        RuleTag::LaamShamsiyya,
    ];

    /// Stable color token used by styling tables.
    pub fn as_str(self) -> &'static str {
        match self {
            RuleTag::Ghunna => "ghunna",
            RuleTag::Idghaam => "idghaam",
            RuleTag::IdghaamNoGhunna => "idghaam_no_ghunna",
            RuleTag::Ikhfa => "ikhfa",
            RuleTag::Iqlab => "iqlab",
            RuleTag::Qalqala => "qalqala",
            RuleTag::Madd => "madd",
            RuleTag::MaddMunfasil => "madd_munfasil",
            RuleTag::MaddLazim => "madd_lazim",
            RuleTag::LaamShamsiyya => "laam_shamsiyya",
        }
    }

    /// Human-readable rule name for legends and tooltips.
    pub fn display_name(self) -> &'static str {
        match self {
            RuleTag::Ghunna => "Ghunna",
            RuleTag::Idghaam => "Idghaam (with Ghunna)",
            RuleTag::IdghaamNoGhunna => "Idghaam (without Ghunna)",
            RuleTag::Ikhfa => "Ikhfa",
            RuleTag::Iqlab => "Iqlab",
            RuleTag::Qalqala => "Qalqala",
            RuleTag::Madd => "Madd",
            RuleTag::MaddMunfasil => "Madd Munfasil",
            RuleTag::MaddLazim => "Madd Lazim",
            RuleTag::LaamShamsiyya => "Laam Shamsiyyah",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RuleTag::Ghunna => "Nasal sound",
            RuleTag::Idghaam => "Merging (with Ghunna)",
            RuleTag::IdghaamNoGhunna => "Merging (without Ghunna)",
            RuleTag::Ikhfa => "Hiding",
            RuleTag::Iqlab => "Changing",
            RuleTag::Qalqala => "Echoing/Bouncing",
            RuleTag::Madd => "Prolongation",
            RuleTag::MaddMunfasil => "Separated Prolongation",
            RuleTag::MaddLazim => "Necessary Prolongation",
            RuleTag::LaamShamsiyya => "Silent Laam",
        }
    }

    /// A short Quranic word or phrase exhibiting the rule.
    ///
    /// `None` for [`RuleTag::Ghunna`], which the classifier never assigns.
    pub fn example(self) -> Option<&'static str> {
        match self {
            RuleTag::Ghunna => None,
            RuleTag::Qalqala => Some("\u{0642}\u{064E}\u{062F}\u{0652}"),
            RuleTag::Idghaam => Some(
                "\u{0645}\u{0650}\u{0646}\u{0652} \u{0646}\u{064E}\u{0651}\u{0639}\u{0650}\u{064A}\u{0645}\u{064D}",
            ),
            RuleTag::IdghaamNoGhunna => Some(
                "\u{0645}\u{0650}\u{0646}\u{0652} \u{0631}\u{064E}\u{0651}\u{0628}\u{0650}\u{0651}\u{0647}\u{0650}\u{0645}\u{0652}",
            ),
            RuleTag::Ikhfa => Some(
                "\u{0645}\u{0650}\u{0646}\u{0652} \u{0642}\u{064E}\u{0628}\u{0652}\u{0644}\u{0650}",
            ),
            RuleTag::Iqlab => Some(
                "\u{0623}\u{064E}\u{0646}\u{0652}\u{0628}\u{0650}\u{0626}\u{0652}\u{0647}\u{064F}\u{0645}",
            ),
            RuleTag::Madd => Some("\u{0642}\u{064E}\u{0627}\u{0644}\u{064E}"),
            RuleTag::MaddMunfasil => Some(
                "\u{0628}\u{0650}\u{0645}\u{064E}\u{0627}\u{0653} \u{0623}\u{064F}\u{0646}\u{0632}\u{0650}\u{0644}\u{064E}",
            ),
            RuleTag::MaddLazim => Some(
                "\u{0627}\u{0644}\u{0636}\u{0651}\u{064E}\u{0627}\u{0644}\u{0651}\u{0650}\u{064A}\u{0646}\u{064E}",
            ),
            RuleTag::LaamShamsiyya => {
                Some("\u{0627}\u{0644}\u{0634}\u{0651}\u{064E}\u{0645}\u{0652}\u{0633}")
            }
        }
    }
}

/// Legend example for the divine-name highlight.
pub const NAME_EXAMPLE: &str = "\u{0627}\u{0644}\u{0644}\u{0651}\u{064E}\u{0647}";

impl fmt::Display for RuleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleTag {
    type Err = ParseRuleTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| ParseRuleTagError(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// The two user toggles owned by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnnotateOptions {
    /// Color clusters by Tajweed rule.
    pub tajweed: bool,
    /// Highlight occurrences of the divine name.
    pub tawafuq: bool,
}

impl Default for AnnotateOptions {
    fn default() -> Self {
        Self {
            tajweed: true,
            tawafuq: true,
        }
    }
}

impl AnnotateOptions {
    pub fn mode(self) -> Mode {
        match (self.tajweed, self.tawafuq) {
            (false, false) => Mode::Plain,
            (true, false) => Mode::TajweedOnly,
            (false, true) => Mode::TawafuqOnly,
            (true, true) => Mode::Combined,
        }
    }
}

/// Which passes run, derived from [`AnnotateOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// No pass runs; the text comes back as one untagged segment.
    Plain,
    TajweedOnly,
    TawafuqOnly,
    /// Both passes, name spans taking precedence.
    Combined,
}

impl Mode {
    pub fn options(self) -> AnnotateOptions {
        let (tajweed, tawafuq) = match self {
            Mode::Plain => (false, false),
            Mode::TajweedOnly => (true, false),
            Mode::TawafuqOnly => (false, true),
            Mode::Combined => (true, true),
        };
        AnnotateOptions { tajweed, tawafuq }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Plain => "plain",
            Mode::TajweedOnly => "tajweed",
            Mode::TawafuqOnly => "tawafuq",
            Mode::Combined => "both",
        }
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "none" => Ok(Mode::Plain),
            "tajweed" => Ok(Mode::TajweedOnly),
            "tawafuq" => Ok(Mode::TawafuqOnly),
            "both" | "combined" => Ok(Mode::Combined),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}
