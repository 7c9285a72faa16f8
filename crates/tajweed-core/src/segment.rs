// Segment and occurrence types produced by the annotation passes

use crate::enums::RuleTag;

// ---------------------------------------------------------------------------
// Tajweed pass
// ---------------------------------------------------------------------------

/// A maximal run of clusters sharing the same rule tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TajweedSegment {
    pub text: String,
    /// `None` for unannotated text (izhar, spaces, non-Arabic).
    pub rule: Option<RuleTag>,
}

impl TajweedSegment {
    pub fn new(text: impl Into<String>, rule: Option<RuleTag>) -> Self {
        Self {
            text: text.into(),
            rule,
        }
    }
}

// ---------------------------------------------------------------------------
// Tawafuq pass
// ---------------------------------------------------------------------------

/// One occurrence of the divine name.
///
/// `start` and `len` are character offsets into the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occurrence {
    pub start: usize,
    pub len: usize,
}

impl Occurrence {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Offset one past the last character of the occurrence.
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// A maximal run of name or non-name text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSegment {
    pub text: String,
    pub is_allah: bool,
}

impl NameSegment {
    pub fn new(text: impl Into<String>, is_allah: bool) -> Self {
        Self {
            text: text.into(),
            is_allah,
        }
    }
}

// ---------------------------------------------------------------------------
// Combined output
// ---------------------------------------------------------------------------

/// Final segment handed to the renderer.
///
/// When `is_allah` is set the name styling wins and `rule` is always `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedSegment {
    pub text: String,
    pub rule: Option<RuleTag>,
    pub is_allah: bool,
}

impl AnnotatedSegment {
    pub fn new(text: impl Into<String>, rule: Option<RuleTag>, is_allah: bool) -> Self {
        Self {
            text: text.into(),
            rule,
            is_allah,
        }
    }

    /// A name span. Never carries a rule tag.
    pub fn name(text: impl Into<String>) -> Self {
        Self::new(text, None, true)
    }

    /// Whether `other` would merge with `self` into one segment.
    pub fn same_style(&self, other: &AnnotatedSegment) -> bool {
        self.rule == other.rule && self.is_allah == other.is_allah
    }
}

impl From<TajweedSegment> for AnnotatedSegment {
    fn from(seg: TajweedSegment) -> Self {
        Self::new(seg.text, seg.rule, false)
    }
}

impl From<NameSegment> for AnnotatedSegment {
    fn from(seg: NameSegment) -> Self {
        Self::new(seg.text, None, seg.is_allah)
    }
}

/// Concatenate segment texts. Used to check that a segmentation loses nothing.
pub fn concat_text<'a>(texts: impl IntoIterator<Item = &'a str>) -> String {
    texts.into_iter().collect()
}
