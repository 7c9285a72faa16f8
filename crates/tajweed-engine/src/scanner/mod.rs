// Letter/diacritic navigation over a character slice
//
// All lookups are bounded by the slice: running off either end yields
// `None` (or `false`), never a panic. Callers that scan a substring pass a
// sub-slice, which is what keeps lookahead from leaving it.

use tajweed_core::character::{
    SHADDA, SUKOON_MARKS, TANWEEN_MARKS, is_diacritic, is_word_separator,
};

// ============================================================================
// Diacritics attached to a letter
// ============================================================================

/// The maximal run of diacritics starting at `i + 1`.
///
/// Empty when `i` is the last index or is followed by a non-diacritic.
pub fn diacritics_following(text: &[char], i: usize) -> &[char] {
    let start = (i + 1).min(text.len());
    let end = diacritic_run_end(text, start);
    &text[start..end]
}

/// First index at or after `from` that is not a diacritic.
pub fn diacritic_run_end(text: &[char], from: usize) -> usize {
    let mut end = from;
    while end < text.len() && is_diacritic(text[end]) {
        end += 1;
    }
    end
}

/// Whether any diacritic attached to the letter at `i` belongs to `marks`.
pub fn has_mark(text: &[char], i: usize, marks: &[char]) -> bool {
    diacritics_following(text, i)
        .iter()
        .any(|c| marks.contains(c))
}

pub fn has_sukoon(text: &[char], i: usize) -> bool {
    has_mark(text, i, SUKOON_MARKS)
}

pub fn has_shadda(text: &[char], i: usize) -> bool {
    has_mark(text, i, &[SHADDA])
}

pub fn has_tanween(text: &[char], i: usize) -> bool {
    has_mark(text, i, TANWEEN_MARKS)
}

// ============================================================================
// Lookahead / lookbehind
// ============================================================================

/// Index of the next non-diacritic after `i`, within the same word.
///
/// The result may be a space: same-word rules treat that as "word ends here".
pub fn next_base_index(text: &[char], i: usize) -> Option<usize> {
    let j = diacritic_run_end(text, i + 1);
    (j < text.len()).then_some(j)
}

pub fn next_base_char(text: &[char], i: usize) -> Option<char> {
    next_base_index(text, i).map(|j| text[j])
}

/// Index of the next letter after `i`, skipping diacritics and spaces.
///
/// Noon and meem rules look across word boundaries with this.
pub fn next_arabic_index(text: &[char], i: usize) -> Option<usize> {
    let mut j = i + 1;
    while j < text.len() && (is_diacritic(text[j]) || text[j] == ' ') {
        j += 1;
    }
    (j < text.len()).then_some(j)
}

pub fn next_arabic_char(text: &[char], i: usize) -> Option<char> {
    next_arabic_index(text, i).map(|j| text[j])
}

/// Index of the previous non-diacritic before `i`.
///
/// Only same-word lookbehind exists; no rule needs the previous word.
pub fn prev_base_index(text: &[char], i: usize) -> Option<usize> {
    let mut j = i.min(text.len());
    while j > 0 {
        j -= 1;
        if !is_diacritic(text[j]) {
            return Some(j);
        }
    }
    None
}

pub fn prev_base_char(text: &[char], i: usize) -> Option<char> {
    prev_base_index(text, i).map(|j| text[j])
}

/// Whether the letter at `i` is the last of its word.
pub fn is_word_boundary(text: &[char], i: usize) -> bool {
    next_base_char(text, i).is_none_or(is_word_separator)
}

// ============================================================================
// Clusters
// ============================================================================

/// A base character together with the diacritics attached to it.
///
/// Clusters tile the text: their concatenation is the text itself. The only
/// cluster whose head is a diacritic is a run of marks at the very start of
/// the text, which has no letter to attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cluster {
    pub start: usize,
    pub len: usize,
}

impl Cluster {
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// The characters of this cluster.
    pub fn chars<'a>(&self, text: &'a [char]) -> &'a [char] {
        &text[self.start..self.end()]
    }

    /// Whether the head is a real base character rather than orphaned marks.
    pub fn has_base(&self, text: &[char]) -> bool {
        !is_diacritic(text[self.start])
    }
}

/// Iterator over the clusters of a text, left to right.
pub struct Clusters<'a> {
    text: &'a [char],
    pos: usize,
}

impl Iterator for Clusters<'_> {
    type Item = Cluster;

    fn next(&mut self) -> Option<Cluster> {
        if self.pos >= self.text.len() {
            return None;
        }
        let start = self.pos;
        let end = if is_diacritic(self.text[start]) {
            diacritic_run_end(self.text, start)
        } else {
            diacritic_run_end(self.text, start + 1)
        };
        self.pos = end;
        Some(Cluster {
            start,
            len: end - start,
        })
    }
}

pub fn clusters(text: &[char]) -> Clusters<'_> {
    Clusters { text, pos: 0 }
}
