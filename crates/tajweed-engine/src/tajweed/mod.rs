// Tajweed rule classifier
//
// One left-to-right pass over the clusters of a text. Each cluster gets at
// most one rule tag; runs of equally tagged clusters are coalesced into
// segments.

pub mod rules;

use tajweed_core::character::{is_arabic_letter, is_diacritic};
use tajweed_core::enums::RuleTag;
use tajweed_core::segment::TajweedSegment;

use crate::scanner::clusters;
use rules::RULES;

/// Tag for the letter at index `i`, or `None`.
///
/// Characters outside the Arabic blocks and diacritics are never evaluated.
pub fn rule_at(text: &[char], i: usize) -> Option<RuleTag> {
    let c = text[i];
    if !is_arabic_letter(c) || is_diacritic(c) {
        return None;
    }
    RULES.iter().find_map(|(name, check)| {
        let tag = check(text, i)?;
        tracing::trace!(index = i, rule = *name, tag = tag.as_str(), "tajweed rule matched");
        Some(tag)
    })
}

/// Accumulates cluster texts into maximal equally tagged segments.
pub(crate) struct SegmentBuilder {
    segments: Vec<TajweedSegment>,
    current: String,
    current_rule: Option<RuleTag>,
}

impl SegmentBuilder {
    pub(crate) fn new() -> Self {
        Self {
            segments: Vec::new(),
            current: String::new(),
            current_rule: None,
        }
    }

    pub(crate) fn push(&mut self, text: &[char], rule: Option<RuleTag>) {
        if rule != self.current_rule && !self.current.is_empty() {
            let done = std::mem::take(&mut self.current);
            self.segments.push(TajweedSegment::new(done, self.current_rule));
        }
        self.current_rule = rule;
        self.current.extend(text);
    }

    pub(crate) fn finish(mut self) -> Vec<TajweedSegment> {
        if !self.current.is_empty() {
            self.segments
                .push(TajweedSegment::new(self.current, self.current_rule));
        }
        self.segments
    }
}

/// Classify a character slice.
///
/// Lookahead and lookbehind never leave the slice, so classifying a
/// sub-slice is the same as classifying that substring on its own.
pub fn classify_chars(text: &[char]) -> Vec<TajweedSegment> {
    let mut builder = SegmentBuilder::new();
    for cluster in clusters(text) {
        let rule = if cluster.has_base(text) {
            rule_at(text, cluster.start)
        } else {
            None
        };
        builder.push(cluster.chars(text), rule);
    }
    builder.finish()
}

/// Classify a text into Tajweed segments.
///
/// Empty input yields no segments. Concatenating the segment texts gives
/// back `text` exactly.
pub fn classify(text: &str) -> Vec<TajweedSegment> {
    if text.is_empty() {
        return Vec::new();
    }
    let chars: Vec<char> = text.chars().collect();
    classify_chars(&chars)
}
