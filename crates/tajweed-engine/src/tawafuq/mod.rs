// Divine-name (tawafuq) matcher
//
// Finds occurrences of the name of God, with its attached particles, and
// partitions a text into name and non-name segments. Matching is two-tier:
// literal templates first, then a comparison that ignores minor diacritics
// and alif wasla/alif spelling differences.

use std::sync::LazyLock;

use tajweed_core::character::{fold_alif, is_diacritic, is_minor_diacritic};
use tajweed_core::segment::{NameSegment, Occurrence};

use crate::scanner::diacritic_run_end;

/// Literal renderings of the name, as typeset in Uthmani text.
pub const NAME_TEMPLATES: &[&str] = &[
    "\u{0671}\u{0644}\u{0644}\u{064E}\u{0651}\u{0647}\u{064F}", // ٱللَّهُ
    "\u{0671}\u{0644}\u{0644}\u{064E}\u{0651}\u{0647}\u{0650}", // ٱللَّهِ
    "\u{0671}\u{0644}\u{0644}\u{064E}\u{0651}\u{0647}\u{064E}", // ٱللَّهَ
    "\u{0644}\u{0650}\u{0644}\u{064E}\u{0651}\u{0647}\u{0650}", // لِلَّهِ
    "\u{0628}\u{0650}\u{0671}\u{0644}\u{0644}\u{064E}\u{0651}\u{0647}\u{0650}", // بِٱللَّهِ
    "\u{0648}\u{064E}\u{0671}\u{0644}\u{0644}\u{064E}\u{0651}\u{0647}\u{064F}", // وَٱللَّهُ
    "\u{0641}\u{064E}\u{0671}\u{0644}\u{0644}\u{064E}\u{0651}\u{0647}\u{064F}", // فَٱللَّهُ
    "\u{0671}\u{0644}\u{0644}\u{064E}\u{0651}\u{0670}\u{0647}\u{064F}", // ٱللَّٰهُ
    "\u{0671}\u{0644}\u{0644}\u{064E}\u{0651}\u{0670}\u{0647}\u{0650}", // ٱللَّٰهِ
    "\u{0671}\u{0644}\u{0644}\u{064E}\u{0651}\u{0670}\u{0647}\u{064E}", // ٱللَّٰهَ
    "\u{062A}\u{064E}\u{0671}\u{0644}\u{0644}\u{064E}\u{0651}\u{0647}\u{0650}", // تَٱللَّهِ
];

/// Upper bound on the raw length of a name occurrence, in characters.
pub const MATCH_WINDOW: usize = 15;

static LITERAL: LazyLock<Vec<Vec<char>>> =
    LazyLock::new(|| NAME_TEMPLATES.iter().map(|t| t.chars().collect()).collect());

static NORMALIZED: LazyLock<Vec<Vec<char>>> =
    LazyLock::new(|| LITERAL.iter().map(|t| normalize(t)).collect());

/// Drop minor diacritics and fold alif wasla onto alif.
///
/// Shadda, maddah and superscript alif survive: they distinguish
/// renderings a reader would see as different words.
pub fn normalize(text: &[char]) -> Vec<char> {
    text.iter()
        .copied()
        .filter(|&c| !is_minor_diacritic(c))
        .map(fold_alif)
        .collect()
}

/// Literal match at `i`. Returns the span length, extended over any
/// diacritics trailing the template so the span ends on a cluster boundary.
pub fn match_exact(text: &[char], i: usize) -> Option<usize> {
    let rest = text.get(i..)?;
    LITERAL
        .iter()
        .find(|tmpl| rest.starts_with(tmpl.as_slice()))
        .map(|tmpl| diacritic_run_end(text, i + tmpl.len()) - i)
}

/// Normalized match at `i`. Returns the span length in the original text.
pub fn match_normalized(text: &[char], i: usize) -> Option<usize> {
    let window = text.get(i..(i + MATCH_WINDOW).min(text.len()))?;
    let window = normalize(window);
    let tmpl = NORMALIZED
        .iter()
        .find(|tmpl| window.starts_with(tmpl.as_slice()))?;
    Some(recover_span(text, i, tmpl.len()) - i)
}

/// Walk the original text from `start` until `units` normalized characters
/// have been consumed, then over trailing diacritics. Returns the end index.
fn recover_span(text: &[char], start: usize, units: usize) -> usize {
    let mut j = start;
    let mut consumed = 0;
    while consumed < units && j < text.len() {
        if !is_minor_diacritic(text[j]) {
            consumed += 1;
        }
        j += 1;
    }
    diacritic_run_end(text, j)
}

/// Try both tiers at `i`. Only cluster heads can start a name.
pub fn match_at(text: &[char], i: usize) -> Option<usize> {
    if i >= text.len() || is_diacritic(text[i]) {
        return None;
    }
    match_exact(text, i).or_else(|| match_normalized(text, i))
}

/// Occurrences of the name in a character slice, in scan order.
///
/// Occurrences never overlap: scanning resumes after each match.
pub fn find_occurrences_in(text: &[char]) -> Vec<Occurrence> {
    let mut occurrences = Vec::new();
    let mut i = 0;
    while i < text.len() {
        match match_at(text, i) {
            Some(len) => {
                occurrences.push(Occurrence::new(i, len));
                i += len;
            }
            None => i += 1,
        }
    }
    occurrences
}

/// Occurrences of the name in `text`. Offsets are character offsets.
pub fn find_occurrences(text: &str) -> Vec<Occurrence> {
    let chars: Vec<char> = text.chars().collect();
    find_occurrences_in(&chars)
}

/// Split a character slice into alternating non-name and name segments.
///
/// Abutting occurrences form a single name segment.
pub fn partition_chars(text: &[char]) -> Vec<NameSegment> {
    if text.is_empty() {
        return Vec::new();
    }
    let occurrences = find_occurrences_in(text);
    tracing::debug!(occurrences = occurrences.len(), "tawafuq partition");

    let mut segments: Vec<NameSegment> = Vec::new();
    let mut push = |slice: &[char], is_allah: bool| {
        if let Some(last) = segments.last_mut().filter(|s| s.is_allah == is_allah) {
            last.text.extend(slice);
        } else {
            segments.push(NameSegment::new(slice.iter().collect::<String>(), is_allah));
        }
    };

    let mut last = 0;
    for occ in &occurrences {
        if occ.start > last {
            push(&text[last..occ.start], false);
        }
        push(&text[occ.start..occ.end()], true);
        last = occ.end();
    }
    if last < text.len() {
        push(&text[last..], false);
    }
    segments
}

/// Split `text` into name and non-name segments.
///
/// A text without the name comes back as one non-name segment; empty input
/// yields none.
pub fn partition(text: &str) -> Vec<NameSegment> {
    let chars: Vec<char> = text.chars().collect();
    partition_chars(&chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    // بِسْمِ اللَّهِ الرَّحْمَنِ الرَّحِيمِ
    const BISMILLAH: &str = "\u{0628}\u{0650}\u{0633}\u{0652}\u{0645}\u{0650} \
        \u{0627}\u{0644}\u{0644}\u{064E}\u{0651}\u{0647}\u{0650} \
        \u{0627}\u{0644}\u{0631}\u{064E}\u{0651}\u{062D}\u{0652}\u{0645}\u{064E}\u{0646}\u{0650} \
        \u{0627}\u{0644}\u{0631}\u{064E}\u{0651}\u{062D}\u{0650}\u{064A}\u{0645}\u{0650}";

    // اللَّهِ
    const ALLAHI_PLAIN: &str = "\u{0627}\u{0644}\u{0644}\u{064E}\u{0651}\u{0647}\u{0650}";

    #[test]
    fn template_table() {
        assert_eq!(NAME_TEMPLATES.len(), 11);
        for t in NAME_TEMPLATES {
            assert!(t.chars().count() <= MATCH_WINDOW);
        }
    }

    #[test]
    fn normalize_keeps_shadda_and_folds_alif() {
        let n = normalize(&chars(NAME_TEMPLATES[1]));
        assert_eq!(n, chars("\u{0627}\u{0644}\u{0644}\u{0651}\u{0647}"));
        let n = normalize(&chars(NAME_TEMPLATES[8]));
        assert_eq!(n, chars("\u{0627}\u{0644}\u{0644}\u{0651}\u{0670}\u{0647}"));
    }

    #[test]
    fn exact_tier() {
        let t = chars(NAME_TEMPLATES[0]);
        assert_eq!(match_exact(&t, 0), Some(7));
        assert_eq!(match_exact(&chars(ALLAHI_PLAIN), 0), None);
    }

    #[test]
    fn exact_tier_takes_trailing_marks() {
        // ٱللَّهُۥ: small waw after the name
        let t = chars("\u{0671}\u{0644}\u{0644}\u{064E}\u{0651}\u{0647}\u{064F}\u{06E5} \u{0628}");
        assert_eq!(match_exact(&t, 0), Some(8));
    }

    #[test]
    fn normalized_tier_matches_plain_alif() {
        let t = chars(ALLAHI_PLAIN);
        assert_eq!(match_normalized(&t, 0), Some(7));
    }

    #[test]
    fn normalized_tier_matches_reordered_marks() {
        // shadda before fatha
        let t = chars("\u{0671}\u{0644}\u{0644}\u{0651}\u{064E}\u{0647}\u{0650} \u{0631}");
        assert_eq!(match_exact(&t, 0), None);
        assert_eq!(match_normalized(&t, 0), Some(7));
    }

    #[test]
    fn normalized_span_stops_before_punctuation() {
        let mut t = chars(ALLAHI_PLAIN);
        t.push('.');
        assert_eq!(match_at(&t, 0), Some(7));
    }

    #[test]
    fn normalized_span_at_end_of_text() {
        // bare skeleton اللّه with no case ending
        let t = chars("\u{0627}\u{0644}\u{0644}\u{0651}\u{0647}");
        assert_eq!(match_at(&t, 0), Some(5));
    }

    #[test]
    fn truncated_name_does_not_match() {
        let t = chars("\u{0627}\u{0644}\u{0644}\u{064E}\u{0651}");
        assert_eq!(match_at(&t, 0), None);
    }

    #[test]
    fn no_match_at_diacritic() {
        // فَ + name: scanning at the fatha must not start a match
        let t = chars("\u{0643}\u{064E}\u{0671}\u{0644}\u{0644}\u{064E}\u{0651}\u{0647}\u{064F}");
        assert_eq!(match_at(&t, 1), None);
        assert_eq!(find_occurrences_in(&t), vec![Occurrence::new(2, 7)]);
    }

    #[test]
    fn bismillah_has_one_occurrence() {
        let occ = find_occurrences(BISMILLAH);
        assert_eq!(occ, vec![Occurrence::new(7, 7)]);
        let t = chars(BISMILLAH);
        let span: String = t[7..14].iter().collect();
        assert_eq!(span, ALLAHI_PLAIN);
    }

    #[test]
    fn prefixed_forms() {
        for tmpl in &NAME_TEMPLATES[3..7] {
            let occ = find_occurrences(tmpl);
            assert_eq!(occ, vec![Occurrence::new(0, tmpl.chars().count())], "{tmpl}");
        }
    }

    #[test]
    fn partition_bismillah() {
        let segs = partition(BISMILLAH);
        assert_eq!(segs.len(), 3);
        assert!(!segs[0].is_allah);
        assert_eq!(segs[1], NameSegment::new(ALLAHI_PLAIN, true));
        assert!(!segs[2].is_allah);
        let rebuilt: String = segs.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(rebuilt, BISMILLAH);
    }

    #[test]
    fn partition_without_name() {
        let text = "\u{0642}\u{064E}\u{062F}\u{0652}";
        assert_eq!(partition(text), vec![NameSegment::new(text, false)]);
        assert!(partition("").is_empty());
    }

    #[test]
    fn abutting_names_merge() {
        let text = format!("{}{}", NAME_TEMPLATES[0], NAME_TEMPLATES[1]);
        assert_eq!(find_occurrences(&text).len(), 2);
        assert_eq!(partition(&text), vec![NameSegment::new(text.clone(), true)]);
    }
}
