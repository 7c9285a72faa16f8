// Combining the Tajweed and name passes
//
// Name spans win: inside one, no Tajweed color applies. Each gap between
// names is classified as its own slice so that rule lookahead can never
// resolve against a letter inside, or beyond, a name.

use tajweed_core::enums::{AnnotateOptions, Mode};
use tajweed_core::segment::{AnnotatedSegment, TajweedSegment};

use crate::tajweed::classify_chars;
use crate::tawafuq::{find_occurrences_in, partition_chars};

/// Append `seg`, merging it into the last segment when both share a style.
fn push_merged(out: &mut Vec<AnnotatedSegment>, seg: AnnotatedSegment) {
    if let Some(last) = out.last_mut().filter(|last| last.same_style(&seg)) {
        last.text.push_str(&seg.text);
    } else {
        out.push(seg);
    }
}

/// Combine with a caller-supplied Tajweed classifier.
pub fn combine_with<F>(text: &[char], classify: F) -> Vec<AnnotatedSegment>
where
    F: Fn(&[char]) -> Vec<TajweedSegment>,
{
    if text.is_empty() {
        return Vec::new();
    }
    let occurrences = find_occurrences_in(text);

    let mut out = Vec::new();
    let mut last = 0;
    for occ in &occurrences {
        if occ.start > last {
            for seg in classify(&text[last..occ.start]) {
                push_merged(&mut out, seg.into());
            }
        }
        let name: String = text[occ.start..occ.end()].iter().collect();
        push_merged(&mut out, AnnotatedSegment::name(name));
        last = occ.end();
    }
    if last < text.len() {
        for seg in classify(&text[last..]) {
            push_merged(&mut out, seg.into());
        }
    }

    tracing::debug!(
        occurrences = occurrences.len(),
        segments = out.len(),
        "combined annotation"
    );
    out
}

/// Tajweed coloring with name spans taking precedence.
pub fn combine(text: &str) -> Vec<AnnotatedSegment> {
    let chars: Vec<char> = text.chars().collect();
    combine_with(&chars, classify_chars)
}

/// Run the passes selected by `options`.
///
/// With both passes off the text comes back untouched as one untagged
/// segment.
pub fn annotate(text: &str, options: AnnotateOptions) -> Vec<AnnotatedSegment> {
    if text.is_empty() {
        return Vec::new();
    }
    let chars: Vec<char> = text.chars().collect();
    match options.mode() {
        Mode::Plain => vec![AnnotatedSegment::new(text, None, false)],
        Mode::TajweedOnly => classify_chars(&chars).into_iter().map(Into::into).collect(),
        Mode::TawafuqOnly => partition_chars(&chars).into_iter().map(Into::into).collect(),
        Mode::Combined => combine_with(&chars, classify_chars),
    }
}
