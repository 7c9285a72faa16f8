// FFI functions are inherently unsafe: callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// tajweed-ffi: C-compatible FFI layer for the annotation engine.
//
// Memory management rules:
// - Opaque `Annotator` pointer: created by `tajweed_new`, freed by `tajweed_free`.
// - Returned segment arrays: caller frees with `tajweed_free_segments`.
// - Error strings written to `error_out`: caller frees with `tajweed_free_str`.
// - Rule tokens inside segments are static; do NOT free them.
// - All input strings are UTF-8 encoded, null-terminated C strings. A NULL
//   or non-UTF-8 input yields an empty array.
//
// Flags: bit 0 (1) enables Tajweed coloring, bit 1 (2) enables name
// highlighting.

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;
use std::sync::LazyLock;

use tajweed_core::enums::{AnnotateOptions, Mode, RuleTag};
use tajweed_core::segment::AnnotatedSegment;
use tajweed_engine::handle::Annotator;

pub const TAJWEED_FLAG_TAJWEED: c_int = 1;
pub const TAJWEED_FLAG_TAWAFUQ: c_int = 2;

// ── Segments ────────────────────────────────────────────────────

/// Segment returned by FFI.
#[repr(C)]
pub struct TajweedSegment {
    /// Segment text (heap-allocated, freed with the array).
    pub text: *mut c_char,
    /// Rule color token, or NULL when untagged. Static.
    pub rule: *const c_char,
    /// 1 if this segment is an occurrence of the divine name.
    pub is_allah: c_int,
    /// Start offset in characters.
    pub start: usize,
    /// Length in characters.
    pub len: usize,
}

/// Segment array.
#[repr(C)]
pub struct TajweedSegmentArray {
    pub segments: *mut TajweedSegment,
    pub count: usize,
}

impl TajweedSegmentArray {
    fn empty() -> Self {
        Self {
            segments: ptr::null_mut(),
            count: 0,
        }
    }
}

// ── Stateless annotation ────────────────────────────────────────

/// Annotate `text` with the passes selected by `flags`.
///
/// Returns a `TajweedSegmentArray`. Caller must free with
/// `tajweed_free_segments`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tajweed_annotate(text: *const c_char, flags: c_int) -> TajweedSegmentArray {
    let Some(text) = cstr_to_str(text) else { return TajweedSegmentArray::empty(); };
    segments_to_c(tajweed_engine::annotate(text, flags_to_options(flags)))
}

/// Tajweed pass only. `is_allah` is always 0.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tajweed_classify(text: *const c_char) -> TajweedSegmentArray {
    let Some(text) = cstr_to_str(text) else { return TajweedSegmentArray::empty(); };
    segments_to_c(tajweed_engine::classify(text).into_iter().map(Into::into).collect())
}

/// Name pass only. `rule` is always NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tajweed_partition(text: *const c_char) -> TajweedSegmentArray {
    let Some(text) = cstr_to_str(text) else { return TajweedSegmentArray::empty(); };
    segments_to_c(tajweed_engine::partition(text).into_iter().map(Into::into).collect())
}

/// Both passes merged, name spans taking precedence.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tajweed_combine(text: *const c_char) -> TajweedSegmentArray {
    let Some(text) = cstr_to_str(text) else { return TajweedSegmentArray::empty(); };
    segments_to_c(tajweed_engine::combine(text))
}

/// Free a segment array.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tajweed_free_segments(arr: TajweedSegmentArray) {
    if arr.segments.is_null() || arr.count == 0 {
        return;
    }
    let segments =
        unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(arr.segments, arr.count)) };
    for s in segments.iter() {
        free_c_str(s.text);
    }
}

// ── Handle lifecycle ────────────────────────────────────────────

/// Create a memoizing annotator with the passes selected by `flags`.
#[unsafe(no_mangle)]
pub extern "C" fn tajweed_new(flags: c_int) -> *mut Annotator {
    Box::into_raw(Box::new(Annotator::new(flags_to_options(flags))))
}

/// Free an annotator created by `tajweed_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tajweed_free(handle: *mut Annotator) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

/// Annotate through a handle. Results are cached per handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tajweed_handle_annotate(
    handle: *const Annotator,
    text: *const c_char,
) -> TajweedSegmentArray {
    let Some(handle) = (unsafe { handle.as_ref() }) else { return TajweedSegmentArray::empty(); };
    let Some(text) = cstr_to_str(text) else { return TajweedSegmentArray::empty(); };
    segments_to_c(handle.annotate(text))
}

// ── Option setters ──────────────────────────────────────────────

macro_rules! bool_setter {
    ($name:ident, $method:ident) => {
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $name(handle: *mut Annotator, value: c_int) {
            if let Some(handle) = unsafe { handle.as_mut() } {
                handle.$method(value != 0);
            }
        }
    };
}

bool_setter!(tajweed_set_tajweed, set_tajweed);
bool_setter!(tajweed_set_tawafuq, set_tawafuq);

/// Set the memo cache capacity. 0 (or a negative value) disables caching.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tajweed_set_cache_size(handle: *mut Annotator, value: c_int) {
    if let Some(handle) = unsafe { handle.as_mut() } {
        handle.set_cache_size(usize::try_from(value).unwrap_or(0));
    }
}

// ── Utility functions ───────────────────────────────────────────

/// Parse a mode name ("plain", "tajweed", "tawafuq", "both") into flags.
///
/// Returns -1 on failure; if `error_out` is non-NULL it then receives a
/// heap-allocated message that the caller must free with `tajweed_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tajweed_parse_mode(name: *const c_char, error_out: *mut *mut c_char) -> c_int {
    let Some(name) = cstr_to_str(name) else {
        set_error(error_out, "mode name is null or not UTF-8");
        return -1;
    };
    match name.parse::<Mode>() {
        Ok(mode) => options_to_flags(mode.options()),
        Err(e) => {
            set_error(error_out, &e.to_string());
            -1
        }
    }
}

/// Return the library version string.
///
/// The returned pointer is static. Do NOT free it.
#[unsafe(no_mangle)]
pub extern "C" fn tajweed_version() -> *const c_char {
    static VERSION: LazyLock<CString> =
        LazyLock::new(|| CString::new(env!("CARGO_PKG_VERSION")).unwrap_or_default());
    VERSION.as_ptr()
}

/// Free a heap-allocated C string returned by tajweed functions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tajweed_free_str(s: *mut c_char) {
    free_c_str(s);
}

// ── Internal helpers ────────────────────────────────────────────

/// Rule tokens as C strings, parallel to `RuleTag::ALL`.
static RULE_TOKENS: LazyLock<Vec<CString>> = LazyLock::new(|| {
    RuleTag::ALL
        .iter()
        .map(|t| CString::new(t.as_str()).unwrap_or_default())
        .collect()
});

fn rule_token(rule: Option<RuleTag>) -> *const c_char {
    rule.and_then(|r| RuleTag::ALL.iter().position(|t| *t == r))
        .and_then(|i| RULE_TOKENS.get(i))
        .map_or(ptr::null(), |c| c.as_ptr())
}

fn flags_to_options(flags: c_int) -> AnnotateOptions {
    AnnotateOptions {
        tajweed: flags & TAJWEED_FLAG_TAJWEED != 0,
        tawafuq: flags & TAJWEED_FLAG_TAWAFUQ != 0,
    }
}

fn options_to_flags(options: AnnotateOptions) -> c_int {
    let mut flags = 0;
    if options.tajweed {
        flags |= TAJWEED_FLAG_TAJWEED;
    }
    if options.tawafuq {
        flags |= TAJWEED_FLAG_TAWAFUQ;
    }
    flags
}

fn segments_to_c(segments: Vec<AnnotatedSegment>) -> TajweedSegmentArray {
    if segments.is_empty() {
        return TajweedSegmentArray::empty();
    }
    let mut pos = 0;
    let c_segments: Box<[TajweedSegment]> = segments
        .iter()
        .map(|s| {
            let len = s.text.chars().count();
            let seg = TajweedSegment {
                text: str_to_c(&s.text),
                rule: rule_token(s.rule),
                is_allah: c_int::from(s.is_allah),
                start: pos,
                len,
            };
            pos += len;
            seg
        })
        .collect();
    let count = c_segments.len();
    let segments = Box::into_raw(c_segments) as *mut TajweedSegment;
    TajweedSegmentArray { segments, count }
}

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe { *out = str_to_c(msg); }
    }
}

fn free_c_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(s: &str) -> CString {
        CString::new(s).unwrap()
    }

    fn read(arr: &TajweedSegmentArray) -> Vec<(String, Option<String>, bool, usize, usize)> {
        if arr.count == 0 {
            return Vec::new();
        }
        let segs = unsafe { std::slice::from_raw_parts(arr.segments, arr.count) };
        segs.iter()
            .map(|s| {
                let text = unsafe { CStr::from_ptr(s.text) }.to_str().unwrap().to_string();
                let rule = (!s.rule.is_null())
                    .then(|| unsafe { CStr::from_ptr(s.rule) }.to_str().unwrap().to_string());
                (text, rule, s.is_allah != 0, s.start, s.len)
            })
            .collect()
    }

    #[test]
    fn annotate_qalqala() {
        let text = c("\u{0642}\u{064E}\u{062F}\u{0652}");
        let arr = unsafe { tajweed_annotate(text.as_ptr(), 3) };
        let segs = read(&arr);
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0], ("\u{0642}\u{064E}".to_string(), None, false, 0, 2));
        assert_eq!(segs[1], ("\u{062F}\u{0652}".to_string(), Some("qalqala".to_string()), false, 2, 2));
        unsafe { tajweed_free_segments(arr) };
    }

    #[test]
    fn null_input_is_empty() {
        let arr = unsafe { tajweed_annotate(ptr::null(), 3) };
        assert_eq!(arr.count, 0);
        assert!(arr.segments.is_null());
        unsafe { tajweed_free_segments(arr) };
    }

    #[test]
    fn flags_select_passes() {
        let text = c("\u{0642}\u{064E}\u{062F}\u{0652}");
        let arr = unsafe { tajweed_annotate(text.as_ptr(), 0) };
        let segs = read(&arr);
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].1, None);
        unsafe { tajweed_free_segments(arr) };
    }

    #[test]
    fn name_through_handle() {
        // اللَّهِ
        let text = c("\u{0627}\u{0644}\u{0644}\u{064E}\u{0651}\u{0647}\u{0650}");
        let handle = tajweed_new(TAJWEED_FLAG_TAJWEED | TAJWEED_FLAG_TAWAFUQ);
        let arr = unsafe { tajweed_handle_annotate(handle, text.as_ptr()) };
        let segs = read(&arr);
        assert_eq!(segs.len(), 1);
        assert!(segs[0].2);
        assert_eq!(segs[0].4, 7);
        unsafe {
            tajweed_free_segments(arr);
            tajweed_set_tawafuq(handle, 0);
        }
        let arr = unsafe { tajweed_handle_annotate(handle, text.as_ptr()) };
        assert!(read(&arr).iter().all(|s| !s.2));
        unsafe {
            tajweed_free_segments(arr);
            tajweed_free(handle);
        }
    }

    #[test]
    fn parse_mode() {
        let both = c("both");
        assert_eq!(unsafe { tajweed_parse_mode(both.as_ptr(), ptr::null_mut()) }, 3);
        let bad = c("loud");
        let mut err: *mut c_char = ptr::null_mut();
        assert_eq!(unsafe { tajweed_parse_mode(bad.as_ptr(), &mut err) }, -1);
        assert!(!err.is_null());
        let msg = unsafe { CStr::from_ptr(err) }.to_str().unwrap().to_string();
        assert!(msg.contains("loud"));
        unsafe { tajweed_free_str(err) };
    }

    #[test]
    fn version_is_static() {
        let v = unsafe { CStr::from_ptr(tajweed_version()) };
        assert_eq!(v.to_str().unwrap(), env!("CARGO_PKG_VERSION"));
    }
}
