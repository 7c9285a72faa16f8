// Annotator: holds annotation options and a memo cache so that a renderer
// calling back for the same verse does not re-run both passes.
//
// The cache sits behind a RefCell so that every query method takes &self.
// An Annotator is therefore Send but not Sync; give each thread its own.

use std::cell::RefCell;

use tajweed_core::enums::{AnnotateOptions, Mode};
use tajweed_core::segment::{AnnotatedSegment, NameSegment, TajweedSegment};

use crate::cache::{AnnotationCache, DEFAULT_CACHE_SIZE};
use crate::{combine, tajweed, tawafuq};

/// Stateful entry point for repeated annotation.
pub struct Annotator {
    options: AnnotateOptions,

    /// Memoized `annotate` results, keyed on text and options.
    cache: RefCell<AnnotationCache>,
}

impl Annotator {
    pub fn new(options: AnnotateOptions) -> Self {
        Self::with_cache_size(options, DEFAULT_CACHE_SIZE)
    }

    pub fn with_cache_size(options: AnnotateOptions, cache_size: usize) -> Self {
        Self {
            options,
            cache: RefCell::new(AnnotationCache::new(cache_size)),
        }
    }

    pub fn options(&self) -> AnnotateOptions {
        self.options
    }

    pub fn mode(&self) -> Mode {
        self.options.mode()
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Annotate `text` according to the current options.
    ///
    /// Results are cached; a hit returns a clone of the stored segments.
    pub fn annotate(&self, text: &str) -> Vec<AnnotatedSegment> {
        if let Some(hit) = self.cache.borrow().get(text, self.options) {
            tracing::trace!(len = text.len(), "annotation cache hit");
            return hit.to_vec();
        }
        let segments = combine::annotate(text, self.options);
        self.cache
            .borrow_mut()
            .insert(text, self.options, segments.clone());
        segments
    }

    /// Tajweed pass only, regardless of options.
    pub fn classify_tajweed(&self, text: &str) -> Vec<TajweedSegment> {
        tajweed::classify(text)
    }

    /// Tawafuq pass only, regardless of options.
    pub fn partition_tawafuq(&self, text: &str) -> Vec<NameSegment> {
        tawafuq::partition(text)
    }

    /// Both passes merged, regardless of options.
    pub fn combine(&self, text: &str) -> Vec<AnnotatedSegment> {
        combine::combine(text)
    }

    // -----------------------------------------------------------------------
    // Option setters
    // -----------------------------------------------------------------------

    pub fn set_tajweed(&mut self, value: bool) {
        self.options.tajweed = value;
    }

    pub fn set_tawafuq(&mut self, value: bool) {
        self.options.tawafuq = value;
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.options = mode.options();
    }

    /// Replace the cache with an empty one of the given capacity.
    /// 0 disables caching.
    pub fn set_cache_size(&mut self, size: usize) {
        self.cache = RefCell::new(AnnotationCache::new(size));
    }

    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl Default for Annotator {
    fn default() -> Self {
        Self::new(AnnotateOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tajweed_core::enums::RuleTag;

    // قَدْ
    const QAD: &str = "\u{0642}\u{064E}\u{062F}\u{0652}";
    // بِسْمِ ٱللَّهِ
    const BISM_ALLAH: &str =
        "\u{0628}\u{0650}\u{0633}\u{0652}\u{0645}\u{0650} \u{0671}\u{0644}\u{0644}\u{064E}\u{0651}\u{0647}\u{0650}";

    #[test]
    fn default_runs_both_passes() {
        let annotator = Annotator::default();
        assert_eq!(annotator.mode(), Mode::Combined);
        assert_eq!(annotator.annotate(BISM_ALLAH), combine::combine(BISM_ALLAH));
    }

    #[test]
    fn annotate_is_cached() {
        let annotator = Annotator::default();
        let first = annotator.annotate(QAD);
        assert_eq!(annotator.cached_entries(), 1);
        let second = annotator.annotate(QAD);
        assert_eq!(first, second);
        assert_eq!(annotator.cached_entries(), 1);
    }

    #[test]
    fn changing_options_changes_result() {
        let mut annotator = Annotator::default();
        let combined = annotator.annotate(QAD);
        assert_eq!(combined[1].rule, Some(RuleTag::Qalqala));

        annotator.set_tajweed(false);
        assert_eq!(annotator.mode(), Mode::TawafuqOnly);
        let names_only = annotator.annotate(QAD);
        assert_eq!(names_only, vec![AnnotatedSegment::new(QAD, None, false)]);
        assert_eq!(annotator.cached_entries(), 2);
    }

    #[test]
    fn plain_mode_returns_single_segment() {
        let mut annotator = Annotator::default();
        annotator.set_mode(Mode::Plain);
        assert_eq!(
            annotator.annotate(BISM_ALLAH),
            vec![AnnotatedSegment::new(BISM_ALLAH, None, false)]
        );
    }

    #[test]
    fn zero_cache_size_disables_cache() {
        let mut annotator = Annotator::default();
        annotator.set_cache_size(0);
        annotator.annotate(QAD);
        assert_eq!(annotator.cached_entries(), 0);
    }

    #[test]
    fn clear_cache_drops_entries() {
        let annotator = Annotator::default();
        annotator.annotate(QAD);
        annotator.clear_cache();
        assert_eq!(annotator.cached_entries(), 0);
    }

    #[test]
    fn pass_methods_ignore_options() {
        let mut annotator = Annotator::default();
        annotator.set_mode(Mode::Plain);
        assert_eq!(annotator.classify_tajweed(QAD), tajweed::classify(QAD));
        let names = annotator.partition_tawafuq(BISM_ALLAH);
        assert!(names.iter().any(|s| s.is_allah));
        assert_eq!(annotator.combine(BISM_ALLAH), combine::combine(BISM_ALLAH));
    }

    #[test]
    fn empty_input() {
        let annotator = Annotator::default();
        assert!(annotator.annotate("").is_empty());
    }
}
