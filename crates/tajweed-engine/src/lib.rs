//! Tajweed annotation engine for Quranic Arabic text.
//!
//! Two independent passes over a verse, and a combinator:
//!
//! - [`scanner`] -- letter/diacritic navigation and clusters
//! - [`tajweed`] -- priority-ordered pronunciation rules, one tag per cluster
//! - [`tawafuq`] -- occurrences of the divine name
//! - [`combine`] -- merges both, name spans taking precedence
//!
//! Every function is a pure, synchronous pass over an in-memory string and
//! is safe to call from any number of threads. Offsets are character
//! offsets. Callers that re-render the same verse can memoize through
//! [`handle::Annotator`] (feature `handle`).

pub mod combine;
pub mod scanner;
pub mod tajweed;
pub mod tawafuq;

#[cfg(feature = "handle")]
pub mod cache;
#[cfg(feature = "handle")]
pub mod handle;

pub use combine::{annotate, combine};
pub use tajweed::classify;
pub use tawafuq::{find_occurrences, partition};

pub use tajweed_core::enums::{AnnotateOptions, Mode, RuleTag};
pub use tajweed_core::segment::{AnnotatedSegment, NameSegment, Occurrence, TajweedSegment};
