// tajweed-cli: shared utilities for CLI tools.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::process;

use tajweed_core::enums::{AnnotateOptions, Mode, RuleTag};
use tajweed_core::segment::AnnotatedSegment;
use tajweed_engine::cache::DEFAULT_CACHE_SIZE;

/// Environment variable consulted when no `--mode` is given.
pub const MODE_ENV: &str = "TAJWEED_MODE";

/// Default log filter when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "tajweed=warn";

/// Label printed for name spans.
pub const NAME_LABEL: &str = "NAME";

/// Label printed for untagged segments.
pub const UNTAGGED_LABEL: &str = "-";

/// Options collected from the command line and environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliOptions {
    pub annotate: AnnotateOptions,
    pub cache_size: usize,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            annotate: AnnotateOptions::default(),
            cache_size: DEFAULT_CACHE_SIZE,
        }
    }
}

/// Install a stderr subscriber filtered by `RUST_LOG`.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Read the mode fallback from the environment.
pub fn env_mode() -> Option<String> {
    std::env::var(MODE_ENV).ok().filter(|v| !v.trim().is_empty())
}

/// Parse annotation flags out of `args`.
///
/// Recognized: `--mode MODE` / `-m MODE` / `--mode=MODE`, `--no-tajweed`,
/// `--no-tawafuq`, `--cache-size N` / `--cache-size=N`. The mode starts
/// from `env_mode` (if any), `--mode` replaces it, and the `--no-*` flags
/// then switch passes off.
///
/// Returns `(options, remaining_args)`.
pub fn parse_options(
    args: &[String],
    env_mode: Option<&str>,
) -> Result<(CliOptions, Vec<String>), String> {
    let mut opts = CliOptions::default();
    if let Some(env) = env_mode {
        let mode: Mode = env.parse().map_err(|e| format!("{MODE_ENV}: {e}"))?;
        opts.annotate = mode.options();
    }

    let mut no_tajweed = false;
    let mut no_tawafuq = false;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--mode=") {
            opts.annotate = parse_mode(val)?;
        } else if arg == "--mode" || arg == "-m" {
            let val = iter.next().ok_or_else(|| format!("{arg} requires a value"))?;
            opts.annotate = parse_mode(val)?;
        } else if let Some(val) = arg.strip_prefix("--cache-size=") {
            opts.cache_size = parse_cache_size(val)?;
        } else if arg == "--cache-size" {
            let val = iter.next().ok_or_else(|| format!("{arg} requires a value"))?;
            opts.cache_size = parse_cache_size(val)?;
        } else if arg == "--no-tajweed" {
            no_tajweed = true;
        } else if arg == "--no-tawafuq" {
            no_tawafuq = true;
        } else {
            remaining.push(arg.clone());
        }
    }

    if no_tajweed {
        opts.annotate.tajweed = false;
    }
    if no_tawafuq {
        opts.annotate.tawafuq = false;
    }
    tracing::debug!(mode = opts.annotate.mode().as_str(), cache_size = opts.cache_size, "cli options");
    Ok((opts, remaining))
}

fn parse_mode(value: &str) -> Result<AnnotateOptions, String> {
    value
        .parse::<Mode>()
        .map(Mode::options)
        .map_err(|e| e.to_string())
}

fn parse_cache_size(value: &str) -> Result<usize, String> {
    value
        .parse()
        .map_err(|_| format!("invalid cache size: {value}"))
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// The label a segment is printed with.
pub fn segment_label(seg: &AnnotatedSegment) -> &'static str {
    if seg.is_allah {
        NAME_LABEL
    } else {
        seg.rule.map_or(UNTAGGED_LABEL, RuleTag::as_str)
    }
}

/// Write one line per segment: `LABEL [start..end]: text`, with character
/// offsets into the verse.
pub fn write_segments<W: Write>(out: &mut W, segments: &[AnnotatedSegment]) -> io::Result<()> {
    let mut pos = 0;
    for seg in segments {
        let len = seg.text.chars().count();
        let display = seg.text.replace('\n', "\\n").replace('\t', "\\t");
        writeln!(
            out,
            "{:17} [{:>4}..{:>4}]: {display}",
            segment_label(seg),
            pos,
            pos + len
        )?;
        pos += len;
    }
    Ok(())
}

/// Render segments on one line, tagged spans in brackets and name spans in
/// braces.
pub fn render_inline(segments: &[AnnotatedSegment]) -> String {
    let mut out = String::new();
    for seg in segments {
        if seg.is_allah {
            out.push('{');
            out.push_str(&seg.text);
            out.push('}');
        } else if seg.rule.is_some() {
            out.push('[');
            out.push_str(&seg.text);
            out.push(']');
        } else {
            out.push_str(&seg.text);
        }
    }
    out
}

/// Running per-label segment counts.
#[derive(Debug, Default)]
pub struct Summary {
    rules: BTreeMap<RuleTag, usize>,
    names: usize,
    verses: usize,
}

impl Summary {
    pub fn add(&mut self, segments: &[AnnotatedSegment]) {
        self.verses += 1;
        for seg in segments {
            if seg.is_allah {
                self.names += 1;
            } else if let Some(rule) = seg.rule {
                *self.rules.entry(rule).or_insert(0) += 1;
            }
        }
    }

    pub fn count(&self, rule: RuleTag) -> usize {
        self.rules.get(&rule).copied().unwrap_or(0)
    }

    pub fn names(&self) -> usize {
        self.names
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "verses: {}", self.verses)?;
        for tag in RuleTag::ALL {
            let n = self.count(tag);
            if n > 0 {
                writeln!(out, "{:17} {n}", tag.as_str())?;
            }
        }
        writeln!(out, "{NAME_LABEL:17} {}", self.names)
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
