// tajweed-annotate: Annotate verses from stdin.
//
// Reads one verse per line and prints its segments:
//   LABEL [start..end]: text
// where LABEL is a rule token (e.g. qalqala), NAME for the divine name, or
// - for untagged text. Offsets are character offsets into the verse.
//
// Usage:
//   tajweed-annotate [OPTIONS]
//
// Options:
//   -m, --mode MODE        plain, tajweed, tawafuq or both (default: both,
//                          or $TAJWEED_MODE)
//   --no-tajweed           Disable rule coloring
//   --no-tawafuq           Disable name highlighting
//   --cache-size N         Memo cache size (0 disables)
//   --summary              Print per-tag counts after the last verse
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use tajweed_engine::handle::Annotator;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if tajweed_cli::wants_help(&args) {
        println!("tajweed-annotate: Annotate Quranic verses from stdin.");
        println!();
        println!("Usage: tajweed-annotate [OPTIONS]");
        println!();
        println!("Reads one verse per line. Prints one line per segment:");
        println!("  LABEL [start..end]: text");
        println!("LABEL is a rule token, NAME for the divine name, or - if untagged.");
        println!();
        println!("Options:");
        println!("  -m, --mode MODE        plain, tajweed, tawafuq or both (default: both)");
        println!("  --no-tajweed           Disable rule coloring");
        println!("  --no-tawafuq           Disable name highlighting");
        println!("  --cache-size N         Memo cache size (0 disables)");
        println!("  --summary              Print per-tag counts at the end");
        println!("  -h, --help             Print this help");
        println!();
        println!("Environment:");
        println!("  {}           Mode used when --mode is absent", tajweed_cli::MODE_ENV);
        println!("  RUST_LOG               Log filter (default: tajweed=warn)");
        return;
    }

    tajweed_cli::init_logging();

    let env_mode = tajweed_cli::env_mode();
    let (opts, args) = tajweed_cli::parse_options(&args, env_mode.as_deref())
        .unwrap_or_else(|e| tajweed_cli::fatal(&e));
    let show_summary = args.iter().any(|a| a == "--summary");
    if let Some(unknown) = args.iter().find(|a| a.as_str() != "--summary") {
        tajweed_cli::fatal(&format!("unknown argument: {unknown}"));
    }

    let annotator = Annotator::with_cache_size(opts.annotate, opts.cache_size);
    let mut summary = tajweed_cli::Summary::default();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut verse_no = 0;
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let verse = line.trim_end_matches('\r');
        if verse.trim().is_empty() {
            continue;
        }
        verse_no += 1;

        let segments = annotator.annotate(verse);
        if verse_no > 1 {
            let _ = writeln!(out);
        }
        let _ = writeln!(out, "=== Verse {verse_no} ===");
        if let Err(e) = tajweed_cli::write_segments(&mut out, &segments) {
            tajweed_cli::fatal(&format!("failed to write output: {e}"));
        }
        summary.add(&segments);
    }

    if show_summary {
        let _ = writeln!(out);
        let _ = writeln!(out, "=== Summary ===");
        if let Err(e) = summary.write_to(&mut out) {
            tajweed_cli::fatal(&format!("failed to write output: {e}"));
        }
    }
}
