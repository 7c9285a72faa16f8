// tajweed-legend: Print the rule legend.
//
// For every rule tag prints its color token, display name, description and
// an example word annotated by the engine (tagged spans in [brackets], the
// divine name in {braces}).
//
// Usage:
//   tajweed-legend [-h]

use std::io::{self, Write};

use tajweed_core::enums::{NAME_EXAMPLE, RuleTag};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if tajweed_cli::wants_help(&args) {
        println!("tajweed-legend: Print every Tajweed rule with an annotated example.");
        println!();
        println!("Usage: tajweed-legend");
        return;
    }

    tajweed_cli::init_logging();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for tag in RuleTag::ALL {
        let _ = writeln!(out, "{} ({})", tag.display_name(), tag.as_str());
        let _ = writeln!(out, "  {}", tag.description());
        match tag.example() {
            Some(example) => {
                let segments = tajweed_engine::combine(example);
                let _ = writeln!(out, "  e.g. {}", tajweed_cli::render_inline(&segments));
            }
            None => {
                let _ = writeln!(out, "  (not assigned automatically)");
            }
        }
        let _ = writeln!(out);
    }

    let segments = tajweed_engine::combine(NAME_EXAMPLE);
    let _ = writeln!(out, "Divine name ({})", tajweed_cli::NAME_LABEL);
    let _ = writeln!(out, "  e.g. {}", tajweed_cli::render_inline(&segments));
}
