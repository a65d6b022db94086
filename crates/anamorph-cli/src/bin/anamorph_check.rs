// anamorph-check: validate anagram pairs from stdin.
//
// Reads pairs from stdin (one per line, fields separated by the
// separator character) and reports whether each pair is a valid
// anagram. Output format:
//   C: source -> target    (valid anagram pair)
//   W: source -> target    (not an anagram)
//
// Usage:
//   anamorph-check [OPTIONS]
//
// Options:
//   -s, --separator CHAR   Field separator for input lines (default TAB)
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use anamorph::Anagram;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (separator, args) = anamorph_cli::parse_separator(&args);

    if anamorph_cli::wants_help(&args) {
        println!("anamorph-check: validate anagram pairs from stdin.");
        println!();
        println!("Usage: anamorph-check [OPTIONS]");
        println!();
        println!("Reads pairs from stdin (one per line). Prints:");
        println!("  C: source -> target    (valid anagram pair)");
        println!("  W: source -> target    (not an anagram)");
        println!();
        println!("Options:");
        println!("  -s, --separator CHAR   Field separator for input lines (default TAB)");
        println!("  -h, --help             Print this help");
        return;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        if line.is_empty() {
            continue;
        }

        let Some((source, target)) = anamorph_cli::split_pair(&line, separator) else {
            eprintln!("skipping line without separator {separator:?}");
            continue;
        };

        if Anagram::new(source, target).is_ok() {
            let _ = writeln!(out, "C: {source} -> {target}");
        } else {
            let _ = writeln!(out, "W: {source} -> {target}");
        }
    }
}
