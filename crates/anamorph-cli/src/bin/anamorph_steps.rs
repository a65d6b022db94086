// anamorph-steps: print the transition sequence for anagram pairs.
//
// Reads pairs from stdin, one per line, source and target separated by
// the separator character (TAB by default). For each valid pair, every
// intermediate string is printed on its own line, followed by a blank
// line. Invalid pairs print an `E:` line and processing continues.
//
// Usage:
//   anamorph-steps [OPTIONS]
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
        println!("anamorph-steps: print the transition sequence for anagram pairs.");
        println!();
        println!("Usage: anamorph-steps [OPTIONS]");
        println!();
        println!("Reads pairs from stdin, one per line, source and target separated");
        println!("by the separator character. Prints one intermediate string per");
        println!("line, with a blank line after each pair. Invalid pairs print:");
        println!("  E: \"source\" and \"target\" are not an anagram");
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
            let _ = writeln!(out, "E: missing separator {separator:?} in line");
            let _ = writeln!(out);
            continue;
        };

        match Anagram::new(source, target) {
            Ok(anagram) => {
                for step in anagram.transition_steps() {
                    let _ = writeln!(out, "{step}");
                }
            }
            Err(e) => {
                let _ = writeln!(out, "E: {e}");
            }
        }
        let _ = writeln!(out);
    }
}
