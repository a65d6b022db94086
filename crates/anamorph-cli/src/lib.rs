// anamorph-cli: shared utilities for CLI tools.

use std::process;

/// Default field separator for input lines: source TAB target.
pub const DEFAULT_SEPARATOR: char = '\t';

/// Parse a `--separator=X` or `-s X` argument from command line args.
///
/// Returns `(separator, remaining_args)`. The separator must be a single
/// character; TAB is the default. Multi-character values are rejected
/// because the anagram strings themselves may contain any text.
pub fn parse_separator(args: &[String]) -> (char, Vec<String>) {
    let mut separator = DEFAULT_SEPARATOR;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--separator=") {
            separator = single_char(val);
        } else if arg == "--separator" || arg == "-s" {
            if i + 1 < args.len() {
                separator = single_char(&args[i + 1]);
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (separator, remaining)
}

fn single_char(val: &str) -> char {
    let mut chars = val.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => {
            eprintln!("error: separator must be exactly one character, got {val:?}");
            process::exit(1);
        }
    }
}

/// Split an input line into a `(source, target)` pair at the first
/// occurrence of the separator. Returns `None` if the separator is
/// missing.
pub fn split_pair(line: &str, separator: char) -> Option<(&str, &str)> {
    line.split_once(separator)
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
