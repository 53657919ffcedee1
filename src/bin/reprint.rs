// SPDX-License-Identifier: MIT
//
// reprint — rewrite a log file with keyword highlighting escapes.
//
// Reads a file, wraps every token matching a rule in that rule's color
// escape, and writes the result back — over the input by default, or to
// a second path. The output is meant for a terminal or `less -R`.
//
// Rules come from the command line as a dict literal, in the shape
// shell quoting keeps intact: reprint app.log out.log "{'fail': 'red'}".

use std::env;
use std::fs;
use std::io::{BufWriter, Write};
use std::process;

use tinct_term::colorize::{colorize, ColorizeError};
use tinct_term::rules::{default_rules, RuleSet};

const HELP: &str = "\
Usage: reprint <input_file> [output_file] [rules]

Arguments:
    <input_file> : Path to the file to be read
    [output_file] : Path to the file to be written with highlight markers for terminal
        Defaults to rewriting <input_file> in place
        The use of the command 'less' is recommended for better visualization
    [rules] : Dictionary of case-sensitive rules to be applied
        Reminder: they are input as a dictionary surrounded by double quotes
        Default rules: {'error': 'red', 'warn': 'yellow', 'info': 'blue'}
        Example rules: {'error': 'red', 'warn': 'yellow', 'info': 'blue', 'debug': 'green'}
";

const INVALID_RULES: &str = "Invalid rules input, consult help with -h or --help. \
    Try literal \"{'a' : 'b'}\", with double quotes";

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.get(1).is_some_and(|a| a == "-h" || a == "--help") {
        print!("{HELP}");
        return;
    }

    let Some(input_path) = args.get(1) else {
        eprintln!("reprint: cannot find input file, consult help with -h or --help");
        process::exit(1);
    };
    let output_path = args.get(2).unwrap_or(input_path);

    let rules = match args.get(3) {
        Some(literal) => RuleSet::from_literal(literal).unwrap_or_else(|_| {
            println!("{INVALID_RULES}");
            process::exit(2);
        }),
        None => default_rules(),
    };

    let text = fs::read_to_string(input_path).unwrap_or_else(|e| {
        eprintln!("reprint: {input_path}: {e}");
        process::exit(1);
    });

    let file = fs::File::create(output_path).unwrap_or_else(|e| {
        eprintln!("reprint: {output_path}: {e}");
        process::exit(1);
    });

    let mut out = BufWriter::new(file);
    if let Err(e) = write_colorized(&mut out, &text, &rules) {
        eprintln!("reprint: {e}");
        process::exit(1);
    }
}

/// Colorize `text` into `w`, add the trailing newline, and flush.
fn write_colorized(w: &mut impl Write, text: &str, rules: &RuleSet) -> Result<(), ColorizeError> {
    colorize(w, text, rules)?;
    w.write_all(b"\n")?;
    w.flush()?;
    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_gets_a_trailing_newline() {
        let mut buf = Vec::new();
        write_colorized(&mut buf, "plain text", &RuleSet::new()).unwrap();
        assert_eq!(buf, b"plain text\n".to_vec());
    }

    #[test]
    fn default_rules_paint_keywords() {
        let mut buf = Vec::new();
        write_colorized(&mut buf, "info: started", &default_rules()).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out, "\x1b[34minfo\x1b[0m: started\n");
    }

    #[test]
    fn unknown_color_propagates() {
        let mut rules = RuleSet::new();
        rules.insert("x", "nope");
        let err = write_colorized(&mut Vec::new(), "x", &rules).unwrap_err();
        assert!(err.to_string().contains("unknown color name"));
    }

    #[test]
    fn file_contents_survive_an_in_place_rewrite() {
        let dir = std::env::temp_dir().join("reprint_test");
        let _ = fs::create_dir_all(&dir);
        let path = dir.join("app.log");

        fs::write(&path, "info up\nwarn slow\n").unwrap();

        // The same read-then-create sequence main performs, with the
        // output path equal to the input path.
        let text = fs::read_to_string(&path).unwrap();
        let file = fs::File::create(&path).unwrap();
        let mut out = BufWriter::new(file);
        write_colorized(&mut out, &text, &default_rules()).unwrap();
        drop(out);

        let rewritten = fs::read_to_string(&path).unwrap();
        assert_eq!(
            rewritten,
            "\x1b[34minfo\x1b[0m up\n\x1b[33mwarn\x1b[0m slow\n\n"
        );

        let _ = fs::remove_file(&path);
        let _ = fs::remove_dir(&dir);
    }

    #[test]
    fn help_text_names_the_defaults() {
        assert!(HELP.contains("{'error': 'red', 'warn': 'yellow', 'info': 'blue'}"));
    }
}
