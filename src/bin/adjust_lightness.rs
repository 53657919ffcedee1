// SPDX-License-Identifier: MIT
//
// adjust_lightness — nudge a hex color into a readable luminance band.
//
// Reads one color and up to three numbers from the command line and
// prints the adjusted color as 0xAARRGGBB. Made for theme pipelines:
// run a palette through it and colors too dark or too bright to read
// comfortably get pulled toward the band, everything else passes
// through unchanged.

use std::env;
use std::process;

use tinct_color::{adjust_lightness, Argb, LuminanceBand};

const USAGE: &str = "\
Usage: adjust_lightness COLOR [LOW_THRESH] [HIGH_THRESH] [MAX_STRENGTH]
  COLOR: color in hex format 0xAARRGGBB or #RRGGBB
  LOW_THRESH: optional, default 150.0 - low luminance threshold (to accept darker colors, reduce the number)
  HIGH_THRESH: optional, default 200.0 - high luminance threshold (to accept lighterer colors, increase the number)
  MAX_STRENGTH: optional, default 0.50 - maximum adjustment strength (0.0 to 1.0)
Examples:
  adjust_lightness 0xff5f3e47
  adjust_lightness #cbbbcf 120 210 0.8
";

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprint!("{USAGE}");
        process::exit(2);
    }

    match run(&args[1..]) {
        Ok(adjusted) => println!("{adjusted}"),
        Err(msg) => {
            eprintln!("ERROR: {msg}");
            process::exit(1);
        }
    }
}

/// Parse the arguments, adjust the color, and hand back the result.
///
/// Thresholds are validated before the color parses, so an inverted
/// band is reported even when the color is bad too.
fn run(args: &[String]) -> Result<Argb, String> {
    let defaults = LuminanceBand::default();
    let low = parse_number(args.get(1), "LOW_THRESH", defaults.low)?;
    let high = parse_number(args.get(2), "HIGH_THRESH", defaults.high)?;
    let max_strength = parse_number(args.get(3), "MAX_STRENGTH", defaults.max_strength)?;

    let band = LuminanceBand::new(low, high, max_strength)
        .map_err(|_| "HIGH_THRESH must be greater than or equal to LOW_THRESH".to_owned())?;

    let color = Argb::parse(&args[0]).map_err(|e| e.to_string())?;
    Ok(adjust_lightness(color, band))
}

/// Parse an optional numeric argument, naming it in the error message.
fn parse_number(arg: Option<&String>, name: &str, default: f64) -> Result<f64, String> {
    match arg {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| format!("invalid {name}: {raw:?}")),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<Argb, String> {
        let owned: Vec<String> = args.iter().map(|s| (*s).to_owned()).collect();
        run(&owned)
    }

    #[test]
    fn readable_color_passes_through() {
        assert_eq!(run_args(&["#cbbbcf"]).unwrap().to_string(), "0xffcbbbcf");
    }

    #[test]
    fn dark_color_is_lightened() {
        assert_eq!(run_args(&["0xff5f3e47"]).unwrap().to_string(), "0xff8a7278");
    }

    #[test]
    fn six_digit_input_gains_opaque_alpha() {
        assert_eq!(run_args(&["#000000"]).unwrap().to_string(), "0xff808080");
    }

    #[test]
    fn custom_thresholds_move_the_band() {
        // Luminance 69.6656 sits inside an explicit 50–100 band.
        let adjusted = run_args(&["0xff5f3e47", "50", "100"]).unwrap();
        assert_eq!(adjusted.to_string(), "0xff5f3e47");
    }

    #[test]
    fn full_strength_blends_all_the_way() {
        let adjusted = run_args(&["#000000", "150", "200", "1.0"]).unwrap();
        assert_eq!(adjusted.to_string(), "0xffffffff");
    }

    #[test]
    fn equal_thresholds_are_accepted() {
        assert!(run_args(&["#cbbbcf", "180", "180"]).is_ok());
    }

    #[test]
    fn inverted_thresholds_error() {
        let err = run_args(&["#cbbbcf", "210", "120"]).unwrap_err();
        assert_eq!(err, "HIGH_THRESH must be greater than or equal to LOW_THRESH");
    }

    #[test]
    fn inverted_thresholds_win_over_a_bad_color() {
        let err = run_args(&["nonsense", "210", "120"]).unwrap_err();
        assert_eq!(err, "HIGH_THRESH must be greater than or equal to LOW_THRESH");
    }

    #[test]
    fn bad_color_reports_the_input() {
        let err = run_args(&["nonsense"]).unwrap_err();
        assert_eq!(err, "unrecognized color format: \"nonsense\"");
    }

    #[test]
    fn bad_number_names_the_argument() {
        let err = run_args(&["#cbbbcf", "abc"]).unwrap_err();
        assert!(err.contains("LOW_THRESH"), "message was: {err}");

        let err = run_args(&["#cbbbcf", "120", "x"]).unwrap_err();
        assert!(err.contains("HIGH_THRESH"), "message was: {err}");

        let err = run_args(&["#cbbbcf", "120", "210", "!"]).unwrap_err();
        assert!(err.contains("MAX_STRENGTH"), "message was: {err}");
    }

    #[test]
    fn numbers_tolerate_surrounding_whitespace() {
        assert!(run_args(&["#cbbbcf", " 120 ", "210"]).is_ok());
    }
}
