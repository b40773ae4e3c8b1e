use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Print a horizontal separator of box-drawing chars.
pub fn separator(width: usize) -> String {
    "\u{2500}".repeat(width)
}

/// Serialize to pretty JSON and print to stdout.
pub fn print_json_stdout(value: &impl Serialize) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Compute the max display width for file names, with a minimum of `min`.
/// Uses terminal display width rather than byte length so wide glyphs
/// still line up.
pub fn max_name_width<'a>(names: impl Iterator<Item = &'a str>, min: usize) -> usize {
    names
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(min)
        .max(min)
}

#[cfg(test)]
#[path = "report_helpers_test.rs"]
mod tests;
