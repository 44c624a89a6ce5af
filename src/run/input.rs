//! Reading the address list.

use std::io::BufRead;

/// Normalizes one input line into an address candidate.
///
/// Returns `None` for blank lines and `#` comments. The address itself is not
/// validated here; unparseable entries flow through and resolve to nothing.
pub(crate) fn parse_input_line(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    Some(trimmed)
}

/// Iterates the address candidates of a line-oriented reader.
pub(crate) fn read_addresses<R: BufRead>(
    reader: R,
) -> impl Iterator<Item = std::io::Result<String>> {
    reader.lines().filter_map(|line| match line {
        Ok(line) => parse_input_line(&line).map(|ip| Ok(ip.to_string())),
        Err(e) => Some(Err(e)),
    })
}
