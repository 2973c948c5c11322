//! The plain-text run log written by `trials` and read by `summary`.
//!
//! Each run appends three lines:
//!
//! ```text
//! run #3
//! random first: {'X': 0, 'O': 81, 'Tie': 19}
//! minimax first: {'X': 97, 'O': 0, 'Tie': 3}
//! ```
//!
//! The key names, quotes, and braces are fixed; external tools match them
//! literally.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::arena::Tally;
use crate::constants::{LABEL_MINIMAX_FIRST, LABEL_RANDOM_FIRST, TAIL_LINES};

/// One `run #N` block of the log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunRecord {
    pub run: u32,
    /// `(label, tally)` lines in file order
    pub tallies: Vec<(String, Tally)>,
}

/// Render a run block, trailing newline included.
pub fn format_record(run: u32, random_first: &Tally, minimax_first: &Tally) -> String {
    format!(
        "run #{run}\n{LABEL_RANDOM_FIRST}: {random_first}\n{LABEL_MINIMAX_FIRST}: {minimax_first}\n"
    )
}

/// Extract `N` from a line containing `run #N`.
pub fn parse_run_number(line: &str) -> Option<u32> {
    let start = line.find("run #")? + "run #".len();
    leading_number(&line[start..]).map(|(n, _)| n)
}

/// Extract a tally from a line containing `{'X': a, 'O': b, 'Tie': c}`.
pub fn parse_tally(line: &str) -> Option<Tally> {
    let start = line.find("{'X': ")? + "{'X': ".len();
    let (x, rest) = leading_number(&line[start..])?;
    let rest = rest.strip_prefix(", 'O': ")?;
    let (o, rest) = leading_number(rest)?;
    let rest = rest.strip_prefix(", 'Tie': ")?;
    let (tie, rest) = leading_number(rest)?;
    rest.strip_prefix('}')?;
    Some(Tally { x, o, tie })
}

/// Split a run of leading ASCII digits off `s` and parse it.
fn leading_number(s: &str) -> Option<(u32, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let n = s[..end].parse().ok()?;
    Some((n, &s[end..]))
}

/// The number of the last run in the log, or 0 if there is none.
///
/// Only the last few lines are inspected. A missing file counts as empty.
pub fn last_run_number(path: &Path) -> Result<u32> {
    let contents = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read log {}", path.display()));
        }
    };
    Ok(contents
        .lines()
        .rev()
        .take(TAIL_LINES)
        .find_map(parse_run_number)
        .unwrap_or(0))
}

/// Append a run block to the log, creating it if needed.
///
/// Returns the number given to the new run.
pub fn append_run(path: &Path, random_first: &Tally, minimax_first: &Tally) -> Result<u32> {
    let run = last_run_number(path)? + 1;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log {}", path.display()))?;
    file.write_all(format_record(run, random_first, minimax_first).as_bytes())
        .with_context(|| format!("Failed to write log {}", path.display()))?;
    Ok(run)
}

/// Parse every run block in the log.
///
/// Tally lines before the first `run #` header are ignored, as are lines
/// that match neither form.
pub fn parse_log(path: &Path) -> Result<Vec<RunRecord>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read log {}", path.display()))?;

    let mut records: Vec<RunRecord> = Vec::new();
    for line in contents.lines() {
        if let Some(run) = parse_run_number(line) {
            records.push(RunRecord {
                run,
                tallies: Vec::new(),
            });
        } else if let Some(tally) = parse_tally(line) {
            if let Some(record) = records.last_mut() {
                let label = line.split_once(':').map_or("", |(l, _)| l).trim();
                record.tallies.push((label.to_string(), tally));
            }
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record() {
        let a = Tally { x: 0, o: 81, tie: 19 };
        let b = Tally { x: 97, o: 0, tie: 3 };
        assert_eq!(
            format_record(3, &a, &b),
            "run #3\nrandom first: {'X': 0, 'O': 81, 'Tie': 19}\n\
             minimax first: {'X': 97, 'O': 0, 'Tie': 3}\n"
        );
    }

    #[test]
    fn test_parse_run_number() {
        assert_eq!(parse_run_number("run #12"), Some(12));
        assert_eq!(parse_run_number("  run #7 extra"), Some(7));
        assert_eq!(parse_run_number("run #"), None);
        assert_eq!(parse_run_number("random first: {'X': 1, 'O': 2, 'Tie': 3}"), None);
    }

    #[test]
    fn test_parse_tally() {
        assert_eq!(
            parse_tally("minimax first: {'X': 97, 'O': 0, 'Tie': 3}"),
            Some(Tally { x: 97, o: 0, tie: 3 })
        );
        assert_eq!(parse_tally("{'X': 1, 'O': 2}"), None);
        assert_eq!(parse_tally("{\"X\": 1, \"O\": 2, \"Tie\": 3}"), None);
        assert_eq!(parse_tally("run #1"), None);
    }
}
