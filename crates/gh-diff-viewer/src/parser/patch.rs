//! Parse per-file unified diff patches (as returned by the GitHub compare API).

use crate::model::{DiffLine, Hunk};
use regex::Regex;
use std::sync::OnceLock;

/// Parse one file's patch text into numbered hunks.
///
/// Lines before the first `@@` header are dropped. A header whose ranges
/// cannot be read still opens a hunk, but the base/head counters keep
/// whatever values they had (0 before any valid header). Counters stop at
/// `u32::MAX`. Declared hunk lengths are not checked.
///
/// # Example
/// ```
/// use gh_diff_viewer::parse_patch;
///
/// let hunks = parse_patch("@@ -10,3 +20,3 @@\n a\n-b\n+c\n d");
/// assert_eq!(hunks.len(), 1);
/// assert_eq!(hunks[0].lines[2].head_line_number, Some(21));
/// ```
pub fn parse_patch(patch: &str) -> Vec<Hunk> {
    let mut hunks = Vec::new();
    let mut current: Option<Hunk> = None;
    let mut base_line: u32 = 0;
    let mut head_line: u32 = 0;

    for line in physical_lines(patch) {
        if line.starts_with("@@") {
            if let Some(hunk) = current.take() {
                hunks.push(hunk);
            }
            if let Some((base_start, head_start)) = parse_hunk_header(line) {
                base_line = base_start;
                head_line = head_start;
            } else {
                log::debug!("Malformed hunk header, keeping line counters: {}", line);
            }
            current = Some(Hunk::new(line));
            continue;
        }

        let Some(hunk) = current.as_mut() else {
            continue;
        };

        let numbered = if line.starts_with('-') {
            let l = DiffLine::deletion(line, base_line);
            base_line = base_line.saturating_add(1);
            l
        } else if line.starts_with('+') {
            let l = DiffLine::addition(line, head_line);
            head_line = head_line.saturating_add(1);
            l
        } else {
            let l = DiffLine::context(line, base_line, head_line);
            base_line = base_line.saturating_add(1);
            head_line = head_line.saturating_add(1);
            l
        };
        hunk.lines.push(numbered);
    }

    if let Some(hunk) = current {
        hunks.push(hunk);
    }

    hunks
}

/// Read `(base_start, head_start)` from a `@@ -a[,b] +c[,d] @@` header.
///
/// The length part is loose: `@@ -1, +1 @@` is accepted.
pub fn parse_hunk_header(line: &str) -> Option<(u32, u32)> {
    static HEADER_REGEX: OnceLock<Regex> = OnceLock::new();

    let re = HEADER_REGEX
        .get_or_init(|| Regex::new(r"^@@ -(\d+),?\d* \+(\d+),?\d* @@").unwrap());

    let captures = re.captures(line)?;
    let base_start = captures.get(1)?.as_str().parse().ok()?;
    let head_start = captures.get(2)?.as_str().parse().ok()?;
    Some((base_start, head_start))
}

/// Split on `\n`, without the empty segment a trailing newline leaves behind.
fn physical_lines(text: &str) -> impl Iterator<Item = &str> {
    let text = text.strip_suffix('\n').unwrap_or(text);
    (!text.is_empty())
        .then(|| text.split('\n'))
        .into_iter()
        .flatten()
}
