//! Per-file collapsible sections with hunks and numbered lines.

use crate::model::{DiffLine, FileDiff, Hunk};
use html_escape::encode_text;
use std::fmt::Write;

/// Renders one `<details>` section per changed file.
///
/// Sections are independent, so any number of them can be open at once.
pub struct DiffContentWidget<'a> {
    files: &'a [FileDiff],
}

impl<'a> DiffContentWidget<'a> {
    pub fn new(files: &'a [FileDiff]) -> Self {
        Self { files }
    }

    /// Write the sections into `out`.
    pub fn render(&self, out: &mut String) {
        out.push_str("<div class=\"files\">\n");
        for (index, file) in self.files.iter().enumerate() {
            render_file(out, index, file);
        }
        out.push_str("</div>\n");
    }
}

fn render_file(out: &mut String, index: usize, file: &FileDiff) {
    let _ = writeln!(
        out,
        "<details class=\"file\" id=\"file-{}\">\n<summary><span class=\"change-kind\" title=\"{}\">{}</span> <span class=\"path\">{}</span> <span class=\"stats\">+{} -{}</span></summary>",
        index,
        file.change_kind.as_str(),
        file.change_kind.as_char(),
        encode_text(&file.head_file.path),
        file.additions(),
        file.deletions(),
    );
    out.push_str("<div class=\"hunks\">\n");
    for hunk in &file.hunks {
        render_hunk(out, hunk);
    }
    out.push_str("</div>\n</details>\n");
}

fn render_hunk(out: &mut String, hunk: &Hunk) {
    let _ = writeln!(
        out,
        "<div class=\"hunk\">\n<pre class=\"hunk-header\">{}</pre>",
        encode_text(&hunk.header)
    );
    out.push_str("<div class=\"lines\">\n");
    for line in &hunk.lines {
        render_line(out, line);
    }
    out.push_str("</div>\n</div>\n");
}

fn render_line(out: &mut String, line: &DiffLine) {
    let _ = writeln!(
        out,
        "<pre class=\"line {}\"><span class=\"line-number\">{}</span><span class=\"line-number\">{}</span><span class=\"content\">{}</span></pre>",
        line.kind().css_class(),
        line_number(line.base_line_number),
        line_number(line.head_line_number),
        encode_text(&line.content),
    );
}

/// Blank placeholder when the line has no number on that side.
fn line_number(number: Option<u32>) -> String {
    number.map(|n| n.to_string()).unwrap_or_default()
}
