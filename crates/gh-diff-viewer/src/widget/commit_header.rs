//! Commit header: message, author, committer and parent.

use crate::model::{CommitInfo, Signature};
use chrono::{DateTime, Utc};
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

const SECONDS_PER_DAY: i64 = 60 * 60 * 24;

/// Whole days elapsed between `date` and `now`, formatted for display.
pub fn days_ago(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - date).num_seconds().div_euclid(SECONDS_PER_DAY);
    format!("{} days ago", days)
}

/// Renders the metadata block above the file list.
pub struct CommitHeaderWidget<'a> {
    info: &'a CommitInfo,
    now: DateTime<Utc>,
}

impl<'a> CommitHeaderWidget<'a> {
    pub fn new(info: &'a CommitInfo, now: DateTime<Utc>) -> Self {
        Self { info, now }
    }

    /// Write the header into `out`.
    pub fn render(&self, out: &mut String) {
        let info = self.info;
        out.push_str("<header class=\"commit\">\n<div class=\"commit-main\">\n");
        if let Some(ref avatar) = info.author.avatar_url {
            let _ = writeln!(
                out,
                "<img class=\"avatar\" src=\"{}\" alt=\"Author Avatar\">",
                encode_double_quoted_attribute(avatar)
            );
        }
        let _ = writeln!(
            out,
            "<div>\n<h2 class=\"message\">{}</h2>\n<h3 class=\"authored\">Authored by <span class=\"name\">{}</span> - {}</h3>\n</div>",
            encode_text(&info.message),
            encode_text(&info.author.name),
            self.when(&info.author),
        );
        out.push_str("</div>\n<div class=\"commit-side\">\n");
        let _ = writeln!(
            out,
            "<p class=\"committed\">Committed by <span class=\"name\">{}</span> {}</p>",
            encode_text(&info.committer.name),
            self.when(&info.committer),
        );
        let _ = writeln!(
            out,
            "<p class=\"oid\">Commit <span class=\"sha\">{}</span></p>",
            encode_text(&info.oid)
        );
        if let Some(parent) = info.first_parent() {
            let _ = writeln!(
                out,
                "<p class=\"parent\">Parent <a class=\"sha\" href=\"{}\">{}</a></p>",
                encode_double_quoted_attribute(&format!("../{}/view", parent.oid)),
                encode_text(&parent.oid)
            );
        }
        out.push_str("</div>\n</header>\n");
    }

    fn when(&self, signature: &Signature) -> String {
        days_ago(signature.date, self.now)
    }
}
