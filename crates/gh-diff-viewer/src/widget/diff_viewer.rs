//! Main diff viewer page.

use super::{CommitHeaderWidget, DiffContentWidget};
use crate::state::ViewState;
use crate::traits::ThemeProvider;
use chrono::{DateTime, Utc};
use html_escape::encode_text;
use std::fmt::Write;

/// Message shown when the commit touches no files.
pub const EMPTY_MESSAGE: &str = "No file changes detected.";

const LOADING_INDICATOR: &str =
    "<div class=\"loading\" role=\"status\"><div class=\"spinner\"></div></div>\n";
const HIDE_LOADING: &str = "<style>.loading { display: none; }</style>\n";
const DOCUMENT_END: &str = "</main>\n</body>\n</html>\n";

/// The main diff viewer page.
///
/// This is a composite that combines:
/// - Commit header (message, author, committer, parent)
/// - Loading indicator, empty state, or one collapsible section per file
///
/// # Example
///
/// ```
/// use gh_diff_viewer::{DefaultTheme, DiffViewer, ViewState};
///
/// let theme = DefaultTheme;
/// let html = DiffViewer::new(&theme).render(&ViewState::Loading, chrono::Utc::now());
/// assert!(html.contains("loading"));
/// ```
pub struct DiffViewer<'a, T: ThemeProvider + ?Sized> {
    theme: &'a T,
    title: Option<String>,
}

impl<'a, T: ThemeProvider + ?Sized> DiffViewer<'a, T> {
    /// Create a new diff viewer page renderer.
    pub fn new(theme: &'a T) -> Self {
        Self { theme, title: None }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Render a complete HTML document for `state`.
    ///
    /// `now` anchors the relative "days ago" timestamps.
    pub fn render(&self, state: &ViewState, now: DateTime<Utc>) -> String {
        let mut out = self.render_start(state);
        render_main(&mut out, state, now);
        out.push_str(DOCUMENT_END);
        out
    }

    /// Opening part of a page sent before the fetches settle: the document
    /// head and the loading indicator.
    ///
    /// Followed by [`DiffViewer::render_settled_suffix`].
    pub fn render_loading_prefix(&self) -> String {
        let mut out = self.render_start(&ViewState::Loading);
        out.push_str(LOADING_INDICATOR);
        out
    }

    /// Closing part of a streamed page: hides the indicator sent by
    /// [`DiffViewer::render_loading_prefix`] and renders `state`.
    pub fn render_settled_suffix(&self, state: &ViewState, now: DateTime<Utc>) -> String {
        let mut out = String::with_capacity(4096);
        out.push_str(HIDE_LOADING);
        render_main(&mut out, state, now);
        out.push_str(DOCUMENT_END);
        out
    }

    /// Doctype, head and the opening of `<main>`.
    fn render_start(&self, state: &ViewState) -> String {
        let mut out = String::with_capacity(4096);
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        let title = self
            .title
            .as_deref()
            .or_else(|| state.info().map(|i| i.summary()))
            .unwrap_or("Commit");
        let _ = writeln!(out, "<title>{}</title>", encode_text(title));
        self.render_style(&mut out);
        out.push_str("</head>\n<body>\n<main class=\"container\">\n");
        out
    }

    fn render_style(&self, out: &mut String) {
        let t = self.theme;
        let _ = write!(
            out,
            r#"<style>
body {{ margin: 0; background: {page}; font-family: {text_font}; letter-spacing: 0.04em; }}
.container {{ max-width: 1200px; margin: 0 auto; padding: 2rem 1rem; }}
.commit {{ display: flex; gap: 1rem; justify-content: space-between; margin-bottom: 1.5rem; }}
.commit-main {{ display: flex; gap: 1rem; align-items: flex-start; width: 60%; }}
.commit-side {{ width: 40%; text-align: right; color: {secondary}; font-size: 0.875rem; }}
.avatar {{ width: 49px; height: 49px; border-radius: 50%; object-fit: cover; }}
.message {{ font-size: 1rem; font-weight: bold; color: {primary}; margin: 0; white-space: pre-wrap; }}
.authored {{ font-size: 0.875rem; font-weight: normal; color: {muted}; margin-top: 0.5rem; }}
.name {{ font-weight: 600; }}
.parent .sha {{ color: {accent}; text-decoration: none; }}
.empty {{ color: {muted}; }}
.loading {{ display: flex; justify-content: center; align-items: center; height: 10rem; }}
.spinner {{ width: 50px; height: 50px; border: 4px solid {accent}; border-bottom-color: transparent; border-radius: 50%; animation: spin 0.75s linear infinite; }}
@keyframes spin {{ to {{ transform: rotate(360deg); }} }}
.file {{ margin-bottom: 1.25rem; }}
.file summary {{ cursor: pointer; padding: 0.5rem 0; font-size: 0.875rem; }}
.file .path {{ color: {path}; }}
.file .stats {{ color: {muted}; font-size: 0.75rem; }}
.hunks {{ margin-top: 0.5rem; padding-left: 1rem; border: 1px solid #E5E7EB; border-radius: 0.5rem; }}
.hunk {{ margin-top: 0.5rem; overflow: auto; color: {line_fg}; }}
.hunk-header {{ font-size: 0.875rem; color: {hunk_fg}; padding: 0.5rem; margin: 0; font-weight: bold; font-family: {code_font}; }}
.line {{ margin: 0; font-size: 0.75rem; font-weight: bold; font-family: {code_font}; }}
.line.addition {{ background: {addition}; }}
.line.deletion {{ background: {deletion}; }}
.line.context {{ background: {context}; }}
.line-number {{ display: inline-block; min-width: 3em; padding: 0 1em; text-align: right; }}
</style>
"#,
            page = t.page_background(),
            text_font = t.text_font(),
            code_font = t.code_font(),
            primary = t.primary_foreground(),
            secondary = t.secondary_foreground(),
            accent = t.accent_foreground(),
            muted = t.muted_foreground(),
            path = t.file_path_foreground(),
            line_fg = t.line_foreground(),
            hunk_fg = t.hunk_header_foreground(),
            addition = t.addition_background(),
            deletion = t.deletion_background(),
            context = t.context_background(),
        );
    }
}

/// Commit header, then the indicator, empty state or file sections.
fn render_main(out: &mut String, state: &ViewState, now: DateTime<Utc>) {
    if let Some(info) = state.info() {
        CommitHeaderWidget::new(info, now).render(out);
    }

    match state {
        ViewState::Loading => out.push_str(LOADING_INDICATOR),
        ViewState::Ready { files, .. } if files.is_empty() => {
            let _ = writeln!(out, "<p class=\"empty\">{}</p>", EMPTY_MESSAGE);
        }
        ViewState::Ready { files, .. } => DiffContentWidget::new(files).render(out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChangeKind, CommitInfo, FileDiff, Signature};
    use crate::traits::DefaultTheme;
    use chrono::TimeZone;

    fn info() -> CommitInfo {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let signature = Signature {
            name: "Ada".to_string(),
            date,
            email: "ada@example.com".to_string(),
            avatar_url: None,
        };
        CommitInfo {
            oid: "abc123".to_string(),
            message: "Add viewer\n\nbody".to_string(),
            author: signature.clone(),
            committer: signature,
            parents: Vec::new(),
        }
    }

    #[test]
    fn test_loading_state_shows_indicator() {
        let html = DiffViewer::new(&DefaultTheme).render(&ViewState::Loading, Utc::now());
        assert!(html.contains("class=\"loading\""));
        assert!(!html.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_empty_state_message() {
        let state = ViewState::Ready {
            info: Some(info()),
            files: Vec::new(),
        };
        let html = DiffViewer::new(&DefaultTheme).render(&state, Utc::now());
        assert!(html.contains(EMPTY_MESSAGE));
        assert!(html.contains("<title>Add viewer</title>"));
        assert!(!html.contains("class=\"loading\""));
    }

    #[test]
    fn test_files_rendered_with_theme_colours() {
        let state = ViewState::Ready {
            info: None,
            files: vec![FileDiff::new(ChangeKind::Modified, "README.md")],
        };
        let html = DiffViewer::new(&DefaultTheme)
            .with_title("octo/repo")
            .render(&state, Utc::now());
        assert!(html.contains("<title>octo/repo</title>"));
        assert!(html.contains("README.md"));
        assert!(html.contains("background: #D8FFCB"));
        assert!(html.contains("background: #FFE4E9"));
        assert!(!html.contains("class=\"commit\""));
    }

    #[test]
    fn test_prefix_and_suffix_form_one_document() {
        let viewer = DiffViewer::new(&DefaultTheme).with_title("octo/repo");
        let prefix = viewer.render_loading_prefix();
        assert!(prefix.starts_with("<!DOCTYPE html>"));
        assert!(prefix.contains("<title>octo/repo</title>"));
        assert!(prefix.contains("class=\"loading\""));
        assert!(!prefix.contains("</html>"));

        let state = ViewState::Ready {
            info: Some(info()),
            files: Vec::new(),
        };
        let suffix = viewer.render_settled_suffix(&state, Utc::now());
        assert!(suffix.starts_with("<style>.loading { display: none; }</style>"));
        assert!(suffix.contains(EMPTY_MESSAGE));
        assert!(suffix.ends_with("</html>\n"));
        assert!(!suffix.contains("<head>"));
    }
}
