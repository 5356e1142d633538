//! Trait for providing theme configuration to the diff viewer.

/// Provides CSS colours and fonts for the rendered diff page.
///
/// Implement this trait to integrate the diff viewer with your application's
/// theme system. The theme instance should be injected by the caller that
/// renders the page.
///
/// # Example
///
/// ```
/// use gh_diff_viewer::ThemeProvider;
///
/// struct HighContrast;
///
/// impl ThemeProvider for HighContrast {
///     fn addition_background(&self) -> &str {
///         "#00ff00"
///     }
///
///     fn deletion_background(&self) -> &str {
///         "#ff0000"
///     }
/// }
/// ```
pub trait ThemeProvider: Send + Sync {
    /// Background colour for addition lines.
    fn addition_background(&self) -> &str;

    /// Background colour for deletion lines.
    fn deletion_background(&self) -> &str;

    /// Background colour for context lines.
    fn context_background(&self) -> &str {
        "#FFFFFF"
    }

    /// Page background.
    fn page_background(&self) -> &str {
        "#FBFDFF"
    }

    /// Commit message headline colour.
    fn primary_foreground(&self) -> &str {
        "#39496A"
    }

    /// Committer and commit id text colour.
    fn secondary_foreground(&self) -> &str {
        "#32405D"
    }

    /// Parent link and loading spinner colour.
    fn accent_foreground(&self) -> &str {
        "#1C7CD6"
    }

    /// Muted text ("Authored by", empty state).
    fn muted_foreground(&self) -> &str {
        "#6D727C"
    }

    /// Foreground colour for hunk header text.
    fn hunk_header_foreground(&self) -> &str {
        "#6D84B0"
    }

    /// Foreground colour for diff line text.
    fn line_foreground(&self) -> &str {
        "#657B83"
    }

    /// Foreground colour for file paths in section headers.
    fn file_path_foreground(&self) -> &str {
        "#2563EB"
    }

    /// Font stack for diff content.
    fn code_font(&self) -> &str {
        "\"Courier New\", Courier, monospace"
    }

    /// Font stack for everything else.
    fn text_font(&self) -> &str {
        "Arial, sans-serif"
    }
}

/// Default light theme.
#[derive(Debug, Clone, Default)]
pub struct DefaultTheme;

impl ThemeProvider for DefaultTheme {
    fn addition_background(&self) -> &str {
        "#D8FFCB"
    }

    fn deletion_background(&self) -> &str {
        "#FFE4E9"
    }
}
