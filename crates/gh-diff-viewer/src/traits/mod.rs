//! Extension traits for customizing diff viewer behavior.

mod theme_provider;

pub use theme_provider::{DefaultTheme, ThemeProvider};
