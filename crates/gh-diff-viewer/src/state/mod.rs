//! State management for the diff viewer page.

mod view_state;

pub use view_state::ViewState;
