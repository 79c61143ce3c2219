//! User interface

pub mod theme;
pub mod toolbar;

pub use toolbar::{SelectedTool, ToolbarPlugin};
