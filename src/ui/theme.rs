//! Colors and layout constants for the UI

use bevy::prelude::*;

// Window /////////////////////////////////////////////////////////////////////

pub const BACKGROUND_COLOR: Color = Color::srgb(0.08, 0.09, 0.1);

// Toolbar ////////////////////////////////////////////////////////////////////

pub const TOOLBAR_BACKGROUND_COLOR: Color = Color::srgba(0.12, 0.13, 0.14, 1.0);
pub const TOOLBAR_ICON_COLOR: Color = Color::srgb(0.78, 0.78, 0.78);
pub const TOOLBAR_BORDER_COLOR: Color = Color::srgba(0.45, 0.45, 0.45, 1.0);
pub const TOOLBAR_BORDER_RADIUS: f32 = 4.0;
pub const TOOLBAR_BORDER_WIDTH: f32 = 2.0;
pub const TOOLBAR_PADDING: f32 = 8.0;
pub const TOOLBAR_MARGIN: f32 = 16.0;
pub const TOOLBAR_ITEM_SPACING: f32 = 4.0;
pub const TOOLBAR_BUTTON_SIZE: f32 = 48.0;
pub const TOOLBAR_ICON_SIZE: f32 = 28.0;

// Button states //////////////////////////////////////////////////////////////

pub const NORMAL_BUTTON: Color = Color::srgb(0.12, 0.13, 0.14);
pub const HOVERED_BUTTON: Color = Color::srgb(0.22, 0.24, 0.26);
pub const PRESSED_BUTTON: Color = Color::srgb(0.15, 0.45, 0.85);

pub const NORMAL_BUTTON_OUTLINE_COLOR: Color = Color::srgb(0.45, 0.45, 0.45);
pub const HOVERED_BUTTON_OUTLINE_COLOR: Color = Color::srgb(0.7, 0.7, 0.7);
pub const PRESSED_BUTTON_OUTLINE_COLOR: Color = Color::srgb(0.55, 0.8, 1.0);
pub const PRESSED_BUTTON_ICON_COLOR: Color = Color::srgb(0.95, 0.97, 1.0);
