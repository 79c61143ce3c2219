// Settings ///////////////////////////////////////////////////////////////////
// This module contains all the settings for the app.

use bevy::prelude::MouseButton;

// Window /////////////////////////////////////////////////////////////////////

pub const WINDOW_TITLE: &str = "Whittle";
pub const WINDOW_WIDTH: f32 = 1280.0;
pub const WINDOW_HEIGHT: f32 = 800.0;

// Tools //////////////////////////////////////////////////////////////////////

/// The tool activated at startup when none is named on the command line
pub const DEFAULT_TOOL_ID: &str = "line";

/// Holding this button temporarily activates the orbit tool; releasing it
/// restores whatever tool was active before
pub const ORBIT_OVERRIDE_BUTTON: MouseButton = MouseButton::Middle;

// Gestures ///////////////////////////////////////////////////////////////////

/// How far the pointer must travel (in window pixels) with a button held
/// before the movement counts as a drag rather than a click
pub const DRAG_THRESHOLD: f32 = 4.0;
