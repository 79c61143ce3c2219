//! Editing tools
//!
//! A tool is a user-selectable editing mode: it has an identity, an
//! activate/deactivate lifecycle, and optionally handles drag gestures.
//! Tools register themselves with the [`ToolManager`] at startup and are
//! activated through it (toolbar clicks, keyboard shortcuts, or the
//! temporary override) so exactly one tool is ever active.
//!
//! Adding a tool means implementing [`Tool`] in a new file and adding a
//! plugin that registers it; the toolbar and shortcut map pick it up
//! from the manager, no other code changes.

pub mod gestures;
pub mod line;
pub mod manager;
pub mod orbit;
pub mod overrides;
pub mod pushpull;
pub mod shortcuts;

pub use gestures::GestureRouterPlugin;
pub use line::LineToolPlugin;
pub use manager::{ToolManager, ToolManagerPlugin};
pub use orbit::OrbitToolPlugin;
pub use overrides::OrbitOverridePlugin;
pub use pushpull::PushPullToolPlugin;
pub use shortcuts::{ShortcutMap, ShortcutPlugin};

use bevy::prelude::*;

use crate::core::cli::CliArgs;
use crate::core::io::DragEvent;
use crate::engine::EngineBridge;

/// Unique identifier for a tool
pub type ToolId = &'static str;

/// Static description of a tool, used by the toolbar and shortcut map
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Display name shown in tooltips
    pub display_name: &'static str,
    /// Icon shown on the toolbar button
    pub icon: &'static str,
    /// Tooltip text
    pub tooltip: &'static str,
    /// Optional keyboard shortcut
    pub shortcut: Option<KeyCode>,
    /// Toolbar position (lower numbers appear first)
    pub order: i32,
}

/// Drag gesture handling, an optional tool capability.
///
/// Handlers receive the engine bridge so a gesture can act on the model
/// directly, and the unmodified notification from the gesture router.
pub trait DragGestures {
    fn on_drag_start(&mut self, engine: &mut dyn EngineBridge, drag: &DragEvent);
    fn on_drag(&mut self, engine: &mut dyn EngineBridge, drag: &DragEvent);
    fn on_drag_end(&mut self, engine: &mut dyn EngineBridge, drag: &DragEvent);
}

/// Interface every editing tool implements.
pub trait Tool: Send + Sync + 'static {
    /// Unique identifier for this tool
    fn id(&self) -> ToolId;

    /// Static metadata for UI and shortcuts
    fn info(&self) -> ToolInfo;

    /// Called when this tool becomes the active tool
    fn on_activate(&mut self) {}

    /// Called when this tool stops being the active tool
    fn on_deactivate(&mut self) {}

    /// Drag gesture capability. Tools that do not handle drags leave
    /// the default `None` and the gesture router skips them.
    fn drag_handler(&mut self) -> Option<&mut dyn DragGestures> {
        None
    }
}

/// Startup set for systems that register tools; anything that reads the
/// registered set (toolbar spawn, shortcut map, initial activation)
/// schedules itself after this.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToolRegistrationSet;

/// Umbrella plugin: the manager, every tool, and the systems that
/// connect them to input.
pub struct ToolsPlugin;

impl Plugin for ToolsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            ToolManagerPlugin,
            LineToolPlugin,
            PushPullToolPlugin,
            OrbitToolPlugin,
            ShortcutPlugin,
            GestureRouterPlugin,
            OrbitOverridePlugin,
        ))
        .add_systems(Startup, activate_initial_tool.after(ToolRegistrationSet));
    }
}

/// Activate the tool named on the command line once every tool has had
/// the chance to register.
fn activate_initial_tool(mut manager: ResMut<ToolManager>, args: Res<CliArgs>) {
    match manager.activate_by_id(&args.initial_tool) {
        Ok(()) => info!("initial tool: {}", args.initial_tool),
        Err(err) => error!("cannot activate initial tool: {err}"),
    }
}
