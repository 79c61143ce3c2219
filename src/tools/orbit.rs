//! Orbit tool for rotating the camera around the model
//!
//! Usually activated temporarily by holding the middle mouse button (see
//! the override plugin) and restored away from on release, but it can
//! also be picked from the toolbar like any other tool. Each move hands
//! its delta to the engine's camera.

use bevy::prelude::*;
use serde_json::json;

use crate::core::io::DragEvent;
use crate::engine::{set_or_log, EngineBridge};

use super::{DragGestures, Tool, ToolId, ToolInfo, ToolManager, ToolRegistrationSet};

pub const TOOL_ID: ToolId = "orbit";

/// The orbit tool implementation
#[derive(Default)]
pub struct OrbitTool;

impl Tool for OrbitTool {
    fn id(&self) -> ToolId {
        TOOL_ID
    }

    fn info(&self) -> ToolInfo {
        ToolInfo {
            display_name: "Orbit",
            icon: "O",
            tooltip: "Rotate the view",
            shortcut: Some(KeyCode::KeyO),
            order: 30,
        }
    }

    fn on_activate(&mut self) {
        info!("orbit tool activated");
    }

    fn on_deactivate(&mut self) {
        info!("orbit tool deactivated");
    }

    fn drag_handler(&mut self) -> Option<&mut dyn DragGestures> {
        Some(self)
    }
}

impl DragGestures for OrbitTool {
    fn on_drag_start(&mut self, engine: &mut dyn EngineBridge, drag: &DragEvent) {
        set_or_log(
            engine,
            "camera.orbit_begin",
            json!([drag.start.x, drag.start.y]),
        );
    }

    fn on_drag(&mut self, engine: &mut dyn EngineBridge, drag: &DragEvent) {
        set_or_log(engine, "camera.orbit", json!([drag.delta.x, drag.delta.y]));
    }

    fn on_drag_end(&mut self, engine: &mut dyn EngineBridge, drag: &DragEvent) {
        set_or_log(
            engine,
            "camera.orbit_end",
            json!([drag.position.x, drag.position.y]),
        );
    }
}

/// Plugin for the orbit tool
pub struct OrbitToolPlugin;

impl Plugin for OrbitToolPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, register_orbit_tool.in_set(ToolRegistrationSet));
    }
}

fn register_orbit_tool(mut manager: ResMut<ToolManager>) {
    if let Err(err) = manager.register(Box::<OrbitTool>::default()) {
        error!("failed to register orbit tool: {err}");
    }
}
