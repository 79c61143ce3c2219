//! Line tool for drawing edges
//!
//! A drag sketches an edge: the press anchors the start point, each move
//! previews the rubber-banded endpoint, and the release commits the edge
//! to the engine.

use bevy::prelude::*;
use serde_json::json;

use crate::engine::{set_or_log, EngineBridge};
use crate::core::io::DragEvent;

use super::{DragGestures, Tool, ToolId, ToolInfo, ToolManager, ToolRegistrationSet};

pub const TOOL_ID: ToolId = "line";

/// The line tool implementation
#[derive(Default)]
pub struct LineTool {
    /// Start point of the edge being sketched, while a drag is live
    anchor: Option<Vec2>,
}

impl Tool for LineTool {
    fn id(&self) -> ToolId {
        TOOL_ID
    }

    fn info(&self) -> ToolInfo {
        ToolInfo {
            display_name: "Line",
            icon: "L",
            tooltip: "Draw edges",
            shortcut: Some(KeyCode::KeyL),
            order: 10,
        }
    }

    fn on_activate(&mut self) {
        self.anchor = None;
        info!("line tool activated");
    }

    fn on_deactivate(&mut self) {
        // An uncommitted edge dies with the mode switch
        self.anchor = None;
        info!("line tool deactivated");
    }

    fn drag_handler(&mut self) -> Option<&mut dyn DragGestures> {
        Some(self)
    }
}

impl DragGestures for LineTool {
    fn on_drag_start(&mut self, engine: &mut dyn EngineBridge, drag: &DragEvent) {
        self.anchor = Some(drag.start);
        set_or_log(engine, "line.begin", json!([drag.start.x, drag.start.y]));
    }

    fn on_drag(&mut self, engine: &mut dyn EngineBridge, drag: &DragEvent) {
        if self.anchor.is_none() {
            return;
        }
        set_or_log(
            engine,
            "line.preview",
            json!([drag.position.x, drag.position.y]),
        );
    }

    fn on_drag_end(&mut self, engine: &mut dyn EngineBridge, drag: &DragEvent) {
        let Some(anchor) = self.anchor.take() else {
            return;
        };
        set_or_log(
            engine,
            "line.commit",
            json!({
                "from": [anchor.x, anchor.y],
                "to": [drag.position.x, drag.position.y],
            }),
        );
    }
}

/// Plugin for the line tool
pub struct LineToolPlugin;

impl Plugin for LineToolPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, register_line_tool.in_set(ToolRegistrationSet));
    }
}

fn register_line_tool(mut manager: ResMut<ToolManager>) {
    if let Err(err) = manager.register(Box::<LineTool>::default()) {
        error!("failed to register line tool: {err}");
    }
}
