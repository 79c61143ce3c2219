//! Push-pull tool for extruding faces
//!
//! Dragging vertically extrudes the face under the press point. The
//! vertical component of each move accumulates into an offset the engine
//! applies as a preview; the release commits it.

use bevy::prelude::*;
use serde_json::json;

use crate::core::io::DragEvent;
use crate::engine::{set_or_log, EngineBridge};

use super::{DragGestures, Tool, ToolId, ToolInfo, ToolManager, ToolRegistrationSet};

pub const TOOL_ID: ToolId = "pushpull";

/// The push-pull tool implementation
#[derive(Default)]
pub struct PushPullTool {
    /// Accumulated extrusion offset for the live drag, in window pixels.
    /// Positive pulls toward the viewer (pointer moving up).
    offset: f32,
    dragging: bool,
}

impl Tool for PushPullTool {
    fn id(&self) -> ToolId {
        TOOL_ID
    }

    fn info(&self) -> ToolInfo {
        ToolInfo {
            display_name: "Push/Pull",
            icon: "P",
            tooltip: "Extrude faces",
            shortcut: Some(KeyCode::KeyP),
            order: 20,
        }
    }

    fn on_activate(&mut self) {
        self.offset = 0.0;
        self.dragging = false;
        info!("push-pull tool activated");
    }

    fn on_deactivate(&mut self) {
        self.offset = 0.0;
        self.dragging = false;
        info!("push-pull tool deactivated");
    }

    fn drag_handler(&mut self) -> Option<&mut dyn DragGestures> {
        Some(self)
    }
}

impl DragGestures for PushPullTool {
    fn on_drag_start(&mut self, engine: &mut dyn EngineBridge, drag: &DragEvent) {
        self.offset = 0.0;
        self.dragging = true;
        set_or_log(
            engine,
            "pushpull.begin",
            json!([drag.start.x, drag.start.y]),
        );
    }

    fn on_drag(&mut self, engine: &mut dyn EngineBridge, drag: &DragEvent) {
        if !self.dragging {
            return;
        }
        // Window y grows downward; moving the pointer up pulls outward
        self.offset -= drag.delta.y;
        set_or_log(engine, "pushpull.offset", json!(self.offset));
    }

    fn on_drag_end(&mut self, engine: &mut dyn EngineBridge, _drag: &DragEvent) {
        if !self.dragging {
            return;
        }
        set_or_log(engine, "pushpull.commit", json!(self.offset));
        self.offset = 0.0;
        self.dragging = false;
    }
}

/// Plugin for the push-pull tool
pub struct PushPullToolPlugin;

impl Plugin for PushPullToolPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, register_pushpull_tool.in_set(ToolRegistrationSet));
    }
}

fn register_pushpull_tool(mut manager: ResMut<ToolManager>) {
    if let Err(err) = manager.register(Box::<PushPullTool>::default()) {
        error!("failed to register push-pull tool: {err}");
    }
}

#[cfg(test)]
mod tests {
    use bevy::input::mouse::MouseButton;
    use serde_json::json;

    use super::*;
    use crate::core::io::{DragPhase, Modifiers};
    use crate::engine::NullEngine;

    fn drag(phase: DragPhase, delta: Vec2) -> DragEvent {
        DragEvent {
            phase,
            button: MouseButton::Left,
            start: Vec2::ZERO,
            position: Vec2::ZERO,
            delta,
            modifiers: Modifiers::default(),
        }
    }

    #[test]
    fn vertical_motion_accumulates_into_the_offset() {
        let mut engine = NullEngine::default();
        let mut tool = PushPullTool::default();

        tool.on_drag_start(&mut engine, &drag(DragPhase::Start, Vec2::ZERO));
        tool.on_drag(&mut engine, &drag(DragPhase::Move, Vec2::new(0.0, -10.0)));
        tool.on_drag(&mut engine, &drag(DragPhase::Move, Vec2::new(3.0, -5.0)));
        assert_eq!(
            engine.value_for_key("pushpull.offset").unwrap(),
            json!(15.0),
            "upward movement pulls outward; horizontal movement is ignored"
        );

        tool.on_drag_end(&mut engine, &drag(DragPhase::End, Vec2::ZERO));
        assert_eq!(engine.value_for_key("pushpull.commit").unwrap(), json!(15.0));
        assert_eq!(tool.offset, 0.0, "commit resets the offset");
    }

    #[test]
    fn moves_without_a_start_are_ignored() {
        let mut engine = NullEngine::default();
        let mut tool = PushPullTool::default();
        tool.on_drag(&mut engine, &drag(DragPhase::Move, Vec2::new(0.0, -10.0)));
        assert_eq!(
            engine.value_for_key("pushpull.offset").unwrap(),
            serde_json::Value::Null
        );
    }
}
