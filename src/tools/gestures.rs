//! Drag gesture routing
//!
//! Forwards each drag notification to the currently active tool, if that
//! tool declares the drag capability. No tool active, or a tool without
//! a handler, means the gesture is silently dropped. That is the normal
//! case for tools like a plain selection mode, not an error.

use bevy::prelude::*;

use crate::core::io::{DragEvent, DragPhase};
use crate::engine::EngineHandle;

use super::ToolManager;

pub struct GestureRouterPlugin;

impl Plugin for GestureRouterPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, route_drag_events);
    }
}

/// Deliver this frame's drag notifications to the active tool's handler.
/// The event is passed through unmodified; the engine bridge rides along
/// so handlers can act on the model.
fn route_drag_events(
    mut drag_events: EventReader<DragEvent>,
    mut manager: ResMut<ToolManager>,
    mut engine: ResMut<EngineHandle>,
) {
    for event in drag_events.read() {
        let Some(tool) = manager.active_tool_mut() else {
            continue;
        };
        let Some(handler) = tool.drag_handler() else {
            continue;
        };
        match event.phase {
            DragPhase::Start => handler.on_drag_start(engine.bridge_mut(), event),
            DragPhase::Move => handler.on_drag(engine.bridge_mut(), event),
            DragPhase::End => handler.on_drag_end(engine.bridge_mut(), event),
        }
    }
}

#[cfg(test)]
mod tests {
    use bevy::input::mouse::MouseButton;

    use super::*;
    use crate::core::io::Modifiers;
    use crate::engine::EngineBridge;
    use crate::tools::{DragGestures, Tool, ToolId, ToolInfo};

    fn drag(phase: DragPhase) -> DragEvent {
        DragEvent {
            phase,
            button: MouseButton::Left,
            start: Vec2::ZERO,
            position: Vec2::new(5.0, 5.0),
            delta: Vec2::new(5.0, 5.0),
            modifiers: Modifiers::default(),
        }
    }

    struct NoDragTool;
    impl Tool for NoDragTool {
        fn id(&self) -> ToolId {
            "inspect"
        }
        fn info(&self) -> ToolInfo {
            ToolInfo {
                display_name: "Inspect",
                icon: "?",
                tooltip: "",
                shortcut: None,
                order: 1,
            }
        }
    }

    #[derive(Default)]
    struct RecordingTool {
        phases: std::sync::Arc<std::sync::Mutex<Vec<DragPhase>>>,
    }
    impl Tool for RecordingTool {
        fn id(&self) -> ToolId {
            "record"
        }
        fn info(&self) -> ToolInfo {
            ToolInfo {
                display_name: "Record",
                icon: "?",
                tooltip: "",
                shortcut: None,
                order: 1,
            }
        }
        fn drag_handler(&mut self) -> Option<&mut dyn DragGestures> {
            Some(self)
        }
    }
    impl DragGestures for RecordingTool {
        fn on_drag_start(&mut self, _: &mut dyn EngineBridge, drag: &DragEvent) {
            self.phases.lock().unwrap().push(drag.phase);
        }
        fn on_drag(&mut self, _: &mut dyn EngineBridge, drag: &DragEvent) {
            self.phases.lock().unwrap().push(drag.phase);
        }
        fn on_drag_end(&mut self, _: &mut dyn EngineBridge, drag: &DragEvent) {
            self.phases.lock().unwrap().push(drag.phase);
        }
    }

    #[test]
    fn tools_without_the_capability_are_skipped() {
        let mut manager = ToolManager::default();
        manager.register(Box::new(NoDragTool)).unwrap();
        manager.activate_by_id("inspect").unwrap();
        let tool = manager.active_tool_mut().unwrap();
        assert!(tool.drag_handler().is_none());
    }

    #[test]
    fn capable_tools_receive_each_phase_in_order() {
        let recorder = RecordingTool::default();
        let phases = std::sync::Arc::clone(&recorder.phases);

        let mut engine = EngineHandle::default();
        let mut manager = ToolManager::default();
        manager.register(Box::new(recorder)).unwrap();
        manager.activate_by_id("record").unwrap();

        for phase in [DragPhase::Start, DragPhase::Move, DragPhase::End] {
            let event = drag(phase);
            let tool = manager.active_tool_mut().unwrap();
            let handler = tool.drag_handler().unwrap();
            match event.phase {
                DragPhase::Start => handler.on_drag_start(engine.bridge_mut(), &event),
                DragPhase::Move => handler.on_drag(engine.bridge_mut(), &event),
                DragPhase::End => handler.on_drag_end(engine.bridge_mut(), &event),
            }
        }

        assert_eq!(
            *phases.lock().unwrap(),
            vec![DragPhase::Start, DragPhase::Move, DragPhase::End]
        );
    }
}
