//! Drag gesture detection
//!
//! Turns raw mouse button and pointer state into a stream of
//! [`DragEvent`]s: one `Start` when the pointer travels past the drag
//! threshold with a button held, a `Move` for every position change
//! while the drag is live, and one `End` on release. A press-and-release
//! that never crosses the threshold produces nothing here; it is a
//! click, not a gesture.
//!
//! The state machine itself lives in [`DragTracker`] and has no Bevy
//! dependencies beyond the math types, so the threshold and sequencing
//! rules are tested directly.

use bevy::input::mouse::MouseButton;
use bevy::prelude::*;

use crate::core::settings::DRAG_THRESHOLD;

/// Plugin wiring drag detection into the frame loop. Events are emitted
/// in `PreUpdate` so every `Update` consumer sees the same frame's
/// gestures.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DragState>()
            .add_event::<DragEvent>()
            .add_systems(
                PreUpdate,
                generate_drag_events.after(super::pointer::update_pointer_position),
            );
    }
}

/// Modifier key state captured alongside each gesture notification
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub super_key: bool,
}

impl Modifiers {
    pub fn from_input(keyboard: &ButtonInput<KeyCode>) -> Self {
        Self {
            shift: keyboard.pressed(KeyCode::ShiftLeft)
                || keyboard.pressed(KeyCode::ShiftRight),
            ctrl: keyboard.pressed(KeyCode::ControlLeft)
                || keyboard.pressed(KeyCode::ControlRight),
            alt: keyboard.pressed(KeyCode::AltLeft)
                || keyboard.pressed(KeyCode::AltRight),
            super_key: keyboard.pressed(KeyCode::SuperLeft)
                || keyboard.pressed(KeyCode::SuperRight),
        }
    }
}

/// Phase of a drag gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Start,
    Move,
    End,
}

/// One notification in a drag sequence. Positions are window
/// coordinates exactly as the pointer reported them; `delta` is the
/// movement since the previous notification in the same sequence.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct DragEvent {
    pub phase: DragPhase,
    pub button: MouseButton,
    /// Where the button first went down
    pub start: Vec2,
    pub position: Vec2,
    pub delta: Vec2,
    pub modifiers: Modifiers,
}

#[derive(Debug, Clone, Copy)]
enum TrackerState {
    Idle,
    /// Button down, threshold not yet crossed
    Pending { button: MouseButton, start: Vec2 },
    Dragging {
        button: MouseButton,
        start: Vec2,
        last: Vec2,
    },
}

/// Press/threshold/move/release state machine. One drag at a time; the
/// first button down claims the gesture and other buttons are ignored
/// until it resolves.
#[derive(Debug)]
pub struct DragTracker {
    threshold: f32,
    state: TrackerState,
}

impl DragTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            state: TrackerState::Idle,
        }
    }

    /// Record a button press at `position`. Ignored while a gesture is
    /// already pending or live.
    pub fn press(&mut self, button: MouseButton, position: Vec2) {
        if let TrackerState::Idle = self.state {
            self.state = TrackerState::Pending {
                button,
                start: position,
            };
        }
    }

    /// Feed the current pointer position, producing any drag events the
    /// movement implies.
    pub fn motion(&mut self, position: Vec2, modifiers: Modifiers) -> Vec<DragEvent> {
        match self.state {
            TrackerState::Idle => Vec::new(),
            TrackerState::Pending { button, start } => {
                if start.distance(position) < self.threshold {
                    return Vec::new();
                }
                self.state = TrackerState::Dragging {
                    button,
                    start,
                    last: position,
                };
                vec![
                    DragEvent {
                        phase: DragPhase::Start,
                        button,
                        start,
                        position: start,
                        delta: Vec2::ZERO,
                        modifiers,
                    },
                    DragEvent {
                        phase: DragPhase::Move,
                        button,
                        start,
                        position,
                        delta: position - start,
                        modifiers,
                    },
                ]
            }
            TrackerState::Dragging { button, start, last } => {
                if position == last {
                    return Vec::new();
                }
                self.state = TrackerState::Dragging {
                    button,
                    start,
                    last: position,
                };
                vec![DragEvent {
                    phase: DragPhase::Move,
                    button,
                    start,
                    position,
                    delta: position - last,
                    modifiers,
                }]
            }
        }
    }

    /// Record a button release. Ends the live drag if `button` owns it,
    /// cancels a pending one, and ignores unrelated buttons.
    pub fn release(
        &mut self,
        button: MouseButton,
        position: Vec2,
        modifiers: Modifiers,
    ) -> Option<DragEvent> {
        match self.state {
            TrackerState::Pending { button: owner, .. } if owner == button => {
                self.state = TrackerState::Idle;
                None
            }
            TrackerState::Dragging {
                button: owner,
                start,
                last,
            } if owner == button => {
                self.state = TrackerState::Idle;
                Some(DragEvent {
                    phase: DragPhase::End,
                    button,
                    start,
                    position,
                    delta: position - last,
                    modifiers,
                })
            }
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, TrackerState::Dragging { .. })
    }
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new(DRAG_THRESHOLD)
    }
}

/// Resource holding the frame-to-frame tracker state
#[derive(Resource, Default)]
pub struct DragState {
    pub tracker: DragTracker,
}

/// System generating DragEvents from mouse button state and the pointer
/// position
fn generate_drag_events(
    mouse_button_input: Res<ButtonInput<MouseButton>>,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    pointer_info: Res<super::pointer::PointerInfo>,
    mut drag_state: ResMut<DragState>,
    mut drag_events: EventWriter<DragEvent>,
) {
    let modifiers = Modifiers::from_input(&keyboard_input);
    let position = pointer_info.screen;

    for button in mouse_button_input.get_just_pressed() {
        drag_state.tracker.press(*button, position);
    }

    for event in drag_state.tracker.motion(position, modifiers) {
        debug!("drag {:?} at {:?}", event.phase, event.position);
        drag_events.write(event);
    }

    for button in mouse_button_input.get_just_released() {
        if let Some(event) = drag_state.tracker.release(*button, position, modifiers)
        {
            debug!("drag ended at {:?}", event.position);
            drag_events.write(event);
        }
    }
}
