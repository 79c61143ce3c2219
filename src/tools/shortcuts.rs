//! Keyboard shortcut handling
//!
//! Rewires recognized key presses into generic [`ActionEvent`]s. The
//! map is built once at startup from the shortcut each registered tool
//! declares, and the translation is stateless and 1:1: one key press,
//! one action carrying the bound tool's id. The adapter runs before the
//! manager applies actions in the same frame, so a shortcut lands as an
//! action rather than leaking to other keyboard consumers.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::events::{ActionEvent, ActionSource};

use super::manager::ToolManager;
use super::{ToolId, ToolRegistrationSet};

/// Key-to-tool bindings for the shortcut recognizer
#[derive(Resource, Default)]
pub struct ShortcutMap {
    bindings: HashMap<KeyCode, ToolId>,
}

impl ShortcutMap {
    /// Bind `key` to `id`. The most recent binding for a key wins.
    pub fn bind(&mut self, key: KeyCode, id: ToolId) {
        if let Some(previous) = self.bindings.insert(key, id) {
            warn!("rebinding {key:?} from '{previous}' to '{id}'");
        }
    }

    /// The tool id bound to `key`, if any.
    pub fn action_for(&self, key: KeyCode) -> Option<ToolId> {
        self.bindings.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

pub struct ShortcutPlugin;

impl Plugin for ShortcutPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ShortcutMap>()
            .add_systems(Startup, build_shortcut_map.after(ToolRegistrationSet))
            .add_systems(
                Update,
                dispatch_shortcut_actions
                    .before(super::manager::apply_action_events),
            );
    }
}

/// Collect the shortcut key of every registered tool.
fn build_shortcut_map(manager: Res<ToolManager>, mut map: ResMut<ShortcutMap>) {
    for (id, info) in manager.tools() {
        if let Some(key) = info.shortcut {
            map.bind(key, id);
        }
    }
    info!("{} tool shortcuts bound", map.len());
}

/// Translate bound key presses into actions.
fn dispatch_shortcut_actions(
    keyboard: Res<ButtonInput<KeyCode>>,
    map: Res<ShortcutMap>,
    mut actions: EventWriter<ActionEvent>,
) {
    for key in keyboard.get_just_pressed() {
        if let Some(id) = map.action_for(*key) {
            debug!("shortcut {key:?} -> action '{id}'");
            actions.write(ActionEvent::new(ActionSource::Shortcut, id));
        }
    }
}
