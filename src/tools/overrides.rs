//! Temporary tool override
//!
//! Holding the middle mouse button activates the orbit tool for the
//! duration of the hold; releasing it deactivates orbit and the manager
//! restores whatever was active before. The activation record already
//! remembers the previous tool, so there is no save/restore bookkeeping
//! here, only a flag noting that the hold is in progress, so a release
//! never pops a tool the override did not push.

use bevy::prelude::*;

use crate::core::settings::ORBIT_OVERRIDE_BUTTON;

use super::{orbit, ToolManager};

/// Tracks whether the override hold is in progress
#[derive(Resource, Default)]
pub struct OrbitOverrideState {
    held: bool,
}

pub struct OrbitOverridePlugin;

impl Plugin for OrbitOverridePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitOverrideState>()
            .add_systems(Update, handle_orbit_override);
    }
}

/// System handling press and release of the override button.
fn handle_orbit_override(
    mouse: Res<ButtonInput<MouseButton>>,
    mut state: ResMut<OrbitOverrideState>,
    mut manager: ResMut<ToolManager>,
) {
    if mouse.just_pressed(ORBIT_OVERRIDE_BUTTON) && !state.held {
        match manager.activate_by_id(orbit::TOOL_ID) {
            Ok(()) => {
                state.held = true;
                debug!("orbit override engaged");
            }
            Err(err) => warn!("orbit override unavailable: {err}"),
        }
    }

    if mouse.just_released(ORBIT_OVERRIDE_BUTTON) && state.held {
        manager.deactivate_top();
        state.held = false;
        debug!("orbit override released");
    }
}
