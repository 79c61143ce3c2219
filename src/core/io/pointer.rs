//! Mouse and trackpad management

use bevy::prelude::*;

/// Single source of truth for the pointer (mouse/trackpad) position.
/// Positions are window coordinates; the engine module owns every other
/// coordinate space, so nothing here converts.
#[derive(Resource, Default)]
pub struct PointerInfo {
    /// Most recent position inside the window (pixels)
    pub screen: Vec2,
}

/// Plugin that centrally manages pointer position updates
pub struct PointerPlugin;

impl Plugin for PointerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerInfo>()
            .add_systems(PreUpdate, update_pointer_position);
    }
}

/// System that updates the pointer position once per frame. The last
/// in-window position is kept while the cursor is outside the window so
/// an in-flight drag keeps a usable endpoint.
pub fn update_pointer_position(
    mut pointer_info: ResMut<PointerInfo>,
    windows: Query<&Window>,
) {
    if let Ok(window) = windows.single() {
        if let Some(screen_pos) = window.cursor_position() {
            pointer_info.screen = screen_pos;
        }
    }
}
