//! Toolbar UI
//!
//! One button per registered tool, radio-style: exactly one button is
//! selected, and it is always the button of the active tool. Clicking a
//! button raises an [`ActionEvent`]; the button does not flip its own
//! state. Selection follows the manager's announcements instead, so a
//! tool activated by shortcut or override lights up the same way as one
//! activated by click.

use bevy::prelude::*;
use smol_str::SmolStr;

use crate::events::{ActionEvent, ActionSource};
use crate::tools::manager::{apply_action_events, flush_manager_events};
use crate::tools::{ToolId, ToolManager, ToolRegistrationSet};
use crate::ui::theme::*;

/// Marker for toolbar buttons
#[derive(Component)]
pub struct ToolbarButton;

/// Associates a button with the tool it activates
#[derive(Component)]
pub struct ToolButton {
    pub tool_id: ToolId,
}

/// The tool id whose button is currently selected, mirroring the
/// manager's active tool
#[derive(Resource, Default)]
pub struct SelectedTool(pub Option<SmolStr>);

pub struct ToolbarPlugin;

impl Plugin for ToolbarPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectedTool>()
            .add_systems(Startup, spawn_toolbar.after(ToolRegistrationSet))
            .add_systems(
                Update,
                (
                    handle_toolbar_buttons.before(apply_action_events),
                    sync_toolbar_selection.after(flush_manager_events),
                    update_button_visuals.after(sync_toolbar_selection),
                ),
            );
    }
}

/// Spawn one button per registered tool, in declared order.
fn spawn_toolbar(mut commands: Commands, manager: Res<ToolManager>) {
    let ordered = manager.ordered_tool_ids();
    info!("spawning toolbar with {} tools: {:?}", ordered.len(), ordered);

    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(TOOLBAR_MARGIN),
            left: Val::Px(TOOLBAR_MARGIN),
            flex_direction: FlexDirection::Row,
            padding: UiRect::all(Val::Px(TOOLBAR_PADDING)),
            column_gap: Val::Px(TOOLBAR_ITEM_SPACING),
            ..default()
        })
        .with_children(|parent| {
            for tool_id in ordered {
                let Some(info) = manager.tool_info(tool_id) else {
                    continue;
                };
                parent
                    .spawn((
                        Button,
                        ToolbarButton,
                        ToolButton { tool_id },
                        Node {
                            width: Val::Px(TOOLBAR_BUTTON_SIZE),
                            height: Val::Px(TOOLBAR_BUTTON_SIZE),
                            border: UiRect::all(Val::Px(TOOLBAR_BORDER_WIDTH)),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            ..default()
                        },
                        BorderColor(TOOLBAR_BORDER_COLOR),
                        BorderRadius::all(Val::Px(TOOLBAR_BORDER_RADIUS)),
                        BackgroundColor(TOOLBAR_BACKGROUND_COLOR),
                    ))
                    .with_children(|button| {
                        button.spawn((
                            Text::new(info.icon),
                            TextFont {
                                font_size: TOOLBAR_ICON_SIZE,
                                ..default()
                            },
                            TextColor(TOOLBAR_ICON_COLOR),
                        ));
                    });
            }
        });
}

/// Raise an action for each click on a button that is not already
/// selected. Redundant clicks on the active tool's button are dropped
/// here so they never re-trigger the tool's lifecycle.
fn handle_toolbar_buttons(
    interactions: Query<
        (&Interaction, &ToolButton),
        (Changed<Interaction>, With<ToolbarButton>),
    >,
    selected: Res<SelectedTool>,
    mut actions: EventWriter<ActionEvent>,
) {
    for (interaction, button) in &interactions {
        if *interaction != Interaction::Pressed {
            continue;
        }
        if selected.0.as_deref() == Some(button.tool_id) {
            continue;
        }
        info!("toolbar click: {}", button.tool_id);
        actions.write(ActionEvent::new(ActionSource::Toolbar, button.tool_id));
    }
}

/// Follow the manager's announcements: whenever it reports an activation
/// or deactivation, mirror whichever tool is active now.
fn sync_toolbar_selection(
    mut actions: EventReader<ActionEvent>,
    manager: Res<ToolManager>,
    mut selected: ResMut<SelectedTool>,
) {
    for event in actions.read() {
        if event.source != ActionSource::ToolManager {
            continue;
        }
        selected.0 = manager.active_tool_id().map(SmolStr::new);
    }
}

/// Update button appearances from interaction state and selection.
fn update_button_visuals(
    selected: Res<SelectedTool>,
    mut buttons: Query<
        (
            &Interaction,
            &mut BackgroundColor,
            &mut BorderColor,
            &ToolButton,
            Entity,
        ),
        With<ToolbarButton>,
    >,
    mut icons: Query<(&ChildOf, &mut TextColor)>,
) {
    for (interaction, mut color, mut border_color, button, entity) in &mut buttons {
        let is_selected = selected.0.as_deref() == Some(button.tool_id);

        match (*interaction, is_selected) {
            (Interaction::Pressed, _) | (_, true) => {
                *color = PRESSED_BUTTON.into();
                border_color.0 = PRESSED_BUTTON_OUTLINE_COLOR;
            }
            (Interaction::Hovered, false) => {
                *color = HOVERED_BUTTON.into();
                border_color.0 = HOVERED_BUTTON_OUTLINE_COLOR;
            }
            (Interaction::None, false) => {
                *color = NORMAL_BUTTON.into();
                border_color.0 = NORMAL_BUTTON_OUTLINE_COLOR;
            }
        }

        for (child_of, mut text_color) in &mut icons {
            if child_of.parent() == entity {
                text_color.0 = if is_selected {
                    PRESSED_BUTTON_ICON_COLOR
                } else {
                    TOOLBAR_ICON_COLOR
                };
            }
        }
    }
}
