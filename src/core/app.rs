//! Application initialization and configuration

use bevy::prelude::*;
use bevy::winit::WinitSettings;

use crate::core::cli::CliArgs;
use crate::core::errors::Result;
use crate::core::io::{InputPlugin, PointerPlugin};
use crate::core::settings::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use crate::engine::EnginePlugin;
use crate::tools::ToolsPlugin;
use crate::ui::theme::BACKGROUND_COLOR;
use crate::ui::ToolbarPlugin;

/// Creates a fully configured Bevy application ready to run
pub fn create_app(cli_args: CliArgs) -> Result<App> {
    cli_args.validate()?;

    let mut app = App::new();
    configure_app_settings(&mut app, cli_args);
    add_all_plugins(&mut app);
    Ok(app)
}

/// Sets up application resources and window configuration
fn configure_app_settings(app: &mut App, cli_args: CliArgs) {
    app.insert_resource(WinitSettings::desktop_app())
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(cli_args);
}

/// Adds all plugins to the application in logical groups
fn add_all_plugins(app: &mut App) {
    let window_plugin = WindowPlugin {
        primary_window: Some(Window {
            title: WINDOW_TITLE.into(),
            resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
            ..default()
        }),
        ..default()
    };

    // Bevy's own LogPlugin is disabled because the custom logger has
    // already installed the global tracing subscriber.
    app.add_plugins(
        DefaultPlugins
            .set(window_plugin)
            .disable::<bevy::log::LogPlugin>(),
    )
        .add_plugins((PointerPlugin, InputPlugin, EnginePlugin))
        .add_plugins((ToolsPlugin, ToolbarPlugin))
        .add_systems(Update, exit_on_esc);
}

/// Close the app when escape is pressed
fn exit_on_esc(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut exit: EventWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
