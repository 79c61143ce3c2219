// A 3D modeling app front-end made with the Bevy game engine.

pub mod core;
pub mod engine;
pub mod events;
pub mod logger;
pub mod tools;
pub mod ui;

pub use crate::core::app::create_app;
pub use crate::core::cli::CliArgs;
