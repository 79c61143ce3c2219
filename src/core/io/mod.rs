//! Input and pointer handling

pub mod input;
pub mod pointer;

pub use input::{DragEvent, DragPhase, DragTracker, InputPlugin, Modifiers};
pub use pointer::{PointerInfo, PointerPlugin};
