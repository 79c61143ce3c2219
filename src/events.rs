//! Application events
//!
//! Generic notifications carrying an identifier, used both to announce
//! tool activation and to relay UI-triggered selections. Each event is an
//! immutable message; the Rust type is the type tag, and the `source`
//! field records which component raised it so consumers can tell a
//! toolbar click apart from the manager's own announcement of it.

use bevy::prelude::*;
use smol_str::SmolStr;

/// Which component raised an [`ActionEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionSource {
    /// The tool manager, announcing an activation or deactivation.
    ToolManager,
    /// A toolbar button click.
    Toolbar,
    /// A recognized keyboard shortcut.
    Shortcut,
}

/// A general UI action notification carrying the identifier of the tool
/// (or shortcut) it concerns.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct ActionEvent {
    pub source: ActionSource,
    pub id: SmolStr,
}

impl ActionEvent {
    pub fn new(source: ActionSource, id: impl Into<SmolStr>) -> Self {
        Self {
            source,
            id: id.into(),
        }
    }
}

/// Lifecycle phase recorded by a [`ToolEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolEventKind {
    Activated,
    Deactivated,
}

/// Fired by the tool manager for every activate/deactivate hook it runs,
/// so observers can follow tool lifecycles without knowing the manager's
/// internals.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct ToolEvent {
    pub id: SmolStr,
    pub kind: ToolEventKind,
}

impl ToolEvent {
    pub fn activated(id: impl Into<SmolStr>) -> Self {
        Self {
            id: id.into(),
            kind: ToolEventKind::Activated,
        }
    }

    pub fn deactivated(id: impl Into<SmolStr>) -> Self {
        Self {
            id: id.into(),
            kind: ToolEventKind::Deactivated,
        }
    }
}
