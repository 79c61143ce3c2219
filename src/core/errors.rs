//! Error handling
//!
//! Tool management has a small closed set of failure kinds, so those get
//! a typed enum; everything else in the application (startup, the engine
//! bridge) uses anyhow with context.

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, ensure, Context, Error, Result};

use smol_str::SmolStr;

/// Failures raised by the tool manager. All of these are programmer
/// errors rather than transient conditions, and none of them leave the
/// manager in a partially mutated state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolError {
    #[error("tool id must not be empty")]
    InvalidArgument,

    #[error("no tool registered with id '{0}'")]
    UnknownTool(SmolStr),

    #[error("tool '{0}' is currently activated and cannot be replaced")]
    ToolInUse(SmolStr),
}
