//! Bridge to the external geometry engine
//!
//! The actual modeling kernel lives in a separate engine module; this
//! crate only ever talks to it through a key/value surface. Tools set
//! keys while the user works ("line.commit", "camera.orbit") and the
//! engine interprets them. Readiness is handled with callbacks
//! registered on the handle itself rather than a process-wide table, so
//! every interested party says up front what should happen once the
//! module has loaded.

use std::collections::HashMap;

use bevy::prelude::*;
use serde_json::Value;

use crate::core::errors::Result;

/// Key/value surface of the engine module.
pub trait EngineBridge: Send + Sync + 'static {
    /// Read the value stored under `key`.
    fn value_for_key(&self, key: &str) -> Result<Value>;

    /// Write `value` under `key`.
    fn set_value_for_key(&mut self, key: &str, value: Value) -> Result<()>;
}

/// In-memory bridge used until a real engine module is attached, and by
/// tests to observe what tools write.
#[derive(Default)]
pub struct NullEngine {
    values: HashMap<String, Value>,
}

impl EngineBridge for NullEngine {
    fn value_for_key(&self, key: &str) -> Result<Value> {
        Ok(self.values.get(key).cloned().unwrap_or(Value::Null))
    }

    fn set_value_for_key(&mut self, key: &str, value: Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

type ReadyCallback = Box<dyn FnOnce(&mut dyn EngineBridge) + Send + Sync>;

/// Resource owning the engine bridge for the application.
///
/// The engine module loads asynchronously in a real deployment; until
/// `mark_ready` is called, `when_ready` callbacks are queued. After it,
/// they run immediately.
#[derive(Resource)]
pub struct EngineHandle {
    bridge: Box<dyn EngineBridge>,
    ready: bool,
    on_ready: Vec<ReadyCallback>,
}

impl EngineHandle {
    pub fn new(bridge: Box<dyn EngineBridge>) -> Self {
        Self {
            bridge,
            ready: false,
            on_ready: Vec::new(),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Register work to run once the engine module has loaded.
    pub fn when_ready(
        &mut self,
        callback: impl FnOnce(&mut dyn EngineBridge) + Send + Sync + 'static,
    ) {
        if self.ready {
            callback(self.bridge.as_mut());
        } else {
            self.on_ready.push(Box::new(callback));
        }
    }

    /// Called by the embedding layer once the module reports loaded.
    /// Runs every queued callback in registration order.
    pub fn mark_ready(&mut self) {
        if self.ready {
            return;
        }
        self.ready = true;
        for callback in self.on_ready.drain(..) {
            callback(self.bridge.as_mut());
        }
    }

    pub fn bridge(&self) -> &dyn EngineBridge {
        self.bridge.as_ref()
    }

    pub fn bridge_mut(&mut self) -> &mut dyn EngineBridge {
        self.bridge.as_mut()
    }
}

impl Default for EngineHandle {
    fn default() -> Self {
        Self::new(Box::<NullEngine>::default())
    }
}

/// Write a key on the bridge, logging failures instead of propagating.
/// Gesture handlers run deep inside the frame loop with no caller to
/// surface an error to; a rejected write must not abort the gesture.
pub fn set_or_log(engine: &mut dyn EngineBridge, key: &str, value: Value) {
    if let Err(err) = engine.set_value_for_key(key, value) {
        warn!("engine rejected '{key}': {err}");
    }
}

/// Plugin that owns the engine handle and reports module readiness.
pub struct EnginePlugin;

impl Plugin for EnginePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EngineHandle>()
            .add_systems(Startup, connect_engine);
    }
}

/// The NullEngine is in-process, so it is ready as soon as the app
/// starts. A real embedding would call `mark_ready` from its module
/// load notification instead.
fn connect_engine(mut engine: ResMut<EngineHandle>) {
    engine.mark_ready();
    info!("engine bridge connected");
}
