//! Tool activation management
//!
//! The manager owns the registry of known tools and decides which one is
//! active. Activation nests: temporarily activating another tool (the
//! orbit override does this while a mouse button is held) remembers what
//! was active before, and deactivating restores it, to arbitrary depth.
//! That history is an implementation detail; consumers only see the
//! activate/deactivate vocabulary, so the representation can change
//! without touching callers.
//!
//! Every activation and deactivation queues an [`ActionEvent`] sourced
//! from the manager (consumed by the toolbar to keep its selection in
//! sync) and one [`ToolEvent`] per lifecycle hook. A chained system
//! flushes the queues into Bevy's event buffers each frame, after
//! incoming actions have been applied, so an event is never observable
//! before both hooks of its transition have run.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::core::errors::ToolError;
use crate::events::{ActionEvent, ActionSource, ToolEvent};

use super::{Tool, ToolId, ToolInfo};

/// Owns all registered tools and the record of nested activations.
#[derive(Resource, Default)]
pub struct ToolManager {
    registry: HashMap<ToolId, Box<dyn Tool>>,
    active: Vec<ToolId>,
    queued_actions: Vec<ActionEvent>,
    lifecycle: Vec<ToolEvent>,
}

impl ToolManager {
    /// Register a tool under its id.
    ///
    /// Replacing a registered-but-inactive tool is last-write-wins.
    /// Replacing a tool that is currently activated is refused: the
    /// activation record must always resolve against the registry.
    pub fn register(&mut self, tool: Box<dyn Tool>) -> Result<(), ToolError> {
        let id = tool.id();
        if self.active.contains(&id) {
            return Err(ToolError::ToolInUse(id.into()));
        }
        if self.registry.insert(id, tool).is_some() {
            info!("replacing registered tool: {id}");
        } else {
            info!("registering tool: {id}");
        }
        Ok(())
    }

    /// Remove a tool from the registry and from the activation record,
    /// wherever it appears, without invoking any lifecycle hook.
    /// Callers that need cleanup deactivate first. Returns the tool, or
    /// `None` if the id was unknown.
    pub fn unregister(&mut self, id: &str) -> Option<Box<dyn Tool>> {
        self.active.retain(|active_id| *active_id != id);
        self.registry.remove(id)
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.registry.contains_key(id)
    }

    /// Id of the currently active tool, or `None` when no tool is
    /// active.
    pub fn active_tool_id(&self) -> Option<ToolId> {
        self.active.last().copied()
    }

    /// The currently active tool.
    pub fn active_tool(&self) -> Option<&dyn Tool> {
        let id = self.active.last()?;
        self.registry.get(id).map(|tool| tool.as_ref())
    }

    /// Mutable access to the currently active tool, for the gesture
    /// router.
    pub fn active_tool_mut(&mut self) -> Option<&mut Box<dyn Tool>> {
        let id = *self.active.last()?;
        self.registry.get_mut(id)
    }

    /// Activate the tool registered under `id`.
    ///
    /// Validation happens before any state changes or hooks: an empty id
    /// or an unknown id fails without side effects. Otherwise the
    /// current tool (if any) is deactivated, the named tool becomes
    /// active and gets its activate hook, and one manager-sourced
    /// [`ActionEvent`] with the new tool's id is queued after both
    /// hooks have run.
    pub fn activate_by_id(&mut self, id: &str) -> Result<(), ToolError> {
        if id.is_empty() {
            return Err(ToolError::InvalidArgument);
        }
        let Some((&key, _)) = self.registry.get_key_value(id) else {
            return Err(ToolError::UnknownTool(id.into()));
        };

        if let Some(current) = self.active.last().copied() {
            if let Some(tool) = self.registry.get_mut(current) {
                tool.on_deactivate();
                self.lifecycle.push(ToolEvent::deactivated(current));
            }
        }

        self.active.push(key);
        if let Some(tool) = self.registry.get_mut(key) {
            tool.on_activate();
            self.lifecycle.push(ToolEvent::activated(key));
        }

        self.queued_actions
            .push(ActionEvent::new(ActionSource::ToolManager, key));
        Ok(())
    }

    /// Deactivate the currently active tool and restore the one that was
    /// active before it, if any.
    ///
    /// The restored tool gets its activate hook again (it was
    /// deactivated when it was superseded). Queues one manager-sourced
    /// [`ActionEvent`] carrying the id of the tool that was deactivated.
    /// A no-op returning `None` when no tool is active: no hooks, no
    /// events.
    pub fn deactivate_top(&mut self) -> Option<ToolId> {
        let popped = self.active.pop()?;
        if let Some(tool) = self.registry.get_mut(popped) {
            tool.on_deactivate();
            self.lifecycle.push(ToolEvent::deactivated(popped));
        }

        if let Some(restored) = self.active.last().copied() {
            if let Some(tool) = self.registry.get_mut(restored) {
                tool.on_activate();
                self.lifecycle.push(ToolEvent::activated(restored));
            }
        }

        self.queued_actions
            .push(ActionEvent::new(ActionSource::ToolManager, popped));
        Some(popped)
    }

    /// Dispatch an incoming action notification: activates the tool the
    /// action names, so toolbar buttons and shortcuts can drive
    /// activation without knowing anything beyond the id.
    pub fn handle_action(&mut self, event: &ActionEvent) -> Result<(), ToolError> {
        self.activate_by_id(&event.id)
    }

    /// Metadata of a registered tool.
    pub fn tool_info(&self, id: &str) -> Option<ToolInfo> {
        self.registry.get(id).map(|tool| tool.info())
    }

    /// Registered ids with their metadata, unordered.
    pub fn tools(&self) -> impl Iterator<Item = (ToolId, ToolInfo)> + '_ {
        self.registry.iter().map(|(id, tool)| (*id, tool.info()))
    }

    /// Registered ids sorted by declared order, then id for stability.
    pub fn ordered_tool_ids(&self) -> Vec<ToolId> {
        let mut ids: Vec<(ToolId, i32)> = self
            .registry
            .iter()
            .map(|(id, tool)| (*id, tool.info().order))
            .collect();
        ids.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        ids.into_iter().map(|(id, _)| id).collect()
    }

    /// Drain the queued action events.
    pub fn take_queued_actions(&mut self) -> Vec<ActionEvent> {
        std::mem::take(&mut self.queued_actions)
    }

    /// Drain the queued lifecycle events.
    pub fn take_lifecycle_events(&mut self) -> Vec<ToolEvent> {
        std::mem::take(&mut self.lifecycle)
    }
}

/// Plugin wiring the manager into the event loop.
pub struct ToolManagerPlugin;

impl Plugin for ToolManagerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ToolManager>()
            .add_event::<ActionEvent>()
            .add_event::<ToolEvent>()
            .add_systems(
                Update,
                (apply_action_events, flush_manager_events).chain(),
            );
    }
}

/// Apply toolbar/shortcut/override actions to the manager. Actions the
/// manager itself emitted are announcements, not requests, and are
/// skipped. A bad id is a programmer error upstream; it is logged and
/// the event dropped, with manager state untouched.
pub(crate) fn apply_action_events(
    mut actions: EventReader<ActionEvent>,
    mut manager: ResMut<ToolManager>,
) {
    for event in actions.read() {
        if event.source == ActionSource::ToolManager {
            continue;
        }
        if let Err(err) = manager.handle_action(event) {
            error!("dropping action '{}' from {:?}: {err}", event.id, event.source);
        }
    }
}

/// Forward events the manager queued this frame into the Bevy buffers.
pub(crate) fn flush_manager_events(
    mut manager: ResMut<ToolManager>,
    mut actions: EventWriter<ActionEvent>,
    mut lifecycle: EventWriter<ToolEvent>,
) {
    for event in manager.take_lifecycle_events() {
        lifecycle.write(event);
    }
    for event in manager.take_queued_actions() {
        actions.write(event);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::events::ToolEventKind;

    /// Records every hook invocation so tests can assert exact
    /// sequencing.
    struct ProbeTool {
        id: ToolId,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl ProbeTool {
        fn new(id: ToolId, log: Arc<Mutex<Vec<String>>>) -> Box<Self> {
            Box::new(Self { id, log })
        }
    }

    impl Tool for ProbeTool {
        fn id(&self) -> ToolId {
            self.id
        }

        fn info(&self) -> ToolInfo {
            ToolInfo {
                display_name: self.id,
                icon: "?",
                tooltip: "probe",
                shortcut: None,
                order: 100,
            }
        }

        fn on_activate(&mut self) {
            self.log.lock().unwrap().push(format!("{}:activate", self.id));
        }

        fn on_deactivate(&mut self) {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:deactivate", self.id));
        }
    }

    fn manager_with(ids: &[ToolId]) -> (ToolManager, Arc<Mutex<Vec<String>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut manager = ToolManager::default();
        for id in ids.iter().copied() {
            manager
                .register(ProbeTool::new(id, Arc::clone(&log)))
                .expect("registration succeeds");
        }
        (manager, log)
    }

    fn drain(log: &Arc<Mutex<Vec<String>>>) -> Vec<String> {
        std::mem::take(&mut *log.lock().unwrap())
    }

    #[test]
    fn first_activation_fires_no_deactivate() {
        let (mut manager, log) = manager_with(&["line"]);
        manager.activate_by_id("line").unwrap();
        assert_eq!(manager.active_tool_id(), Some("line"));
        assert_eq!(drain(&log), vec!["line:activate"]);
    }

    #[test]
    fn switching_fires_one_deactivate_then_one_activate() {
        let (mut manager, log) = manager_with(&["line", "pushpull"]);
        manager.activate_by_id("line").unwrap();
        drain(&log);

        manager.activate_by_id("pushpull").unwrap();
        assert_eq!(manager.active_tool_id(), Some("pushpull"));
        assert_eq!(drain(&log), vec!["line:deactivate", "pushpull:activate"]);
    }

    #[test]
    fn empty_id_is_invalid_and_mutates_nothing() {
        let (mut manager, log) = manager_with(&["line"]);
        manager.activate_by_id("line").unwrap();
        drain(&log);

        assert_eq!(manager.activate_by_id(""), Err(ToolError::InvalidArgument));
        assert_eq!(manager.active_tool_id(), Some("line"));
        assert!(drain(&log).is_empty(), "no hooks run on a rejected call");
        assert!(manager.take_queued_actions().len() == 1, "only the first");
    }

    #[test]
    fn unknown_id_is_rejected_and_mutates_nothing() {
        let (mut manager, log) = manager_with(&["line"]);
        manager.activate_by_id("line").unwrap();
        drain(&log);

        let err = manager.activate_by_id("eraser").unwrap_err();
        assert_eq!(err, ToolError::UnknownTool("eraser".into()));
        assert_eq!(manager.active_tool_id(), Some("line"));
        assert!(drain(&log).is_empty());
    }

    #[test]
    fn deactivate_restores_previous_tool_with_one_activate() {
        let (mut manager, log) = manager_with(&["line", "orbit"]);
        manager.activate_by_id("line").unwrap();
        manager.activate_by_id("orbit").unwrap();
        drain(&log);

        let popped = manager.deactivate_top();
        assert_eq!(popped, Some("orbit"));
        assert_eq!(manager.active_tool_id(), Some("line"));
        assert_eq!(drain(&log), vec!["orbit:deactivate", "line:activate"]);
    }

    #[test]
    fn deactivate_on_empty_is_a_noop() {
        let (mut manager, log) = manager_with(&["line"]);
        assert_eq!(manager.deactivate_top(), None);
        assert!(drain(&log).is_empty());
        assert!(manager.take_queued_actions().is_empty());
        assert!(manager.take_lifecycle_events().is_empty());
    }

    #[test]
    fn unregister_active_tool_skips_hooks_and_exposes_next() {
        let (mut manager, log) = manager_with(&["line", "orbit"]);
        manager.activate_by_id("line").unwrap();
        manager.activate_by_id("orbit").unwrap();
        drain(&log);

        let removed = manager.unregister("orbit");
        assert!(removed.is_some());
        assert!(drain(&log).is_empty(), "unregister never runs hooks");
        assert_eq!(manager.active_tool_id(), Some("line"));
        assert!(!manager.is_registered("orbit"));
    }

    #[test]
    fn unregister_unknown_tool_is_a_noop() {
        let (mut manager, _log) = manager_with(&["line"]);
        assert!(manager.unregister("eraser").is_none());
        assert!(manager.is_registered("line"));
    }

    #[test]
    fn replacing_an_inactive_tool_is_last_write_wins() {
        let (mut manager, log) = manager_with(&["line"]);
        manager
            .register(ProbeTool::new("line", Arc::clone(&log)))
            .expect("inactive id can be replaced");
        assert!(manager.is_registered("line"));
    }

    #[test]
    fn replacing_an_activated_tool_is_refused() {
        let (mut manager, log) = manager_with(&["line"]);
        manager.activate_by_id("line").unwrap();

        let err = manager
            .register(ProbeTool::new("line", Arc::clone(&log)))
            .unwrap_err();
        assert_eq!(err, ToolError::ToolInUse("line".into()));
        assert_eq!(manager.active_tool_id(), Some("line"));
    }

    #[test]
    fn line_then_pushpull_then_deactivate_scenario() {
        let (mut manager, log) = manager_with(&["line", "pushpull"]);

        manager.activate_by_id("line").unwrap();
        assert_eq!(manager.active_tool_id(), Some("line"));
        assert_eq!(drain(&log), vec!["line:activate"]);

        manager.activate_by_id("pushpull").unwrap();
        assert_eq!(manager.active_tool_id(), Some("pushpull"));
        assert_eq!(drain(&log), vec!["line:deactivate", "pushpull:activate"]);

        // "line" is still recorded beneath "pushpull", so popping twice
        // empties the manager.
        assert_eq!(manager.deactivate_top(), Some("pushpull"));
        assert_eq!(drain(&log), vec!["pushpull:deactivate", "line:activate"]);
        assert_eq!(manager.deactivate_top(), Some("line"));
        assert_eq!(manager.active_tool_id(), None);
        assert!(manager.active_tool().is_none());
    }

    #[test]
    fn activation_queues_one_manager_sourced_action() {
        let (mut manager, _log) = manager_with(&["line"]);
        manager.activate_by_id("line").unwrap();

        let actions = manager.take_queued_actions();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0], ActionEvent::new(ActionSource::ToolManager, "line"));
        assert!(
            manager.take_queued_actions().is_empty(),
            "draining empties the queue"
        );
    }

    #[test]
    fn deactivation_event_carries_the_popped_id() {
        let (mut manager, _log) = manager_with(&["line", "orbit"]);
        manager.activate_by_id("line").unwrap();
        manager.activate_by_id("orbit").unwrap();
        manager.take_queued_actions();

        manager.deactivate_top();
        let actions = manager.take_queued_actions();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].id, "orbit", "the event names the popped tool");
    }

    #[test]
    fn lifecycle_events_mirror_hooks() {
        let (mut manager, _log) = manager_with(&["line", "pushpull"]);
        manager.activate_by_id("line").unwrap();
        manager.activate_by_id("pushpull").unwrap();

        let events = manager.take_lifecycle_events();
        let kinds: Vec<(&str, ToolEventKind)> = events
            .iter()
            .map(|event| (event.id.as_str(), event.kind))
            .collect();
        assert_eq!(
            kinds,
            vec![
                ("line", ToolEventKind::Activated),
                ("line", ToolEventKind::Deactivated),
                ("pushpull", ToolEventKind::Activated),
            ]
        );
    }

    #[test]
    fn handle_action_activates_by_event_id() {
        let (mut manager, _log) = manager_with(&["line"]);
        let event = ActionEvent::new(ActionSource::Toolbar, "line");
        manager.handle_action(&event).unwrap();
        assert_eq!(manager.active_tool_id(), Some("line"));
    }

    #[test]
    fn ordered_tool_ids_sort_by_order_then_id() {
        struct OrderedTool(ToolId, i32);
        impl Tool for OrderedTool {
            fn id(&self) -> ToolId {
                self.0
            }
            fn info(&self) -> ToolInfo {
                ToolInfo {
                    display_name: self.0,
                    icon: "?",
                    tooltip: "",
                    shortcut: None,
                    order: self.1,
                }
            }
        }

        let mut manager = ToolManager::default();
        manager.register(Box::new(OrderedTool("zoom", 20))).unwrap();
        manager.register(Box::new(OrderedTool("line", 10))).unwrap();
        manager.register(Box::new(OrderedTool("axis", 20))).unwrap();
        assert_eq!(manager.ordered_tool_ids(), vec!["line", "axis", "zoom"]);
    }
}
