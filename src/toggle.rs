use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

use crate::{
    toggle_reducer, Action, ConsistencyMonitor, ControlMode, DiagnosticsSink, Handler,
    ModeSnapshot, OnChange, PropBundle, PropOverrides, Props, Reducer, ToggleState, TracingSink,
    ARIA_PRESSED,
};


const COMPONENT: &str = "ToggleController";

/// Configuration for a [`ToggleController`].
///
/// Everything has a default: `ToggleConfig::new()` describes an uncontrolled
/// toggle that starts off, transitions with [`toggle_reducer`], and reports
/// diagnostics through [`TracingSink`].
#[derive(Clone)]
pub struct ToggleConfig {
    pub(crate) reducer: Reducer,
    pub(crate) read_only: bool,
    pub(crate) initial_on: bool,
    pub(crate) on: Option<bool>,
    pub(crate) on_change: Option<OnChange>,
    pub(crate) sink: Rc<dyn DiagnosticsSink>,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            reducer: Rc::new(toggle_reducer),
            read_only: false,
            initial_on: false,
            on: None,
            on_change: None,
            sink: Rc::new(TracingSink),
        }
    }
}

impl ToggleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the transition logic entirely.
    pub fn reducer(mut self, f: impl Fn(&ToggleState, &Action) -> ToggleState + 'static) -> Self {
        self.reducer = Rc::new(f);
        self
    }

    /// Acknowledge a controlled value without a change handler, silencing
    /// the read-only diagnostic. Does not affect behavior otherwise.
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Seed the internal state. Captured once at construction and never
    /// re-read on later observations.
    pub fn initial_on(mut self, initial_on: bool) -> Self {
        self.initial_on = initial_on;
        self
    }

    /// Supply the value externally, switching the controller to controlled
    /// mode.
    pub fn on(mut self, on: impl Into<Option<bool>>) -> Self {
        self.on = on.into();
        self
    }

    /// Called once per dispatched action, in both modes, with the would-be
    /// next state and the action.
    pub fn on_change(mut self, f: impl Fn(&ToggleState, &Action) + 'static) -> Self {
        self.on_change = Some(Rc::new(f));
        self
    }

    /// Route diagnostics somewhere other than [`TracingSink`].
    pub fn sink(mut self, sink: Rc<dyn DiagnosticsSink>) -> Self {
        self.sink = sink;
        self
    }
}

/// The configuration slice that is re-read on every observation.
struct Observed {
    reducer: Reducer,
    read_only: bool,
    control: Option<bool>,
    on_change: Option<OnChange>,
}

struct ToggleNode {
    state: RefCell<ToggleState>,
    initial_state: ToggleState,
    observed: RefCell<Observed>,
    monitor: ConsistencyMonitor,
}

/// A reusable, render-agnostic toggle state controller.
///
/// The controller owns a boolean on/off state driven either internally
/// (uncontrolled) or externally by the caller (controlled), and exposes it
/// to presentation layers through composable property bundles rather than a
/// component hierarchy.
///
/// Cloning yields another handle to the same instance.
///
/// ```rust
/// use flick::{ToggleConfig, ToggleController};
///
/// let toggle = ToggleController::new(ToggleConfig::new());
/// assert!(!toggle.value());
/// toggle.toggle();
/// assert!(toggle.value());
/// toggle.reset();
/// assert!(!toggle.value());
/// ```
#[derive(Clone)]
pub struct ToggleController(Rc<ToggleNode>);

impl ToggleController {
    /// Create a controller.
    ///
    /// `initial_on` is captured into a frozen initial state exactly once;
    /// reconstructing with a different value never retroactively changes an
    /// existing instance. The controlled/uncontrolled classification of this
    /// first configuration is also frozen, as the baseline for the mode-flip
    /// diagnostic. Construction counts as the first observation, so the
    /// read-only diagnostic can fire here.
    pub fn new(config: ToggleConfig) -> Self {
        let initial_state = ToggleState::new(config.initial_on);
        let snapshot = ModeSnapshot::new(ControlMode::classify(config.on));
        let this = Self(Rc::new(ToggleNode {
            state: RefCell::new(initial_state),
            initial_state,
            observed: RefCell::new(Observed {
                reducer: config.reducer,
                read_only: config.read_only,
                control: config.on,
                on_change: config.on_change,
            }),
            monitor: ConsistencyMonitor::new(COMPONENT, snapshot, config.sink),
        }));
        this.check_consistency();
        this
    }

    /// Re-observe the configuration.
    ///
    /// Call this whenever the caller supplies new configuration (for a
    /// controlled toggle, that includes every change of the external value).
    /// Re-reads `reducer`, `read_only`, `on` and `on_change`; ignores
    /// `initial_on` (one-shot capture) and `sink` (frozen at construction);
    /// then runs the consistency checks against the frozen classification.
    /// Diagnostics never alter behavior: a mode flip is reported, not
    /// rejected.
    pub fn observe(&self, config: ToggleConfig) {
        {
            let mut observed = self.0.observed.borrow_mut();
            observed.reducer = config.reducer;
            observed.read_only = config.read_only;
            observed.control = config.on;
            observed.on_change = config.on_change;
        }
        self.check_consistency();
    }

    fn check_consistency(&self) {
        let observed = self.0.observed.borrow();
        self.0.monitor.observe(
            ControlMode::classify(observed.control),
            observed.on_change.is_some(),
            observed.read_only,
        );
    }

    /// The derived value: the external value while controlled, the internal
    /// state otherwise. No side effects.
    pub fn value(&self) -> bool {
        let observed = self.0.observed.borrow();
        match observed.control {
            Some(on) => on,
            None => self.0.state.borrow().on,
        }
    }

    /// The initial state frozen at construction.
    pub fn initial_state(&self) -> ToggleState {
        self.0.initial_state
    }

    /// Dispatch an action, routing it through the reducer and the change
    /// notification.
    ///
    /// While uncontrolled, the reducer's result replaces the internal state.
    /// While controlled, internal state is untouched; the reducer still runs
    /// so the notification carries the hypothetical post-action value. The
    /// notification state is the latest internal state with `on` replaced by
    /// the current derived value, taken before the commit.
    ///
    /// The internal commit happens before `on_change` runs, so re-entrant
    /// reads or dispatches from inside the callback observe the committed
    /// value.
    pub fn dispatch(&self, action: Action) {
        let node = &*self.0;
        let (reducer, on_change, control) = {
            let observed = node.observed.borrow();
            (
                observed.reducer.clone(),
                observed.on_change.clone(),
                observed.control,
            )
        };
        let internal = *node.state.borrow();
        let mut merged = internal;
        if let Some(on) = control {
            merged.on = on;
        }
        let next = reducer(&merged, &action);
        if ControlMode::classify(control).is_uncontrolled() {
            *node.state.borrow_mut() = reducer(&internal, &action);
        }
        if let Some(on_change) = on_change {
            on_change(&next, &action);
        }
    }

    /// Dispatch [`Action::Toggle`].
    pub fn toggle(&self) {
        self.dispatch(Action::Toggle);
    }

    /// Dispatch [`Action::Reset`] carrying the frozen initial state.
    pub fn reset(&self) {
        self.dispatch(Action::Reset(self.0.initial_state));
    }

    /// Build the property bundle for a toggler element.
    ///
    /// Attributes start with `aria-pressed` set to the derived value, then
    /// the override attributes merged in verbatim (an override may
    /// deliberately clobber `aria-pressed`). The click handler runs the
    /// caller's `on_click` first, then [`toggle`](Self::toggle).
    pub fn toggler_props<E: ?Sized + 'static>(
        &self,
        overrides: PropOverrides<E>,
    ) -> PropBundle<E> {
        let this = self.clone();
        let (on_click, rest) = overrides.into_parts();
        let mut attrs = Props::new().with(ARIA_PRESSED, self.value());
        attrs.merge(rest);
        PropBundle::compose(attrs, on_click, Handler::new(move |_| this.toggle()))
    }

    /// Build the property bundle for a resetter element: the caller's
    /// `on_click` first, then [`reset`](Self::reset). Carries only the
    /// passthrough attributes.
    pub fn resetter_props<E: ?Sized + 'static>(
        &self,
        overrides: PropOverrides<E>,
    ) -> PropBundle<E> {
        let this = self.clone();
        let (on_click, rest) = overrides.into_parts();
        PropBundle::compose(rest, on_click, Handler::new(move |_| this.reset()))
    }

    #[cfg(test)]
    fn internal_state(&self) -> ToggleState {
        *self.0.state.borrow()
    }
}

impl std::fmt::Debug for ToggleController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.0.observed.try_borrow(), self.0.state.try_borrow()) {
            (Ok(observed), Ok(state)) => {
                let on = observed.control.unwrap_or(state.on);
                std::fmt::Debug::fmt(&on, f)
            }
            _ => write!(f, "<borrowed>"),
        }
    }
}

impl Serialize for ToggleController {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        match (self.0.observed.try_borrow(), self.0.state.try_borrow()) {
            (Ok(observed), Ok(state)) => {
                serializer.serialize_bool(observed.control.unwrap_or(state.on))
            }
            _ => Err(serde::ser::Error::custom("borrowed")),
        }
    }
}
