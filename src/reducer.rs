use std::rc::Rc;

use parse_display::Display;
use serde::{Deserialize, Serialize};


/// The state owned by a toggle controller.
///
/// Created once from the configured initial value and replaced only by
/// feeding an [`Action`] through the active reducer.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct ToggleState {
    pub on: bool,
}

impl ToggleState {
    pub fn new(on: bool) -> Self {
        Self { on }
    }
}

impl Serialize for ToggleState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_bool(self.on)
    }
}
impl<'de> Deserialize<'de> for ToggleState {
    fn deserialize<D>(deserializer: D) -> Result<ToggleState, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        bool::deserialize(deserializer).map(ToggleState::new)
    }
}

/// A state transition request, consumed once by a reducer.
///
/// `Custom` is the escape hatch for caller-supplied reducers that extend the
/// action vocabulary. [`toggle_reducer`] does not understand it.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Action {
    #[display("toggle")]
    Toggle,
    #[display("reset")]
    Reset(ToggleState),
    #[display("{0}")]
    Custom(&'static str),
}

/// Transition logic for a toggle controller.
///
/// Reducers must be pure: same state and action, same result, no side
/// effects.
pub type Reducer = Rc<dyn Fn(&ToggleState, &Action) -> ToggleState>;

/// Callback invoked once per dispatched action with the would-be next state.
pub type OnChange = Rc<dyn Fn(&ToggleState, &Action)>;

/// The default transition logic.
///
/// `Toggle` flips `on`, `Reset` restores the carried state ignoring the
/// current one.
///
/// # Panics
///
/// Panics on a [`Action::Custom`] tag. Dispatching an action the active
/// reducer does not understand is a programmer error, not a recoverable
/// condition.
pub fn toggle_reducer(state: &ToggleState, action: &Action) -> ToggleState {
    match action {
        Action::Toggle => ToggleState { on: !state.on },
        Action::Reset(initial) => *initial,
        Action::Custom(_) => panic!("unsupported action: {action}"),
    }
}
