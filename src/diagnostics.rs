use std::rc::Rc;

use parse_display::Display;

use crate::{ControlMode, ModeSnapshot};


/// An advisory usage diagnostic.
///
/// Warnings are observable through a [`DiagnosticsSink`] but never alter
/// control flow and never block the operation that raised them. `Display`
/// renders the full developer-facing message.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum UsageWarning {
    /// The caller changed between supplying and omitting the control value
    /// over the controller's lifetime.
    #[display(
        "`{component}` is changing from {from} to be {to}. Components should not switch from \
         {from} to {to} (or vice versa). Decide between using a controlled or uncontrolled \
         `{component}` for the lifetime of the component. Check the `{prop}` prop."
    )]
    ModeFlip {
        component: &'static str,
        prop: &'static str,
        from: ControlMode,
        to: ControlMode,
    },
    /// A control value was supplied without any change-notification channel
    /// and without an explicit read-only acknowledgement.
    #[display(
        "An `{control_prop}` prop was provided to `{component}` without an `{on_change_prop}` \
         handler. This will render a read-only toggle. If you want it to be mutable, use \
         `{initial_prop}`. Otherwise, set either `{on_change_prop}` or `{read_only_prop}`."
    )]
    ReadOnly {
        component: &'static str,
        control_prop: &'static str,
        on_change_prop: &'static str,
        initial_prop: &'static str,
        read_only_prop: &'static str,
    },
}

/// Where advisory diagnostics go.
pub trait DiagnosticsSink {
    fn warn(&self, warning: &UsageWarning);
}

/// The default sink. Emits each warning as a `tracing::warn!` event.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn warn(&self, warning: &UsageWarning) {
        tracing::warn!("{}", warning);
    }
}

/// Runtime consistency checks for one controller instance.
///
/// Holds the classification frozen at construction and re-evaluates both
/// checks on every observation. Diagnostic only: the monitor never rejects
/// a configuration.
pub struct ConsistencyMonitor {
    component: &'static str,
    snapshot: ModeSnapshot,
    sink: Rc<dyn DiagnosticsSink>,
}

const CONTROL_PROP: &str = "on";
const ON_CHANGE_PROP: &str = "on_change";
const INITIAL_PROP: &str = "initial_on";
const READ_ONLY_PROP: &str = "read_only";

impl ConsistencyMonitor {
    pub fn new(component: &'static str, snapshot: ModeSnapshot, sink: Rc<dyn DiagnosticsSink>) -> Self {
        Self {
            component,
            snapshot,
            sink,
        }
    }

    /// Run both checks against one configuration observation.
    pub fn observe(&self, mode: ControlMode, has_on_change: bool, read_only: bool) {
        if self.snapshot.shift(mode).flipped() {
            self.sink.warn(&UsageWarning::ModeFlip {
                component: self.component,
                prop: CONTROL_PROP,
                from: self.snapshot.initial(),
                to: mode,
            });
        }
        if !mode.is_uncontrolled() && !has_on_change && !read_only {
            self.sink.warn(&UsageWarning::ReadOnly {
                component: self.component,
                control_prop: CONTROL_PROP,
                on_change_prop: ON_CHANGE_PROP,
                initial_prop: INITIAL_PROP,
                read_only_prop: READ_ONLY_PROP,
            });
        }
    }
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{DiagnosticsSink, UsageWarning};

    /// Sink that records a short tag per warning through `assert_call`.
    pub struct CallSink;

    impl DiagnosticsSink for CallSink {
        fn warn(&self, warning: &UsageWarning) {
            match warning {
                UsageWarning::ModeFlip { from, to, .. } => {
                    assert_call::call!("flip {from}->{to}")
                }
                UsageWarning::ReadOnly { .. } => assert_call::call!("read-only"),
            }
        }
    }

    /// Sink that keeps every warning for structural assertions.
    #[derive(Clone, Default)]
    pub struct RecordSink(pub Rc<RefCell<Vec<UsageWarning>>>);

    impl RecordSink {
        pub fn warnings(&self) -> Vec<UsageWarning> {
            self.0.borrow().clone()
        }
    }

    impl DiagnosticsSink for RecordSink {
        fn warn(&self, warning: &UsageWarning) {
            self.0.borrow_mut().push(warning.clone());
        }
    }
}
