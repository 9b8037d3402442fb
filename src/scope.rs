use std::cell::RefCell;
use std::marker::PhantomData;

use crate::ToggleController;


thread_local! {
    static ACTIVE: RefCell<Vec<ToggleController>> = RefCell::new(Vec::new());
}

/// Broadcasts one controller to an arbitrary call subtree without passing it
/// through every layer.
///
/// `enter` pushes the controller onto a thread-local provider stack and
/// returns a guard; dropping the guard pops it. Scopes nest, innermost wins.
/// Guards are expected to drop in reverse entry order, which ordinary
/// lexical scoping guarantees.
///
/// ```rust
/// use flick::{ToggleConfig, ToggleController, ToggleScope};
///
/// let toggle = ToggleController::new(ToggleConfig::new());
/// let _scope = ToggleScope::enter(&toggle);
/// ToggleScope::with(|toggle| toggle.toggle());
/// assert!(toggle.value());
/// ```
pub struct ToggleScope {
    _marker: PhantomData<*const ()>,
}

impl ToggleScope {
    pub fn enter(controller: &ToggleController) -> Self {
        ACTIVE.with(|stack| stack.borrow_mut().push(controller.clone()));
        Self {
            _marker: PhantomData,
        }
    }

    /// Run `f` with the innermost active controller.
    ///
    /// # Panics
    ///
    /// Panics if no scope is active on this thread. Reading the broadcast
    /// with no provider is a programmer error.
    pub fn with<R>(f: impl FnOnce(&ToggleController) -> R) -> R {
        if let Some(r) = Self::try_with(f) {
            r
        } else {
            panic!("`ToggleScope` is not active.");
        }
    }

    /// Like [`with`](Self::with), but returns `None` when no scope is
    /// active.
    pub fn try_with<R>(f: impl FnOnce(&ToggleController) -> R) -> Option<R> {
        let current = ACTIVE.with(|stack| stack.borrow().last().cloned());
        current.map(|controller| f(&controller))
    }

    pub fn is_active() -> bool {
        ACTIVE.with(|stack| !stack.borrow().is_empty())
    }
}

impl Drop for ToggleScope {
    fn drop(&mut self) {
        ACTIVE.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}
