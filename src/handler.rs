use std::rc::Rc;

use derive_ex::derive_ex;


/// A shared event callback.
///
/// `E` is whatever event payload the presentation layer delivers; the
/// controller never inspects it. Cloning is cheap and does not require
/// `E: Clone`.
#[derive_ex(Clone, bound())]
pub struct Handler<E: ?Sized + 'static>(Rc<dyn Fn(&E)>);

impl<E: ?Sized + 'static> Handler<E> {
    pub fn new(f: impl Fn(&E) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self, event: &E) {
        (self.0)(event)
    }
}

/// Merge any number of optional handlers into one.
///
/// The returned handler invokes each present handler in listed order with
/// the same event; absent entries are skipped. Order is significant: a
/// controller composes its own toggle/reset logic *after* caller-supplied
/// handlers, so callers observe the event before the default action fires.
pub fn call_all<E: ?Sized + 'static>(
    handlers: impl IntoIterator<Item = Option<Handler<E>>>,
) -> Handler<E> {
    let handlers: Vec<Handler<E>> = handlers.into_iter().flatten().collect();
    Handler::new(move |event| {
        for handler in &handlers {
            handler.call(event);
        }
    })
}
