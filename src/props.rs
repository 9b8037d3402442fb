use std::borrow::Cow;
use std::collections::BTreeMap;

use derive_ex::derive_ex;
use parse_display::Display;
use serde::ser::SerializeMap;
use serde::Serialize;

use crate::{call_all, Handler};


/// Attribute key carrying the derived value in a toggler bundle.
pub const ARIA_PRESSED: &str = "aria-pressed";

/// A render-agnostic attribute value.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum PropValue {
    #[display("{0}")]
    Bool(bool),
    #[display("{0}")]
    Int(i64),
    #[display("{0}")]
    Text(Cow<'static, str>),
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}
impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        PropValue::Int(value)
    }
}
impl From<&'static str> for PropValue {
    fn from(value: &'static str) -> Self {
        PropValue::Text(Cow::Borrowed(value))
    }
}
impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Text(Cow::Owned(value))
    }
}

impl Serialize for PropValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        match self {
            PropValue::Bool(value) => serializer.serialize_bool(*value),
            PropValue::Int(value) => serializer.serialize_i64(*value),
            PropValue::Text(value) => serializer.serialize_str(value),
        }
    }
}

/// An ordered attribute bundle handed to presentation layers.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Props(BTreeMap<Cow<'static, str>, PropValue>);

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<Cow<'static, str>>, value: impl Into<PropValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<PropValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.0.get(key)
    }

    /// Merge `other` in verbatim. Existing keys are overwritten.
    pub fn merge(&mut self, other: Props) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.0.iter().map(|(key, value)| (key.as_ref(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Props {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Caller-supplied overrides for a prop getter.
///
/// The optional `on_click` is composed *before* the controller's own
/// handler; `attrs` pass through into the bundle verbatim.
#[derive_ex(Default, Clone(bound()))]
#[default(Self::new())]
pub struct PropOverrides<E: ?Sized + 'static> {
    on_click: Option<Handler<E>>,
    attrs: Props,
}

impl<E: ?Sized + 'static> PropOverrides<E> {
    pub fn new() -> Self {
        Self {
            on_click: None,
            attrs: Props::new(),
        }
    }

    pub fn on_click(mut self, f: impl Fn(&E) + 'static) -> Self {
        self.on_click = Some(Handler::new(f));
        self
    }

    pub fn attr(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<PropValue>) -> Self {
        self.attrs.set(key, value);
        self
    }

    pub fn into_parts(self) -> (Option<Handler<E>>, Props) {
        (self.on_click, self.attrs)
    }
}

/// The property bundle returned by a prop getter: attributes plus the
/// composed click handler. Building a bundle performs no mutation; only
/// invoking the handler does.
#[derive_ex(Clone, bound())]
pub struct PropBundle<E: ?Sized + 'static> {
    attrs: Props,
    on_click: Handler<E>,
}

impl<E: ?Sized + 'static> PropBundle<E> {
    pub(crate) fn compose(
        attrs: Props,
        caller: Option<Handler<E>>,
        own: Handler<E>,
    ) -> Self {
        Self {
            attrs,
            on_click: call_all([caller, Some(own)]),
        }
    }

    pub fn attrs(&self) -> &Props {
        &self.attrs
    }

    pub fn on_click(&self) -> &Handler<E> {
        &self.on_click
    }

    /// Invoke the composed click handler.
    pub fn click(&self, event: &E) {
        self.on_click.call(event)
    }

    pub fn into_parts(self) -> (Props, Handler<E>) {
        (self.attrs, self.on_click)
    }
}
