use super::Container;
use crate::value::Value;

use indexmap::IndexMap;
use serde::Serialize;
use std::ops;

/// Attribute-object result record: named attributes that can be set, read,
/// unset, and counted at runtime.
///
/// The attribute surface mirrors a dynamic object rather than a map: callers
/// address attributes by name and may probe or drop them individually.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AttrObject {
    attrs: IndexMap<String, Value>,
}

impl AttrObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads an attribute, or `None` if it was never set.
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attrs.insert(name.into(), value.into());
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Drops an attribute, returning its value if it was set.
    pub fn unset_attr(&mut self, name: &str) -> Option<Value> {
        self.attrs.shift_remove(name)
    }

    /// Number of attributes currently set.
    pub fn count(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attrs.iter().map(|(name, value)| (&name[..], value))
    }
}

impl Container for AttrObject {
    fn get(&self, prop: &str) -> Option<&Value> {
        self.attr(prop)
    }

    fn set(&mut self, prop: &str, value: Value) {
        self.set_attr(prop, value);
    }

    fn contains(&self, prop: &str) -> bool {
        self.has_attr(prop)
    }

    fn remove(&mut self, prop: &str) -> Option<Value> {
        self.unset_attr(prop)
    }

    fn len(&self) -> usize {
        self.count()
    }
}

/// # Panics
///
/// Panics if the attribute was never set.
impl ops::Index<&str> for AttrObject {
    type Output = Value;

    #[track_caller]
    fn index(&self, name: &str) -> &Value {
        &self.attrs[name]
    }
}

impl<'a> IntoIterator for &'a AttrObject {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.attrs.iter()
    }
}
