use super::Container;
use crate::value::Value;

use indexmap::IndexMap;
use serde::Serialize;
use std::ops;

/// Plain-mapping result record: an insertion-ordered property to value map.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PropertyMap {
    props: IndexMap<String, Value>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, prop: &str) -> Option<&Value> {
        self.props.get(prop)
    }

    pub fn insert(&mut self, prop: impl Into<String>, value: impl Into<Value>) {
        self.props.insert(prop.into(), value.into());
    }

    pub fn contains(&self, prop: &str) -> bool {
        self.props.contains_key(prop)
    }

    pub fn remove(&mut self, prop: &str) -> Option<Value> {
        // shift-remove keeps the remaining properties in declaration order
        self.props.shift_remove(prop)
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.props.iter().map(|(prop, value)| (&prop[..], value))
    }
}

impl Container for PropertyMap {
    fn get(&self, prop: &str) -> Option<&Value> {
        PropertyMap::get(self, prop)
    }

    fn set(&mut self, prop: &str, value: Value) {
        self.props.insert(prop.to_string(), value);
    }

    fn contains(&self, prop: &str) -> bool {
        PropertyMap::contains(self, prop)
    }

    fn remove(&mut self, prop: &str) -> Option<Value> {
        PropertyMap::remove(self, prop)
    }

    fn len(&self) -> usize {
        PropertyMap::len(self)
    }
}

/// # Panics
///
/// Panics if the property is absent.
impl ops::Index<&str> for PropertyMap {
    type Output = Value;

    #[track_caller]
    fn index(&self, prop: &str) -> &Value {
        &self.props[prop]
    }
}

impl FromIterator<(String, Value)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            props: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PropertyMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.props.iter()
    }
}
