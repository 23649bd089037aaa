mod attr_object;
pub use attr_object::AttrObject;

mod property_map;
pub use property_map::PropertyMap;

use crate::value::Value;

use serde::{Serialize, Serializer};
use std::ops;

/// How result records materialize for the caller.
///
/// The choice is a materialization strategy only; the folding logic is
/// identical for both shapes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ResultShape {
    /// Records are plain ordered property maps.
    #[default]
    Map,

    /// Records are attribute objects: dynamically settable, countable named
    /// attributes.
    Object,
}

/// The capability surface every result-record container provides.
///
/// The engine's materializer writes records exclusively through this trait;
/// it never touches a concrete representation.
pub trait Container {
    fn get(&self, prop: &str) -> Option<&Value>;

    fn set(&mut self, prop: &str, value: Value);

    fn contains(&self, prop: &str) -> bool;

    fn remove(&mut self, prop: &str) -> Option<Value>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A result record in one of the two materializations.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Map(PropertyMap),
    Object(AttrObject),
}

impl Record {
    /// Creates an empty record of the given shape.
    pub fn new(shape: ResultShape) -> Self {
        match shape {
            ResultShape::Map => Self::Map(PropertyMap::new()),
            ResultShape::Object => Self::Object(AttrObject::new()),
        }
    }

    pub fn shape(&self) -> ResultShape {
        match self {
            Self::Map(_) => ResultShape::Map,
            Self::Object(_) => ResultShape::Object,
        }
    }

    pub fn as_map(&self) -> Option<&PropertyMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&AttrObject> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_map(&self) -> &PropertyMap {
        match self {
            Self::Map(map) => map,
            _ => panic!("expected a plain-mapping record; record={self:#?}"),
        }
    }

    #[track_caller]
    pub fn expect_object(&self) -> &AttrObject {
        match self {
            Self::Object(object) => object,
            _ => panic!("expected an attribute-object record; record={self:#?}"),
        }
    }

    /// Iterates properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        let iter: Box<dyn Iterator<Item = (&str, &Value)> + '_> = match self {
            Self::Map(map) => Box::new(map.iter()),
            Self::Object(object) => Box::new(object.iter()),
        };
        iter
    }
}

impl Container for Record {
    fn get(&self, prop: &str) -> Option<&Value> {
        match self {
            Self::Map(map) => map.get(prop),
            Self::Object(object) => object.get(prop),
        }
    }

    fn set(&mut self, prop: &str, value: Value) {
        match self {
            Self::Map(map) => map.set(prop, value),
            Self::Object(object) => object.set(prop, value),
        }
    }

    fn contains(&self, prop: &str) -> bool {
        match self {
            Self::Map(map) => map.contains(prop),
            Self::Object(object) => object.contains(prop),
        }
    }

    fn remove(&mut self, prop: &str) -> Option<Value> {
        match self {
            Self::Map(map) => map.remove(prop),
            Self::Object(object) => object.remove(prop),
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Map(map) => Container::len(map),
            Self::Object(object) => Container::len(object),
        }
    }
}

/// # Panics
///
/// Panics if the property is absent.
impl ops::Index<&str> for Record {
    type Output = Value;

    #[track_caller]
    fn index(&self, prop: &str) -> &Value {
        self.get(prop)
            .unwrap_or_else(|| panic!("record has no property `{prop}`"))
    }
}

impl From<PropertyMap> for Record {
    fn from(src: PropertyMap) -> Self {
        Self::Map(src)
    }
}

impl From<AttrObject> for Record {
    fn from(src: AttrObject) -> Self {
        Self::Object(src)
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Map(map) => map.serialize(serializer),
            Self::Object(object) => object.serialize(serializer),
        }
    }
}
