use crate::record::{Container, Record};
use crate::Result;

use serde::{Serialize, Serializer};
use std::ops;

/// A column cell or a node of the nested result tree.
///
/// Input rows only ever carry the scalar variants (plus [`Value::Null`]);
/// [`Value::Record`] and [`Value::List`] are produced by the engine when rows
/// are folded into nested structures.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer
    I64(i64),

    /// 64-bit floating point value
    F64(f64),

    /// String value
    String(String),

    /// Null value
    #[default]
    Null,

    /// A nested result record
    Record(Record),

    /// A list of nested result records
    List(Vec<Value>),
}

impl Value {
    /// Returns a `Value` representing null
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// True for the variants a row cell may hold.
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Bool(_) | Self::I64(_) | Self::F64(_) | Self::String(_) | Self::Null
        )
    }

    pub const fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn list_from_vec(items: Vec<Self>) -> Self {
        Self::List(items)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(&**v),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(&items[..]),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_record(&self) -> &Record {
        match self {
            Self::Record(record) => record,
            _ => panic!("expected a record; value={self:#?}"),
        }
    }

    #[track_caller]
    pub fn expect_list(&self) -> &[Value] {
        match self {
            Self::List(items) => &items[..],
            _ => panic!("expected a list; value={self:#?}"),
        }
    }

    pub fn to_record(self) -> Result<Record> {
        match self {
            Self::Record(record) => Ok(record),
            _ => Err(crate::err!("cannot convert value to record")),
        }
    }

    pub fn to_list(self) -> Result<Vec<Value>> {
        match self {
            Self::List(items) => Ok(items),
            _ => Err(crate::err!("cannot convert value to list")),
        }
    }

    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl AsRef<Self> for Value {
    fn as_ref(&self) -> &Self {
        self
    }
}

/// Property access on a record node.
///
/// # Panics
///
/// Panics if the value is not a record or the property is absent.
impl ops::Index<&str> for Value {
    type Output = Value;

    #[track_caller]
    fn index(&self, prop: &str) -> &Value {
        match self {
            Self::Record(record) => record
                .get(prop)
                .unwrap_or_else(|| panic!("record has no property `{prop}`")),
            _ => panic!("expected a record; value={self:#?}"),
        }
    }
}

/// Positional access on a list node.
///
/// # Panics
///
/// Panics if the value is not a list or the index is out of bounds.
impl ops::Index<usize> for Value {
    type Output = Value;

    #[track_caller]
    fn index(&self, index: usize) -> &Value {
        match self {
            Self::List(items) => &items[index],
            _ => panic!("expected a list; value={self:#?}"),
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I64(src.into())
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Record> for Value {
    fn from(src: Record) -> Self {
        Self::Record(src)
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(src: Option<T>) -> Self {
        match src {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::I64(v) => serializer.serialize_i64(*v),
            Self::F64(v) => serializer.serialize_f64(*v),
            Self::String(v) => serializer.serialize_str(v),
            Self::Null => serializer.serialize_unit(),
            Self::Record(record) => record.serialize(serializer),
            Self::List(items) => items.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_option_maps_none_to_null() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(42i64)), Value::I64(42));
    }

    #[test]
    fn scalar_predicate() {
        assert!(Value::from("x").is_scalar());
        assert!(Value::Null.is_scalar());
        assert!(!Value::List(vec![]).is_scalar());
    }

    #[test]
    fn index_into_list() {
        let list = Value::List(vec![Value::I64(10), Value::I64(20)]);
        assert_eq!(list[1], Value::I64(20));
    }

    #[test]
    fn serialize_scalars() {
        assert_eq!(serde_json::to_string(&Value::Null).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Value::I64(7)).unwrap(), "7");
        assert_eq!(serde_json::to_string(&Value::from("a")).unwrap(), "\"a\"");
    }
}
