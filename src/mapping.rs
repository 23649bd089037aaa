mod infer;

use indexmap::IndexMap;

/// Declarative description of the output shape: which properties the result
/// records carry, which source column feeds each one, and where nested
/// records and record lists hang.
#[derive(Debug, Clone, PartialEq)]
pub enum Mapping {
    /// The result is a single root record.
    Record(Structure),

    /// The result is a list of root records.
    List(Structure),
}

impl Mapping {
    pub fn record(structure: Structure) -> Self {
        Self::Record(structure)
    }

    pub fn list(structure: Structure) -> Self {
        Self::List(structure)
    }

    /// The root level, regardless of list-ness.
    pub fn structure(&self) -> &Structure {
        match self {
            Self::Record(structure) | Self::List(structure) => structure,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn is_empty(&self) -> bool {
        self.structure().is_empty()
    }
}

/// One level of a mapping: an ordered set of named properties.
///
/// The first declared property is the level's identity property; its column
/// decides whether a row starts a new record at this level or continues an
/// existing one.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Structure {
    props: IndexMap<String, Property>,
}

impl Structure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a scalar property fed by `column`.
    pub fn column(mut self, prop: impl Into<String>, column: impl Into<String>) -> Self {
        self.insert(prop, Property::Column(column.into()));
        self
    }

    /// Adds a to-one relation: a singular nested record.
    pub fn one(mut self, prop: impl Into<String>, structure: Structure) -> Self {
        self.insert(prop, Property::One(structure));
        self
    }

    /// Adds a to-many relation: a nested list of records.
    pub fn many(mut self, prop: impl Into<String>, structure: Structure) -> Self {
        self.insert(prop, Property::Many(structure));
        self
    }

    pub fn insert(&mut self, prop: impl Into<String>, property: Property) {
        self.props.insert(prop.into(), property);
    }

    pub fn get(&self, prop: &str) -> Option<&Property> {
        self.props.get(prop)
    }

    pub(crate) fn get_mut(&mut self, prop: &str) -> Option<&mut Property> {
        self.props.get_mut(prop)
    }

    /// Properties in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &Property)> {
        self.props.iter().map(|(prop, property)| (&prop[..], property))
    }

    /// The identity (property, column) pair, if the level's first property is
    /// a column.
    pub fn identity(&self) -> Option<(&str, &str)> {
        match self.props.first()? {
            (prop, Property::Column(column)) => Some((&prop[..], &column[..])),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

/// A single property declaration within a [`Structure`].
#[derive(Debug, Clone, PartialEq)]
pub enum Property {
    /// Scalar value copied from the named column.
    Column(String),

    /// To-one relation.
    One(Structure),

    /// To-many relation.
    Many(Structure),
}

impl Property {
    pub fn is_column(&self) -> bool {
        matches!(self, Self::Column(_))
    }

    pub fn as_column(&self) -> Option<&str> {
        match self {
            Self::Column(column) => Some(&column[..]),
            _ => None,
        }
    }

    pub fn as_structure(&self) -> Option<&Structure> {
        match self {
            Self::One(structure) | Self::Many(structure) => Some(structure),
            Self::Column(_) => None,
        }
    }
}
