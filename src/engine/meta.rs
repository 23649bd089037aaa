use crate::mapping::{Mapping, Property, Structure};
use crate::{Error, Result};

use indexmap::IndexMap;

/// Compiled form of a mapping, reused across every row of the fold.
///
/// Each identity column maps to exactly one entry regardless of how often
/// its level recurs in the table; that single entry (and its caches in the
/// folder) is the deduplication mechanism.
#[derive(Debug)]
pub(crate) struct Meta {
    /// Identity columns that can start a record for a row: the root level
    /// plus every to-many level, in mapping declaration order.
    pub(crate) primes: Vec<String>,

    /// Per-identity-column compilation of one mapping level.
    pub(crate) entries: IndexMap<String, Entry>,

    /// Whether the result is a list of root records.
    pub(crate) root_is_list: bool,
}

/// Compiled view of one mapping level, keyed by its identity column.
#[derive(Debug)]
pub(crate) struct Entry {
    /// Scalar (property, column) pairs in declaration order, identity first.
    pub(crate) values: Vec<(String, String)>,

    /// To-one relations: (property, child identity column).
    pub(crate) to_one: Vec<(String, String)>,

    /// To-many relation properties.
    pub(crate) to_many: Vec<String>,

    /// Identity column of the containing level; `None` at the root.
    pub(crate) containing: Option<String>,

    /// Property under which this level hangs in its container.
    pub(crate) own_prop: Option<String>,

    /// Whether this level sits inside a to-many relation.
    pub(crate) one_of_many: bool,

    /// This level's identity column plus every identity column above it.
    /// Change detection between consecutive rows gates on the whole chain:
    /// an unchanged identity may still need re-linking under a changed
    /// ancestor.
    pub(crate) chain: Vec<String>,
}

impl Meta {
    /// Compiles `mapping`. Fails with an invalid-mapping error when a level
    /// has no properties, when a level's first property is not a column, or
    /// when one column identifies two levels.
    pub(crate) fn build(mapping: &Mapping) -> Result<Meta> {
        let mut builder = Builder {
            primes: Vec::new(),
            entries: IndexMap::new(),
        };

        let root = Level {
            one_of_many: mapping.is_list(),
            containing: None,
            own_prop: None,
            chain: Vec::new(),
        };
        builder.structure(mapping.structure(), root)?;

        Ok(Meta {
            primes: builder.primes,
            entries: builder.entries,
            root_is_list: mapping.is_list(),
        })
    }

    pub(crate) fn entry(&self, id_column: &str) -> &Entry {
        &self.entries[id_column]
    }
}

/// Position of one structure within the mapping, threaded through the
/// compilation recursion.
struct Level<'m> {
    one_of_many: bool,
    containing: Option<&'m str>,
    own_prop: Option<&'m str>,
    chain: Vec<String>,
}

struct Builder {
    primes: Vec<String>,
    entries: IndexMap<String, Entry>,
}

impl Builder {
    /// Compiles one level and its descendants, returning the level's
    /// identity column.
    fn structure<'m>(&mut self, structure: &'m Structure, level: Level<'m>) -> Result<&'m str> {
        let Some((_, id_column)) = structure.identity() else {
            return Err(match structure.properties().next() {
                None => Error::invalid_mapping("structure has no properties"),
                Some((prop, _)) => Error::invalid_mapping(format!(
                    "first property `{prop}` of a structure must map to a column"
                )),
            });
        };

        if self.entries.contains_key(id_column) {
            return Err(Error::invalid_mapping(format!(
                "column `{id_column}` is the identity of more than one structure"
            )));
        }

        let mut chain = level.chain.clone();
        chain.push(id_column.to_string());

        self.entries.insert(
            id_column.to_string(),
            Entry {
                values: Vec::new(),
                to_one: Vec::new(),
                to_many: Vec::new(),
                containing: level.containing.map(String::from),
                own_prop: level.own_prop.map(String::from),
                one_of_many: level.one_of_many,
                chain: chain.clone(),
            },
        );

        // the root is always prime; below it, only to-many levels are
        if level.containing.is_none() || level.one_of_many {
            self.primes.push(id_column.to_string());
        }

        let mut values = Vec::new();
        let mut to_one = Vec::new();
        let mut to_many = Vec::new();

        for (prop, property) in structure.properties() {
            match property {
                Property::Column(column) => {
                    values.push((prop.to_string(), column.clone()));
                }
                Property::One(sub) => {
                    let child = self.structure(
                        sub,
                        Level {
                            one_of_many: false,
                            containing: Some(id_column),
                            own_prop: Some(prop),
                            chain: chain.clone(),
                        },
                    )?;
                    to_one.push((prop.to_string(), child.to_string()));
                }
                Property::Many(sub) => {
                    self.structure(
                        sub,
                        Level {
                            one_of_many: true,
                            containing: Some(id_column),
                            own_prop: Some(prop),
                            chain: chain.clone(),
                        },
                    )?;
                    to_many.push(prop.to_string());
                }
            }
        }

        let entry = &mut self.entries[id_column];
        entry.values = values;
        entry.to_one = to_one;
        entry.to_many = to_many;

        Ok(id_column)
    }
}
