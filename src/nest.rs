use crate::engine;
use crate::mapping::Mapping;
use crate::record::ResultShape;
use crate::row::Table;
use crate::value::Value;
use crate::Result;

/// How the property mapping is supplied to [`nest`].
#[derive(Debug, Default, Clone, PartialEq)]
pub enum MappingArg {
    /// Derive the mapping from the first row's column names.
    #[default]
    Infer,

    /// Derive the mapping, but prefer an empty list over null when nothing
    /// is resolvable (no rows, or no properties).
    ListOnEmpty,

    /// Use the given mapping as-is.
    Explicit(Mapping),
}

impl From<Mapping> for MappingArg {
    fn from(src: Mapping) -> Self {
        Self::Explicit(src)
    }
}

impl From<Option<Mapping>> for MappingArg {
    fn from(src: Option<Mapping>) -> Self {
        match src {
            Some(mapping) => Self::Explicit(mapping),
            None => Self::Infer,
        }
    }
}

/// Folds a flat result table into a nested tree of records.
///
/// Rows are folded left to right: each level of the mapping deduplicates on
/// its identity column (the level's first property), repeated parent data
/// collapses into a single record, and to-many children accumulate in
/// first-seen order. A null table folds to null; a null identity cell leaves
/// the corresponding substructure null (or its list empty).
///
/// ```
/// use rownest::{nest, row, MappingArg, ResultShape, Value};
///
/// let table = vec![
///     row! { "col1" => "1a", "sub__col1" => "x" },
///     row! { "col1" => "1a", "sub__col1" => "y" },
/// ];
///
/// let nested = nest(Some(table.into()), ResultShape::Map, MappingArg::Infer).unwrap();
/// assert_eq!(nested["col1"], Value::from("1a"));
/// assert_eq!(nested["sub"][0]["col1"], Value::from("x"));
/// assert_eq!(nested["sub"][1]["col1"], Value::from("y"));
/// ```
pub fn nest(
    table: Option<Table>,
    shape: ResultShape,
    mapping: impl Into<MappingArg>,
) -> Result<Value> {
    let Some(table) = table else {
        return Ok(Value::Null);
    };

    let rows = table.rows();
    for row in rows {
        row.validate()?;
    }

    let (explicit, list_on_empty) = match mapping.into() {
        MappingArg::Explicit(mapping) => (Some(mapping), false),
        MappingArg::Infer => (None, false),
        MappingArg::ListOnEmpty => (None, true),
    };

    let mapping = match explicit {
        Some(mapping) => mapping,
        None => match rows.first() {
            Some(first) => Mapping::from_column_hints(first.columns()),
            // no rows to infer from
            None => {
                return Ok(if list_on_empty {
                    Value::List(Vec::new())
                } else {
                    Value::Null
                });
            }
        },
    };

    if mapping.is_empty() {
        // no properties to build a record from
        return Ok(match mapping {
            Mapping::List(_) => Value::List(Vec::new()),
            Mapping::Record(_) if list_on_empty => Value::List(Vec::new()),
            Mapping::Record(_) => Value::Null,
        });
    }

    engine::hydrate(rows, &mapping, shape)
}
