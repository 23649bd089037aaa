use crate::mapping::{Mapping, Property, Structure};
use crate::nest::{nest, MappingArg};
use crate::record::ResultShape;
use crate::row::{Row, Table};
use crate::value::Value;
use crate::{Error, Result};

use serde_json::Value as Json;

/// Dynamic-input rendition of [`nest`] over JSON values.
///
/// The table may be `null`, an object (a single row), or an array of
/// objects; the mapping may be absent/`null` (infer from column names),
/// `true` (infer, but prefer an empty list over null when nothing is
/// resolvable), an object, or an array wrapping one object (list of root
/// records). Anything else is an invalid argument.
///
/// ```
/// use rownest::{nest_json, ResultShape};
/// use serde_json::json;
///
/// let table = json!([
///     { "id": "a", "kids__id": "x" },
///     { "id": "a", "kids__id": "y" },
/// ]);
///
/// let nested = nest_json(&table, ResultShape::Map, None).unwrap();
/// assert_eq!(nested, json!({ "id": "a", "kids": [{ "id": "x" }, { "id": "y" }] }));
/// ```
pub fn nest_json(table: &Json, shape: ResultShape, mapping: Option<&Json>) -> Result<Json> {
    let table = table_from_json(table)?;

    let mapping = match mapping {
        None | Some(Json::Null) => MappingArg::Infer,
        Some(Json::Bool(true)) => MappingArg::ListOnEmpty,
        Some(json) => MappingArg::Explicit(mapping_from_json(json, table.as_ref())?),
    };

    let nested = nest(table, shape, mapping)?;
    serde_json::to_value(&nested).map_err(Error::from)
}

fn table_from_json(json: &Json) -> Result<Option<Table>> {
    match json {
        Json::Null => Ok(None),
        Json::Object(_) => Ok(Some(Table::Row(row_from_json(json)?))),
        Json::Array(items) => {
            let rows = items
                .iter()
                .map(row_from_json)
                .collect::<Result<Vec<Row>>>()?;
            Ok(Some(Table::Rows(rows)))
        }
        _ => Err(Error::invalid_argument(
            "table must be null, a record, or a list of records",
        )),
    }
}

fn row_from_json(json: &Json) -> Result<Row> {
    let Json::Object(cells) = json else {
        return Err(Error::invalid_argument(
            "every table row must be a record of column name to scalar",
        ));
    };

    let mut row = Row::new();
    for (column, cell) in cells {
        row.insert(column.clone(), cell_from_json(column, cell)?);
    }
    Ok(row)
}

fn cell_from_json(column: &str, json: &Json) -> Result<Value> {
    match json {
        Json::Null => Ok(Value::Null),
        Json::Bool(value) => Ok(Value::Bool(*value)),
        Json::Number(value) => match value.as_i64() {
            Some(value) => Ok(Value::I64(value)),
            None => match value.as_f64() {
                Some(value) => Ok(Value::F64(value)),
                None => Err(Error::invalid_argument(format!(
                    "column `{column}` holds an unrepresentable number"
                ))),
            },
        },
        Json::String(value) => Ok(Value::String(value.clone())),
        Json::Object(_) | Json::Array(_) => Err(Error::invalid_argument(format!(
            "column `{column}` holds a non-scalar cell"
        ))),
    }
}

fn mapping_from_json(json: &Json, table: Option<&Table>) -> Result<Mapping> {
    match json {
        Json::Object(_) => Ok(Mapping::Record(structure_from_json(json)?)),
        Json::Array(items) => match &items[..] {
            // an empty mapping's list-ness follows the table's own shape
            [] => Ok(match table {
                Some(table) if table.is_list() => Mapping::List(Structure::new()),
                _ => Mapping::Record(Structure::new()),
            }),
            [item] => Ok(Mapping::List(structure_from_json(item)?)),
            _ => Err(Error::invalid_argument(
                "a list mapping must wrap exactly one structure",
            )),
        },
        _ => Err(Error::invalid_argument(
            "property mapping must be a structure, a list, or true",
        )),
    }
}

fn structure_from_json(json: &Json) -> Result<Structure> {
    let Json::Object(props) = json else {
        return Err(Error::invalid_argument(
            "a mapping structure must be a record of property declarations",
        ));
    };

    let mut structure = Structure::new();
    for (prop, decl) in props {
        let property = match decl {
            Json::String(column) => Property::Column(column.clone()),
            Json::Object(_) => Property::One(structure_from_json(decl)?),
            Json::Array(items) => match &items[..] {
                [item] => Property::Many(structure_from_json(item)?),
                _ => {
                    return Err(Error::invalid_argument(format!(
                        "to-many property `{prop}` must wrap exactly one structure"
                    )));
                }
            },
            _ => {
                return Err(Error::invalid_argument(format!(
                    "property `{prop}` must map to a column name or a nested structure"
                )));
            }
        };
        structure.insert(prop.clone(), property);
    }
    Ok(structure)
}
