use crate::value::Value;
use crate::{Error, Result};

use indexmap::IndexMap;

static NULL: Value = Value::Null;

/// A single result row: an insertion-ordered mapping from column name to
/// scalar cell.
///
/// Column order is semantic: when no mapping is supplied, the first row's
/// column order drives property discovery and fixes each level's identity
/// property.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Row {
    cells: IndexMap<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, cell: impl Into<Value>) {
        self.cells.insert(column.into(), cell.into());
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.cells.get(column)
    }

    /// Reads a cell; a column absent from the row reads as null.
    pub fn cell(&self, column: &str) -> &Value {
        self.cells.get(column).unwrap_or(&NULL)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(|column| &column[..])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.cells.iter().map(|(column, cell)| (&column[..], cell))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Checks the row against the table contract: string (non-numeric)
    /// column names, scalar-or-null cells.
    pub(crate) fn validate(&self) -> Result<()> {
        for (column, cell) in self.iter() {
            if !column.is_empty() && column.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::invalid_argument(format!(
                    "column name `{column}` must not be numeric"
                )));
            }
            if !cell.is_scalar() {
                return Err(Error::invalid_argument(format!(
                    "column `{column}` holds a non-scalar cell"
                )));
            }
        }
        Ok(())
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// A materialized result set: either a single row or an ordered list of rows.
///
/// A single row is treated as a one-row table whose result keeps the singular
/// shape. All rows of a table are expected to share one column set.
#[derive(Debug, Clone, PartialEq)]
pub enum Table {
    Row(Row),
    Rows(Vec<Row>),
}

impl Table {
    /// The table contents as an ordered slice of rows.
    pub fn rows(&self) -> &[Row] {
        match self {
            Self::Row(row) => std::slice::from_ref(row),
            Self::Rows(rows) => &rows[..],
        }
    }

    pub fn len(&self) -> usize {
        self.rows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }

    pub fn first(&self) -> Option<&Row> {
        self.rows().first()
    }

    /// True when the table was supplied as a row list.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::Rows(_))
    }
}

impl From<Row> for Table {
    fn from(src: Row) -> Self {
        Self::Row(src)
    }
}

impl From<Vec<Row>> for Table {
    fn from(src: Vec<Row>) -> Self {
        Self::Rows(src)
    }
}
