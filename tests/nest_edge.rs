use rownest::mapping::Structure;
use rownest::{nest, row, MappingArg, Mapping, ResultShape, Row, Value};

// ---------------------------------------------------------------------------
// Null table
// ---------------------------------------------------------------------------

#[test]
fn null_table_folds_to_null() {
    assert_eq!(
        nest(None, ResultShape::Map, MappingArg::Infer).unwrap(),
        Value::Null
    );
    assert_eq!(
        nest(None, ResultShape::Map, MappingArg::ListOnEmpty).unwrap(),
        Value::Null
    );
    assert_eq!(
        nest(
            None,
            ResultShape::Object,
            Mapping::record(Structure::new().column("id", "id")),
        )
        .unwrap(),
        Value::Null
    );
}

// ---------------------------------------------------------------------------
// Empty table
// ---------------------------------------------------------------------------

#[test]
fn empty_table_without_mapping_folds_to_null() {
    let table: Vec<Row> = Vec::new();
    let nested = nest(Some(table.into()), ResultShape::Map, MappingArg::Infer).unwrap();
    assert_eq!(nested, Value::Null);
}

#[test]
fn empty_table_with_list_on_empty_folds_to_empty_list() {
    let table: Vec<Row> = Vec::new();
    let nested = nest(Some(table.into()), ResultShape::Map, MappingArg::ListOnEmpty).unwrap();
    assert_eq!(nested, Value::List(vec![]));
}

#[test]
fn empty_table_with_list_mapping_folds_to_empty_list() {
    let table: Vec<Row> = Vec::new();
    let mapping = Mapping::list(Structure::new().column("col1", "col1"));
    let nested = nest(Some(table.into()), ResultShape::Map, mapping).unwrap();
    assert_eq!(nested, Value::List(vec![]));
}

#[test]
fn empty_table_with_record_mapping_folds_to_null() {
    let table: Vec<Row> = Vec::new();
    let mapping = Mapping::record(Structure::new().column("col1", "col1"));
    let nested = nest(Some(table.into()), ResultShape::Map, mapping).unwrap();
    assert_eq!(nested, Value::Null);
}

// ---------------------------------------------------------------------------
// Empty mapping
// ---------------------------------------------------------------------------

#[test]
fn empty_record_mapping_folds_to_null() {
    let table = row! { "col1" => "1", "col2" => "2" };
    let mapping = Mapping::record(Structure::new());
    let nested = nest(Some(table.into()), ResultShape::Map, mapping).unwrap();
    assert_eq!(nested, Value::Null);
}

#[test]
fn empty_list_mapping_folds_to_empty_list() {
    let table = vec![row! { "col1" => "1", "col2" => "2" }];
    let mapping = Mapping::list(Structure::new());
    let nested = nest(Some(table.into()), ResultShape::Map, mapping).unwrap();
    assert_eq!(nested, Value::List(vec![]));
}

// ---------------------------------------------------------------------------
// Invalid arguments
// ---------------------------------------------------------------------------

#[test]
fn numeric_column_name_is_invalid() {
    let table = row! { "0" => "1" };
    let err = nest(Some(table.into()), ResultShape::Map, MappingArg::Infer).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn non_scalar_cell_is_invalid() {
    let mut bad = Row::new();
    bad.insert("col1", Value::List(vec![Value::I64(1)]));
    let err = nest(Some(bad.into()), ResultShape::Map, MappingArg::Infer).unwrap_err();
    assert!(err.is_invalid_argument());
}

// ---------------------------------------------------------------------------
// Invalid mappings
// ---------------------------------------------------------------------------

#[test]
fn empty_nested_structure_is_invalid() {
    let table = row! { "col1" => "1" };
    let mapping = Mapping::record(
        Structure::new()
            .column("col1", "col1")
            .many("sub", Structure::new()),
    );
    let err = nest(Some(table.into()), ResultShape::Map, mapping).unwrap_err();
    assert!(err.is_invalid_mapping());
}

#[test]
fn nested_first_property_is_invalid() {
    let table = row! { "col1" => "1" };
    let mapping = Mapping::record(
        Structure::new()
            .one("sub", Structure::new().column("col1", "sub_col1"))
            .column("col1", "col1"),
    );
    let err = nest(Some(table.into()), ResultShape::Map, mapping).unwrap_err();
    assert!(err.is_invalid_mapping());
}

#[test]
fn duplicate_identity_column_is_invalid() {
    let table = row! { "col1" => "1" };
    let mapping = Mapping::record(
        Structure::new()
            .column("col1", "col1")
            .one("sub", Structure::new().column("col1", "col1")),
    );
    let err = nest(Some(table.into()), ResultShape::Map, mapping).unwrap_err();
    assert!(err.is_invalid_mapping());
}

// ---------------------------------------------------------------------------
// Missing columns read as null
// ---------------------------------------------------------------------------

#[test]
fn mapping_over_absent_column_yields_null_property() {
    let table = row! { "col1" => "1" };
    let mapping = Mapping::record(
        Structure::new()
            .column("col1", "col1")
            .column("col2", "no_such_column"),
    );

    let nested = nest(Some(table.into()), ResultShape::Map, mapping).unwrap();

    assert_eq!(nested["col2"], Value::Null);
}
