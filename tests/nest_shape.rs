use rownest::mapping::Structure;
use rownest::{nest, row, Mapping, MappingArg, ResultShape, Value};

// ---------------------------------------------------------------------------
// Attribute-object materialization
// ---------------------------------------------------------------------------

#[test]
fn object_shape_single_record() {
    let table = row! { "col1" => "1", "col2" => "2", "col3" => "3" };
    let mapping = Mapping::record(
        Structure::new()
            .column("col1", "col1")
            .column("col2", "col2")
            .column("col3", "col3"),
    );

    let nested = nest(Some(table.into()), ResultShape::Object, mapping).unwrap();

    let object = nested.expect_record().expect_object();
    assert_eq!(object.count(), 3);
    assert!(object.has_attr("col1"));
    assert_eq!(object.attr("col1"), Some(&Value::from("1")));
}

#[test]
fn object_shape_list_with_nested_to_many() {
    let table = vec![
        row! { "_col1" => "1a", "_sub__col1" => "sub 1a", "_sub__col2" => "sub 2a" },
        row! { "_col1" => "1a", "_sub__col1" => "sub 1b", "_sub__col2" => "sub 2b" },
        row! { "_col1" => "1b", "_sub__col1" => "sub 1a", "_sub__col2" => "sub 2a" },
    ];

    let nested = nest(Some(table.into()), ResultShape::Object, MappingArg::Infer).unwrap();

    let list = nested.expect_list();
    assert_eq!(list.len(), 2);

    let first = list[0].expect_record().expect_object();
    assert_eq!(first.attr("col1"), Some(&Value::from("1a")));

    let sub = first.attr("sub").unwrap().expect_list();
    assert_eq!(sub.len(), 2);
    assert_eq!(
        sub[1].expect_record().expect_object().attr("col2"),
        Some(&Value::from("sub 2b"))
    );
}

// ---------------------------------------------------------------------------
// The shape is a materialization strategy only
// ---------------------------------------------------------------------------

#[test]
fn shapes_agree_on_structure() {
    let table = vec![
        row! { "col1" => "a", "sub__col1" => "x" },
        row! { "col1" => "a", "sub__col1" => "y" },
    ];

    let as_map = nest(
        Some(table.clone().into()),
        ResultShape::Map,
        MappingArg::Infer,
    )
    .unwrap();
    let as_object = nest(Some(table.into()), ResultShape::Object, MappingArg::Infer).unwrap();

    // both shapes serialize to the identical tree
    assert_eq!(
        serde_json::to_value(&as_map).unwrap(),
        serde_json::to_value(&as_object).unwrap()
    );
}
