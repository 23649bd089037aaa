use super::{Mapping, Property, Structure};

/// Path separator recognized by column-hint inference.
const SEPARATOR: char = '_';

impl Mapping {
    /// Derives a mapping from column names alone.
    ///
    /// Each column name splits on `_` into path segments; the last segment is
    /// the leaf property, the rest name nested records. A doubled separator
    /// (`sub__col`) enters a to-many list instead of a named record, and a
    /// leading separator (`_col`) makes the whole result a list of root
    /// records. Property discovery order follows column order, which fixes
    /// each level's identity property.
    ///
    /// ```
    /// use rownest::mapping::Mapping;
    ///
    /// let mapping = Mapping::from_column_hints(["id", "name", "addr_city", "addr_zip"]);
    /// assert!(!mapping.is_list());
    /// assert_eq!(mapping.structure().identity(), Some(("id", "id")));
    /// ```
    pub fn from_column_hints<'a, I>(columns: I) -> Mapping
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut root = Structure::new();
        let mut list = false;

        for column in columns {
            let mut segments: Vec<&str> = column.split(SEPARATOR).collect();
            let leaf = segments.pop().expect("split yields at least one segment");

            let mut nav = &segments[..];
            if let Some((&"", _)) = nav.split_first() {
                // leading separator lifts the whole result into a list
                list = true;
                while let Some((&"", tail)) = nav.split_first() {
                    nav = tail;
                }
            }

            descend(&mut root, nav).insert(leaf, Property::Column(column.to_string()));
        }

        if list {
            Mapping::List(root)
        } else {
            Mapping::Record(root)
        }
    }
}

/// Walks `nav` from `structure`, creating nested levels as needed, and
/// returns the level the leaf property lands in.
fn descend<'s>(structure: &'s mut Structure, nav: &[&str]) -> &'s mut Structure {
    let Some((head, rest)) = nav.split_first() else {
        return structure;
    };

    // a doubled separator after a name means the named relation is to-many;
    // consecutive doublings collapse into one list step
    let mut rest = rest;
    let mut many = false;
    while let Some((&"", tail)) = rest.split_first() {
        many = true;
        rest = tail;
    }

    // the relation kind is fixed by the first column that creates it; a name
    // previously claimed as a scalar is promoted to a relation
    if !matches!(
        structure.get(head),
        Some(Property::One(_) | Property::Many(_))
    ) {
        let child = Structure::new();
        let property = if many {
            Property::Many(child)
        } else {
            Property::One(child)
        };
        structure.insert(*head, property);
    }

    match structure.get_mut(head) {
        Some(Property::One(child) | Property::Many(child)) => descend(child, rest),
        _ => unreachable!("relation was just inserted"),
    }
}
