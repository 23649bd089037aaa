/// Builds a [`Row`](crate::Row) from `column => cell` pairs.
///
/// ```
/// use rownest::row;
///
/// let row = row! { "id" => 1, "name" => "first" };
/// assert_eq!(row.len(), 2);
/// ```
#[macro_export]
macro_rules! row {
    () => { $crate::Row::new() };
    ( $( $column:expr => $cell:expr ),+ $(,)? ) => {{
        let mut row = $crate::Row::new();
        $( row.insert($column, $cell); )+
        row
    }};
}
