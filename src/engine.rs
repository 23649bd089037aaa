mod arena;
mod fold;
mod materialize;
mod meta;

use crate::mapping::Mapping;
use crate::record::ResultShape;
use crate::row::Row;
use crate::value::Value;
use crate::Result;

/// Compiles `mapping` and folds `rows` into a result tree.
///
/// The caller is expected to have resolved the empty-mapping policy already;
/// a mapping with an empty root level fails compilation here.
pub(crate) fn hydrate(rows: &[Row], mapping: &Mapping, shape: ResultShape) -> Result<Value> {
    let meta = meta::Meta::build(mapping)?;
    let (arena, root) = fold::Fold::new(&meta).run(rows);
    Ok(materialize::materialize(&root, &arena, shape))
}
