use super::arena::{Arena, RecordId, Slot};
use super::fold::RootSlot;
use crate::record::{Container, Record, ResultShape};
use crate::value::Value;

/// Resolves the arena into an owned result tree, rooted at `root`.
///
/// Records are written exclusively through the [`Container`] capability; the
/// shape only selects which container is constructed. A record linked into
/// several containers materializes as a structurally equal clone at each
/// link site.
pub(crate) fn materialize(root: &RootSlot, arena: &Arena, shape: ResultShape) -> Value {
    match root {
        RootSlot::One(None) => Value::Null,
        RootSlot::One(Some(id)) => record(*id, arena, shape),
        RootSlot::Many(ids) => Value::List(ids.iter().map(|id| record(*id, arena, shape)).collect()),
    }
}

fn record(id: RecordId, arena: &Arena, shape: ResultShape) -> Value {
    let mut out = Record::new(shape);

    for (prop, slot) in arena[id].slots() {
        let value = match slot {
            Slot::Value(value) => value.clone(),
            Slot::One(None) => Value::Null,
            Slot::One(Some(child)) => record(*child, arena, shape),
            Slot::Many(children) => Value::List(
                children
                    .iter()
                    .map(|child| record(*child, arena, shape))
                    .collect(),
            ),
        };
        out.set(prop, value);
    }

    Value::Record(out)
}
