use crate::value::Value;

use indexmap::IndexMap;
use std::ops;

/// Index of a record in the [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct RecordId(usize);

/// Flat storage for every record built during one fold.
///
/// Parents hold [`RecordId`]s rather than owning their children, so a record
/// linked into several containers is still mutated in one place and every
/// holder observes the update.
#[derive(Debug, Default)]
pub(crate) struct Arena {
    records: Vec<FoldRecord>,
}

impl Arena {
    pub(crate) fn alloc(&mut self) -> RecordId {
        let id = RecordId(self.records.len());
        self.records.push(FoldRecord::default());
        id
    }
}

impl ops::Index<RecordId> for Arena {
    type Output = FoldRecord;

    fn index(&self, id: RecordId) -> &FoldRecord {
        &self.records[id.0]
    }
}

impl ops::IndexMut<RecordId> for Arena {
    fn index_mut(&mut self, id: RecordId) -> &mut FoldRecord {
        &mut self.records[id.0]
    }
}

/// A record under construction: insertion-ordered property slots.
#[derive(Debug, Default)]
pub(crate) struct FoldRecord {
    slots: IndexMap<String, Slot>,
}

/// State of one property during the fold.
#[derive(Debug)]
pub(crate) enum Slot {
    /// Scalar copied from a row cell.
    Value(Value),

    /// To-one relation; `None` until (unless) a child links in.
    One(Option<RecordId>),

    /// To-many relation, in first-seen order.
    Many(Vec<RecordId>),
}

impl FoldRecord {
    pub(crate) fn set(&mut self, prop: &str, slot: Slot) {
        self.slots.insert(prop.to_string(), slot);
    }

    /// Assigns a to-one relation.
    pub(crate) fn link_one(&mut self, prop: &str, id: RecordId) {
        self.slots.insert(prop.to_string(), Slot::One(Some(id)));
    }

    /// Appends to a to-many relation.
    ///
    /// # Panics
    ///
    /// Panics if `prop` is not a to-many slot; the meta builder guarantees
    /// every to-many property is pre-initialized to an empty list.
    pub(crate) fn link_many(&mut self, prop: &str, id: RecordId) {
        match self.slots.get_mut(prop) {
            Some(Slot::Many(items)) => items.push(id),
            slot => panic!("property `{prop}` is not a to-many slot; slot={slot:#?}"),
        }
    }

    pub(crate) fn slots(&self) -> impl Iterator<Item = (&str, &Slot)> {
        self.slots.iter().map(|(prop, slot)| (&prop[..], slot))
    }
}
