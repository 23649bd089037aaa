use super::arena::{Arena, RecordId, Slot};
use super::meta::Meta;
use crate::row::Row;
use crate::value::Value;

use std::collections::{HashMap, HashSet};

/// Cache-key form of an identity cell.
///
/// Floats key by bit pattern; identity columns are expected to carry
/// directly comparable scalars.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum IdKey {
    Bool(bool),
    Int(i64),
    Float(u64),
    Str(String),
}

impl IdKey {
    /// `None` for null: a null identity builds nothing at its level.
    fn from_cell(cell: &Value) -> Option<IdKey> {
        match cell {
            Value::Bool(v) => Some(IdKey::Bool(*v)),
            Value::I64(v) => Some(IdKey::Int(*v)),
            Value::F64(v) => Some(IdKey::Float(v.to_bits())),
            Value::String(v) => Some(IdKey::Str(v.clone())),
            Value::Null | Value::Record(_) | Value::List(_) => None,
        }
    }
}

/// Where the root of the result tree accumulates.
#[derive(Debug)]
pub(crate) enum RootSlot {
    One(Option<RecordId>),
    Many(Vec<RecordId>),
}

/// Single left-to-right pass that folds a row table into an arena of linked
/// records.
///
/// All state is scoped to one invocation: the identity caches and the
/// linked-pair set live exactly as long as the fold.
pub(crate) struct Fold<'m> {
    meta: &'m Meta,
    arena: Arena,

    /// Per identity column: identity value to the record already built for it.
    caches: HashMap<&'m str, HashMap<IdKey, RecordId>>,

    /// (identity column, own id, containing id) triples already linked into a
    /// container; guarantees at-most-once insertion.
    linked: HashSet<(&'m str, IdKey, Option<IdKey>)>,

    root: RootSlot,
}

impl<'m> Fold<'m> {
    pub(crate) fn new(meta: &'m Meta) -> Fold<'m> {
        let root = if meta.root_is_list {
            RootSlot::Many(Vec::new())
        } else {
            RootSlot::One(None)
        };

        Fold {
            meta,
            arena: Arena::default(),
            caches: HashMap::new(),
            linked: HashSet::new(),
            root,
        }
    }

    pub(crate) fn run(mut self, rows: &[Row]) -> (Arena, RootSlot) {
        let meta = self.meta;
        let mut prev: Option<&Row> = None;

        for row in rows {
            match prev {
                None => {
                    for prime in &meta.primes {
                        self.build(row, prime);
                    }
                }
                Some(last) => {
                    // Only identity columns whose value (or whose ancestor
                    // identity) changed can start or re-link a record for
                    // this row; everything else was handled identically on a
                    // previous row. Pure optimization: the caches and the
                    // linked-pair set already make reprocessing a no-op.
                    let diff: HashSet<&str> = row
                        .iter()
                        .filter(|(column, cell)| last.cell(column) != *cell)
                        .map(|(column, _)| column)
                        .collect();

                    for prime in &meta.primes {
                        let chain = &meta.entry(prime).chain;
                        if chain.iter().any(|column| diff.contains(column.as_str())) {
                            self.build(row, prime);
                        }
                    }
                }
            }
            prev = Some(row);
        }

        (self.arena, self.root)
    }

    /// Attempts to build (or re-link) the record identified by `id_column`
    /// for this row.
    fn build(&mut self, row: &Row, id_column: &'m str) {
        let meta = self.meta;
        let entry = meta.entry(id_column);

        let Some(id) = IdKey::from_cell(row.cell(id_column)) else {
            // null identity: absent substructure
            return;
        };

        let cached = self
            .caches
            .get(id_column)
            .and_then(|cache| cache.get(&id))
            .copied();

        let record = match cached {
            Some(record) => record,
            None => {
                let record = self.arena.alloc();

                // cache before filling so to-one children can link back in
                self.caches
                    .entry(id_column)
                    .or_default()
                    .insert(id.clone(), record);

                for (prop, column) in &entry.values {
                    self.arena[record].set(prop, Slot::Value(row.cell(column).clone()));
                }
                for prop in &entry.to_many {
                    self.arena[record].set(prop, Slot::Many(Vec::new()));
                }
                for (prop, _) in &entry.to_one {
                    self.arena[record].set(prop, Slot::One(None));
                }

                // to-one children are populated before the record is first
                // exposed to its own container
                for (_, child_column) in &entry.to_one {
                    self.build(row, child_column);
                }

                record
            }
        };

        let Some(containing_column) = &entry.containing else {
            if cached.is_none() {
                // fresh root record; a cached one was already placed
                match &mut self.root {
                    RootSlot::One(slot) => *slot = Some(record),
                    RootSlot::Many(list) => list.push(record),
                }
            }
            return;
        };

        let containing_id = IdKey::from_cell(row.cell(containing_column));
        let key = (id_column, id, containing_id);
        if cached.is_some() && self.linked.contains(&key) {
            // already placed in this container
            return;
        }

        if let (Some(own_prop), Some(containing_id)) = (&entry.own_prop, &key.2) {
            let container = self
                .caches
                .get(containing_column.as_str())
                .and_then(|cache| cache.get(containing_id))
                .copied();

            // a null or unbuilt container leaves the record cached but
            // unlinked for this row
            if let Some(container) = container {
                if entry.one_of_many {
                    self.arena[container].link_many(own_prop, record);
                } else {
                    self.arena[container].link_one(own_prop, record);
                }
            }
        }

        self.linked.insert(key);
    }
}
