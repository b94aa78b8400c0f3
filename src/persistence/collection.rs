use std::fmt::Display;

use super::column::Column;
use super::error::CollectionError;
use super::index::PrimaryKeyIndex;
use super::record::{Record, RecordMut};

/// A dense, in-memory collection of [`Record`]s with a primary key index.
///
/// Records live in a single contiguous vector. The index maps each `id` to
/// the record's current position in that vector and is kept exact after
/// every public call.
///
/// Deletion moves the last record into the vacated slot, so storage order
/// only reflects insertion order until the first delete.
///
/// # Positions
/// Positions returned by [`RecordCollection::find_by_column`] and
/// [`RecordCollection::find_indices`] are plain indices into the storage at
/// the time of the call. Any [`RecordCollection::add`] or
/// [`RecordCollection::delete_by_id`] may move or remove the record behind a
/// position, so they must not be held across mutations.
///
/// # Threading
/// There is no internal locking. Share an instance behind a lock of your own
/// (an `Arc<RwLock<RecordCollection>>` for example).
pub struct RecordCollection {
    records: Vec<Record>,
    index: PrimaryKeyIndex,
}

impl RecordCollection {
    pub fn new() -> RecordCollection {
        RecordCollection {
            records: Vec::new(),
            index: PrimaryKeyIndex::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> RecordCollection {
        RecordCollection {
            records: Vec::with_capacity(capacity),
            index: PrimaryKeyIndex::with_capacity(capacity),
        }
    }

    pub fn add(&mut self, record: Record) -> bool {
        //! Append a record unless its `id` is already present.
        //!
        //! Returns `false` and leaves the collection untouched on a duplicate
        //! key. The first record stored under an id wins.

        if self.index.contains(record.id) {
            return false;
        }

        self.index.insert(record.id, self.records.len());
        self.records.push(record);
        true
    }

    pub fn delete_by_id(&mut self, id: u32) -> bool {
        //! Remove the record with the given `id` in constant time.
        //!
        //! The last record is moved into the removed record's slot and its
        //! index entry re-pointed. Returns `false` if no such id exists.

        let Some(position) = self.index.get(id) else {
            return false;
        };

        self.records.swap_remove(position);
        if let Some(moved) = self.records.get(position) {
            self.index.relocate(moved.id, position);
        }
        self.index.remove(id);

        true
    }

    pub fn find_by_column(&self, column: Column, value: &str) -> Result<Vec<usize>, CollectionError> {
        //! Find the positions of all records whose `column` equals `value`.
        //!
        //! `value` is given as text. For [`Column::Id`] and [`Column::Value`]
        //! it is parsed first and a malformed number is an error, not an empty
        //! result. Positions come back in storage order.

        let positions = match column {
            Column::Id => {
                let id = value.parse::<u32>().map_err(|source| CollectionError::InvalidId {
                    input: value.to_string(),
                    source,
                })?;
                self.index.get(id).into_iter().collect()
            }
            Column::Value => {
                let wanted = value.parse::<u64>().map_err(|source| CollectionError::InvalidValue {
                    input: value.to_string(),
                    source,
                })?;
                self.find_indices(|record| record.value == wanted)
            }
            Column::Name => self.find_indices(|record| record.name == value),
            Column::Description => self.find_indices(|record| record.description == value),
        };

        Ok(positions)
    }

    pub fn find<P>(&self, predicate: P) -> Vec<Record>
    where
        P: Fn(&Record) -> bool,
    {
        //! Clone every record matching `predicate`, in storage order.

        self.records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    pub fn find_indices<P>(&self, predicate: P) -> Vec<usize>
    where
        P: Fn(&Record) -> bool,
    {
        //! Positions of every record matching `predicate`, in storage order.

        self.records
            .iter()
            .enumerate()
            .filter_map(|(position, record)| predicate(record).then_some(position))
            .collect()
    }

    pub fn get_record(&self, position: usize) -> Result<&Record, CollectionError> {
        //! Get the record at `position`.
        //!
        //! An out of range position is a caller bug and comes back as
        //! [`CollectionError::OutOfRange`]. Use [`RecordCollection::try_get`]
        //! when a missing position is an expected outcome.

        self.records.get(position).ok_or(CollectionError::OutOfRange {
            position,
            size: self.records.len(),
        })
    }

    pub fn get_record_mut(&mut self, position: usize) -> Result<RecordMut<'_>, CollectionError> {
        let size = self.records.len();
        self.records
            .get_mut(position)
            .map(RecordMut::new)
            .ok_or(CollectionError::OutOfRange { position, size })
    }

    pub fn try_get(&self, position: usize) -> Option<&Record> {
        self.records.get(position)
    }

    pub fn try_get_mut(&mut self, position: usize) -> Option<RecordMut<'_>> {
        self.records.get_mut(position).map(RecordMut::new)
    }

    pub fn size(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains_id(&self, id: u32) -> bool {
        self.index.contains(id)
    }

    pub fn position_of(&self, id: u32) -> Option<usize> {
        self.index.get(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        //! Iterate over the records in storage order.

        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl Default for RecordCollection {
    fn default() -> Self {
        RecordCollection::new()
    }
}

impl Display for RecordCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let header = Column::ALL.map(|column| column.to_string()).join(" | ");
        let rows: Vec<String> = self.records.iter().map(|record| record.to_string()).collect();

        writeln!(f, "{}\n{}", header, rows.join("\n"))
    }
}
