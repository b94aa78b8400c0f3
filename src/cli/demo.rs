//! A scripted walkthrough of the collection's operations.
//!
//! Each step builds its own collection, runs a handful of operations and
//! checks the outcome. The steps are kept in an ordered registry so they
//! always print in the same order.

use indexmap::IndexMap;
use log::warn;

use crate::persistence::{Column, CollectionError, Record, RecordCollection};

type DemoStep = fn() -> Result<String, String>;

fn _check(condition: bool, failure: &str) -> Result<(), String> {
    if condition {
        Ok(())
    } else {
        Err(failure.to_string())
    }
}

fn _people() -> RecordCollection {
    let mut collection = RecordCollection::new();
    collection.add(Record::new(1, 100, "Alice", "First"));
    collection.add(Record::new(2, 200, "Bob", "Second"));
    collection.add(Record::new(3, 300, "Charlie", "Third"));
    collection
}

fn duplicate_id() -> Result<String, String> {
    let mut collection = RecordCollection::new();

    let first = collection.add(Record::new(1, 100, "Alice", "First"));
    let second = collection.add(Record::new(1, 200, "Bob", "Duplicate"));

    _check(first && !second, "a duplicate id was accepted")?;
    _check(collection.size() == 1, "the duplicate changed the size")?;

    Ok("second add with id 1 was rejected; size stays 1".to_string())
}

fn add_and_find() -> Result<String, String> {
    let collection = _people();

    let by_id = collection
        .find_by_column(Column::Id, "2")
        .map_err(|error| error.to_string())?;
    _check(by_id == vec![1], "id 2 is not at position 1")?;

    let by_name = collection
        .find_by_column(Column::Name, "Alice")
        .map_err(|error| error.to_string())?;
    _check(by_name == vec![0], "Alice is not at position 0")?;

    let missing = collection
        .find_by_column(Column::Description, "Nonexistent")
        .map_err(|error| error.to_string())?;
    _check(missing.is_empty(), "a missing description matched")?;

    Ok("id 2 -> [1], name Alice -> [0], unknown description -> []".to_string())
}

fn delete() -> Result<String, String> {
    let mut collection = _people();

    _check(collection.delete_by_id(1), "id 1 was not deleted")?;
    let moved = collection.get_record(0).map_err(|error| error.to_string())?;
    _check(moved.id == 3, "the last record did not move into position 0")?;

    let gone = collection
        .find_by_column(Column::Id, "1")
        .map_err(|error| error.to_string())?;
    _check(gone.is_empty(), "id 1 can still be found")?;
    _check(!collection.delete_by_id(42), "a missing id was deleted")?;
    _check(collection.size() == 2, "size is not 2 after one delete")?;

    Ok("deleted id 1; id 3 moved to position 0; deleting id 42 is a no-op".to_string())
}

fn try_get() -> Result<String, String> {
    let collection = _people();

    _check(
        collection.try_get(0).map(|record| record.id) == Some(1),
        "position 0 does not hold id 1",
    )?;
    _check(collection.try_get(10).is_none(), "position 10 returned a record")?;
    _check(
        collection.get_record(10)
            == Err(CollectionError::OutOfRange {
                position: 10,
                size: 3,
            }),
        "get_record(10) did not report out of range",
    )?;

    Ok("try_get(0) -> id 1, try_get(10) -> none, get_record(10) -> error".to_string())
}

fn find_indices() -> Result<String, String> {
    let mut collection = RecordCollection::new();
    collection.add(Record::new(1, 100, "Alice", "First"));
    collection.add(Record::new(2, 200, "Bob", "Second"));
    collection.add(Record::new(3, 100, "Charlie", "Third"));

    let positions = collection.find_indices(|record| record.value == 100);
    _check(positions == vec![0, 2], "value 100 is not at positions 0 and 2")?;

    Ok("value == 100 -> [0, 2]".to_string())
}

fn find_predicate() -> Result<String, String> {
    let collection = _people();

    let ids: Vec<u32> = collection
        .find(|record| record.id >= 2)
        .iter()
        .map(|record| record.id)
        .collect();
    _check(ids == vec![2, 3], "id >= 2 did not return ids 2 and 3")?;

    Ok("id >= 2 -> ids [2, 3]".to_string())
}

fn column_edge_cases() -> Result<String, String> {
    let mut collection = RecordCollection::new();
    collection.add(Record::new(1, 100, "Alice", "First"));
    collection.add(Record::new(2, 100, "Bob", "Second"));

    let shared = collection
        .find_by_column(Column::Value, "100")
        .map_err(|error| error.to_string())?;
    _check(shared == vec![0, 1], "value 100 did not match both records")?;

    let invalid = collection.find_by_column(Column::Id, "abc");
    _check(
        matches!(invalid, Err(CollectionError::InvalidId { .. })),
        "a malformed id did not fail",
    )?;

    Ok(format!(
        "value 100 -> [0, 1]; id 'abc' -> {}",
        invalid.err().map(|error| error.to_string()).unwrap_or_default()
    ))
}

pub fn steps() -> IndexMap<&'static str, DemoStep> {
    let mut steps: IndexMap<&'static str, DemoStep> = IndexMap::new();
    steps.insert("duplicate id", duplicate_id);
    steps.insert("add and find", add_and_find);
    steps.insert("delete", delete);
    steps.insert("try get", try_get);
    steps.insert("find indices", find_indices);
    steps.insert("find predicate", find_predicate);
    steps.insert("column edge cases", column_edge_cases);
    steps
}

pub fn run() -> Vec<(&'static str, Result<String, String>)> {
    //! Run every step, in order, and collect the outcomes.

    steps()
        .into_iter()
        .map(|(name, step)| {
            let outcome = step();
            if let Err(failure) = outcome.as_ref() {
                warn!("demo step '{}' failed: {}", name, failure);
            }
            (name, outcome)
        })
        .collect()
}
