use quickbase_engine::persistence::{Column, Record, RecordCollection};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn _assert_every_position_indexed(collection: &RecordCollection) {
    for (position, record) in collection.iter().enumerate() {
        assert_eq!(
            collection
                .find_by_column(Column::Id, &record.id.to_string())
                .unwrap(),
            vec![position],
            "id {} is not indexed at position {}",
            record.id,
            position
        );
    }
}

#[test]
fn scenario_alice_bob_charlie() {
    let mut collection = RecordCollection::new();
    collection.add(Record::new(1, 100, "Alice", "First"));
    collection.add(Record::new(2, 200, "Bob", "Second"));
    collection.add(Record::new(3, 300, "Charlie", "Third"));

    assert_eq!(collection.find_by_column(Column::Name, "Alice").unwrap(), vec![0]);

    assert!(collection.delete_by_id(1));
    assert_eq!(
        collection.get_record(0).unwrap(),
        &Record::new(3, 300, "Charlie", "Third")
    );
    assert!(collection.find_by_column(Column::Id, "1").unwrap().is_empty());
    assert_eq!(collection.size(), 2);
}

#[test]
fn scenario_shared_value() {
    let mut collection = RecordCollection::new();
    collection.add(Record::new(1, 100, "Alice", "First"));
    collection.add(Record::new(2, 100, "Bob", "Second"));

    assert_eq!(collection.find_by_column(Column::Value, "100").unwrap(), vec![0, 1]);
}

#[test]
fn swap_delete_only_moves_the_last_record() {
    let mut collection = RecordCollection::new();
    for id in 0..10u32 {
        collection.add(Record::new(id, id as u64, format!("Name{}", id), "Desc"));
    }

    let before: Vec<u32> = collection.iter().map(|record| record.id).collect();
    assert!(collection.delete_by_id(4));
    let after: Vec<u32> = collection.iter().map(|record| record.id).collect();

    assert_eq!(after.len(), before.len() - 1);
    assert_eq!(after[4], 9);
    for position in (0..after.len()).filter(|position| *position != 4) {
        assert_eq!(after[position], before[position]);
    }
}

#[test]
fn random_operations_keep_index_consistent() {
    let mut collection = RecordCollection::new();
    let mut live: Vec<u32> = Vec::new();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..2_000 {
        let id: u32 = rng.gen_range(0..200);

        if rng.gen_range(0..3) == 0 {
            let deleted = collection.delete_by_id(id);
            assert_eq!(deleted, live.contains(&id));
            if deleted {
                live.retain(|live_id| *live_id != id);
                assert!(collection.find_by_column(Column::Id, &id.to_string()).unwrap().is_empty());
            }
        } else {
            let size_before = collection.size();
            let added = collection.add(Record::new(id, id as u64 % 5, format!("Name{}", id), "Desc"));
            assert_eq!(added, !live.contains(&id));
            if added {
                live.push(id);
                assert_eq!(collection.size(), size_before + 1);
            } else {
                assert_eq!(collection.size(), size_before);
            }
        }

        assert_eq!(collection.size(), live.len());
    }

    _assert_every_position_indexed(&collection);

    let mut stored: Vec<u32> = collection.iter().map(|record| record.id).collect();
    stored.sort_unstable();
    live.sort_unstable();
    assert_eq!(stored, live);
}

#[test]
fn drain_by_deleting_every_id() {
    let mut collection = RecordCollection::with_capacity(100);
    for id in 0..100u32 {
        collection.add(Record::new(id, 0, "Name", "Desc"));
    }

    for id in (0..100u32).rev().step_by(2).chain((0..100u32).step_by(2)) {
        assert!(collection.delete_by_id(id));
        _assert_every_position_indexed(&collection);
    }

    assert!(collection.is_empty());
    assert!(collection.find_by_column(Column::Value, "0").unwrap().is_empty());
}
