#[path = "persistence/scenarios.rs"]
mod scenarios;

#[cfg(test)]
mod collection {
    use quickbase_engine::persistence::{Column, CollectionError, Record, RecordCollection};

    fn _create_collection(records: Vec<(u32, u64, &str, &str)>) -> RecordCollection {
        let mut collection = RecordCollection::new();
        for (id, value, name, description) in records {
            collection.add(Record::new(id, value, name, description));
        }
        collection
    }

    fn _people() -> RecordCollection {
        _create_collection(vec![
            (1, 100, "Alice", "First"),
            (2, 200, "Bob", "Second"),
            (3, 300, "Charlie", "Third"),
        ])
    }

    #[test]
    fn collection_starts_empty() {
        let collection = RecordCollection::new();

        assert_eq!(collection.size(), 0);
        assert!(collection.is_empty());
        assert!(collection.try_get(0).is_none());
        assert_eq!(collection.find_by_column(Column::Id, "0").unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn collection_rejects_duplicate_id() {
        let mut collection = RecordCollection::new();

        assert!(collection.add(Record::new(1, 100, "Alice", "First")));
        assert!(!collection.add(Record::new(1, 200, "Bob", "Duplicate")));

        assert_eq!(collection.size(), 1);
        assert_eq!(
            collection.get_record(0).unwrap(),
            &Record::new(1, 100, "Alice", "First")
        );
    }

    #[test]
    fn collection_duplicate_after_delete_is_accepted() {
        let mut collection = _people();

        assert!(collection.delete_by_id(2));
        assert!(collection.add(Record::new(2, 999, "Bobby", "Again")));
        assert_eq!(collection.size(), 3);
        assert_eq!(collection.find_by_column(Column::Id, "2").unwrap(), vec![2]);
    }

    #[test]
    fn collection_find_by_id_and_name() {
        let collection = _people();

        assert_eq!(collection.find_by_column(Column::Id, "2").unwrap(), vec![1]);
        assert_eq!(collection.find_by_column(Column::Name, "Alice").unwrap(), vec![0]);
        assert!(
            collection
                .find_by_column(Column::Description, "Nonexistent")
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn collection_find_by_value_returns_storage_order() {
        let collection = _create_collection(vec![(1, 100, "Alice", "First"), (2, 100, "Bob", "Second")]);

        assert_eq!(collection.find_by_column(Column::Value, "100").unwrap(), vec![0, 1]);
        assert!(collection.find_by_column(Column::Value, "101").unwrap().is_empty());
    }

    #[test]
    fn collection_find_by_text_is_exact() {
        let collection = _people();

        assert!(collection.find_by_column(Column::Name, "alice").unwrap().is_empty());
        assert!(collection.find_by_column(Column::Name, "Alice ").unwrap().is_empty());
        assert_eq!(collection.find_by_column(Column::Description, "Third").unwrap(), vec![2]);
    }

    #[test]
    fn collection_invalid_id_is_an_error() {
        let collection = _people();

        let result = collection.find_by_column(Column::Id, "abc");
        assert!(matches!(result, Err(CollectionError::InvalidId { ref input, .. }) if input == "abc"));
    }

    #[test]
    fn collection_invalid_value_is_an_error() {
        let collection = _people();

        let result = collection.find_by_column(Column::Value, "abc");
        assert!(matches!(result, Err(CollectionError::InvalidValue { ref input, .. }) if input == "abc"));
    }

    #[test]
    fn collection_out_of_width_numbers_are_errors() {
        let collection = _people();

        assert!(collection.find_by_column(Column::Id, "4294967296").is_err());
        assert!(collection.find_by_column(Column::Id, "-1").is_err());
        assert!(collection.find_by_column(Column::Value, "18446744073709551616").is_err());
        assert!(collection.find_by_column(Column::Value, "").is_err());
    }

    #[test]
    #[should_panic(expected = "InvalidId")]
    fn collection_invalid_id_unwrap_panics() {
        let collection = _people();
        collection.find_by_column(Column::Id, "abc").unwrap();
    }

    #[test]
    fn collection_delete_swaps_last_into_place() {
        let mut collection = _people();

        assert!(collection.delete_by_id(1));
        assert_eq!(collection.size(), 2);
        assert_eq!(collection.get_record(0).unwrap().id, 3);
        assert_eq!(collection.get_record(1).unwrap().id, 2);
        assert!(collection.find_by_column(Column::Id, "1").unwrap().is_empty());
        assert_eq!(collection.find_by_column(Column::Id, "3").unwrap(), vec![0]);
    }

    #[test]
    fn collection_delete_last_record() {
        let mut collection = _people();

        assert!(collection.delete_by_id(3));
        assert_eq!(collection.size(), 2);
        assert_eq!(collection.get_record(0).unwrap().id, 1);
        assert_eq!(collection.get_record(1).unwrap().id, 2);
        assert!(collection.find_by_column(Column::Id, "3").unwrap().is_empty());
    }

    #[test]
    fn collection_delete_missing_id_is_noop() {
        let mut collection = _people();

        assert!(!collection.delete_by_id(42));
        assert_eq!(collection.size(), 3);

        assert!(collection.delete_by_id(2));
        assert!(!collection.delete_by_id(2));
        assert_eq!(collection.size(), 2);
    }

    #[test]
    fn collection_find_indices_with_predicate() {
        let collection = _create_collection(vec![
            (1, 100, "Alice", "First"),
            (2, 200, "Bob", "Second"),
            (3, 100, "Charlie", "Third"),
        ]);

        assert_eq!(collection.find_indices(|record| record.value == 100), vec![0, 2]);
        assert!(collection.find_indices(|record| record.value == 7).is_empty());
    }

    #[test]
    fn collection_find_returns_copies_in_storage_order() {
        let mut collection = _people();

        let found = collection.find(|record| record.id >= 2);
        let ids: Vec<u32> = found.iter().map(|record| record.id).collect();
        assert_eq!(ids, vec![2, 3]);

        collection.delete_by_id(2);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0], Record::new(2, 200, "Bob", "Second"));
    }

    #[test]
    fn collection_try_get_matches_get_record() {
        let mut collection = _people();
        collection.delete_by_id(1);

        for position in 0..5 {
            match collection.try_get(position) {
                Some(record) => {
                    assert!(position < collection.size());
                    assert_eq!(collection.get_record(position).unwrap(), record);
                }
                None => {
                    assert!(position >= collection.size());
                    assert_eq!(
                        collection.get_record(position),
                        Err(CollectionError::OutOfRange {
                            position,
                            size: collection.size()
                        })
                    );
                }
            }
        }
    }

    #[test]
    fn collection_mutable_access_keeps_id() {
        let mut collection = _people();

        {
            let mut record = collection.get_record_mut(1).unwrap();
            assert_eq!(record.id(), 2);
            record.set_value(250);
            record.set_name("Robert");
            record.set_description("Renamed");
        }

        assert_eq!(collection.find_by_column(Column::Name, "Robert").unwrap(), vec![1]);
        assert_eq!(collection.find_by_column(Column::Value, "250").unwrap(), vec![1]);
        assert_eq!(collection.find_by_column(Column::Id, "2").unwrap(), vec![1]);

        assert!(collection.try_get_mut(3).is_none());
        assert!(collection.get_record_mut(3).is_err());
    }

    #[test]
    fn collection_lookup_helpers() {
        let mut collection = _people();

        assert!(collection.contains_id(3));
        assert_eq!(collection.position_of(3), Some(2));

        collection.delete_by_id(1);
        assert!(!collection.contains_id(1));
        assert_eq!(collection.position_of(3), Some(0));
        assert_eq!(collection.position_of(1), None);

        let ids: Vec<u32> = collection.iter().map(|record| record.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn collection_display_lists_records() {
        let collection = _people();
        let shown = collection.to_string();

        assert!(shown.starts_with("id | value | name | description"));
        assert!(shown.contains("2 | 200 | Bob | Second"));
    }
}
