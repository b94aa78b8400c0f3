//! quickbase_engine: an in-memory record collection.
//!
//! The [`persistence`] module is the engine itself. [`cli`] and
//! [`sessions`] are the command line driver built on top of it.
//!
//! ```
//! use quickbase_engine::persistence::{Column, Record, RecordCollection};
//!
//! let mut collection = RecordCollection::new();
//! assert!(collection.add(Record::new(1, 100, "Alice", "First")));
//! assert!(!collection.add(Record::new(1, 200, "Bob", "Duplicate")));
//!
//! assert_eq!(collection.find_by_column(Column::Name, "Alice").unwrap(), vec![0]);
//! assert!(collection.find_by_column(Column::Id, "abc").is_err());
//! ```

pub mod cli;
pub mod persistence;
pub mod sessions;
