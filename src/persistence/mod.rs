//! The in-memory record store is made of the following components
//! - Record (the stored value, keyed by a unique `id`)
//! - Column (closed set of searchable attributes of a record)
//! - PrimaryKeyIndex (id to storage position, kept exact under swap-delete)
//! - RecordCollection (owns the records and the index, single-threaded)
//!

//  All modules of this lib
mod collection;
mod column;
mod error;
mod index;
mod record;

//  External API
pub use collection::RecordCollection;
pub use column::Column;
pub use error::CollectionError;
pub use record::{Record, RecordMut};
