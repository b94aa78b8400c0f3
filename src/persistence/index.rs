use std::collections::HashMap;

/// Maps a primary key to the current position of its record in the
/// [`super::RecordCollection`] storage.
///
/// The index knows nothing about the records themselves. Keeping it in step
/// with the storage is the collection's job.
pub(crate) struct PrimaryKeyIndex {
    key_position_map: HashMap<u32, usize>,
}

impl PrimaryKeyIndex {
    pub fn new() -> PrimaryKeyIndex {
        PrimaryKeyIndex {
            key_position_map: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> PrimaryKeyIndex {
        PrimaryKeyIndex {
            key_position_map: HashMap::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, key: u32, position: usize) {
        self.key_position_map.insert(key, position);
    }

    pub fn get(&self, key: u32) -> Option<usize> {
        self.key_position_map.get(&key).copied()
    }

    pub fn contains(&self, key: u32) -> bool {
        self.key_position_map.contains_key(&key)
    }

    pub fn remove(&mut self, key: u32) -> Option<usize> {
        self.key_position_map.remove(&key)
    }

    pub fn relocate(&mut self, key: u32, position: usize) {
        //! Point an already indexed key at its new position after the
        //! record was moved into a vacated slot.

        if let Some(current) = self.key_position_map.get_mut(&key) {
            *current = position;
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.key_position_map.len()
    }

    #[cfg(test)]
    pub fn entries(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.key_position_map.iter().map(|(key, position)| (*key, *position))
    }
}
