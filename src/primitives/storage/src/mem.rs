use std::collections::BTreeMap;

use crate::store::{KeyValueStore, KvIter, StoreError};

/// In-memory reference store for tests and demos.
///
/// `BTreeMap` iteration order is exactly the ascending lexical key order the
/// scan contract requires.
#[derive(Debug, Default)]
pub struct MemoryStore {
    kvs: BTreeMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.kvs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kvs.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.kvs.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.kvs.insert(key.to_owned(), value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.kvs.remove(key);
        Ok(())
    }

    fn scan_all(&self) -> Result<KvIter<'_>, StoreError> {
        Ok(Box::new(
            self.kvs.iter().map(|(k, v)| (k.clone(), v.clone())),
        ))
    }
}
