/// Faults raised by the storage capability or the value encoding.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage backend fault: {msg}")]
    Backend { msg: String },
    #[error("value encoding fault")]
    Codec(#[from] serde_json::Error),
}

/// A finite, non-restartable scan over `(key, value)` pairs.
pub type KvIter<'a> = Box<dyn Iterator<Item = (String, Vec<u8>)> + 'a>;

/// The key-value capability the host ledger runtime supplies.
///
/// The host owns durability, ordering and cross-invocation isolation; this
/// trait is only the seam its state is reached through. `scan_all` must yield
/// the full visible keyspace in ascending lexical key order.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    fn delete(&mut self, key: &str) -> Result<(), StoreError>;

    fn scan_all(&self) -> Result<KvIter<'_>, StoreError>;
}
