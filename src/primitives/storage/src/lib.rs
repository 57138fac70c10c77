#![deny(warnings)]
#![allow(missing_docs)]

mod codec;
mod mem;
mod store;

#[cfg(test)]
mod tests;

pub use codec::{JsonCodec, RecordCodec};
pub use mem::MemoryStore;
pub use store::{KeyValueStore, KvIter, StoreError};

pub use serde::{de::DeserializeOwned, Serialize};
