use serde::{de::DeserializeOwned, Serialize};

use crate::store::StoreError;

/// Stateless serialization strategy for stored values.
///
/// Passed explicitly wherever records are encoded or decoded; implementations
/// hold no shared mutable state.
pub trait RecordCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, StoreError>;

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, StoreError>;
}

/// JSON encoding with the stable persisted field names.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonCodec;

impl RecordCodec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, StoreError> {
        Ok(serde_json::to_vec(value)?)
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, StoreError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
