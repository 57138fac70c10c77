use std::sync::Arc;

use ap_storage::KeyValueStore;

pub use parking_lot::RwLock;

/// Per-invocation view of the host-supplied state.
///
/// Each operation takes a single read or write guard for its whole
/// read-check-write sequence, so the unit the host must isolate is one
/// lock scope. The lock itself is not a substitute for host-side
/// atomicity across invocations.
#[derive(Clone)]
pub struct Context {
    pub state: Arc<RwLock<dyn KeyValueStore>>,
}

impl Context {
    pub fn new(state: Arc<RwLock<dyn KeyValueStore>>) -> Self {
        Context { state }
    }
}
