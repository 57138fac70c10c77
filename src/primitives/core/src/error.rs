use ap_storage::StoreError;

pub type Result<T> = core::result::Result<T, LedgerError>;

/// Faults an invocation can surface to the host.
///
/// Precondition failures carry the offending asset id so the host can embed
/// it in the reported fault. Every variant aborts the current operation;
/// nothing is retried at this layer.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("asset {id} already exists")]
    AlreadyExists { id: String },

    #[error("asset {id} does not exist")]
    NotFound { id: String },

    /// A stored value failed to decode. Fatal for the whole operation that
    /// encountered it, never skipped.
    #[error("stored value under key {key} is corrupted")]
    Corrupted {
        key: String,
        #[source]
        source: StoreError,
    },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("unknown operation {name}")]
    UnknownOperation { name: String },

    #[error("operation {op} expects {expected} arguments, got {got}")]
    BadArgumentCount {
        op: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("invalid operation registry: {msg}")]
    Registry { msg: String },
}
