use std::sync::Arc;

use ap_storage::MemoryStore;
use parking_lot::RwLock;

use crate::context::Context;
use crate::error::LedgerError;
use crate::registry::{expect_args, Registry};

fn test_context() -> Context {
    Context::new(Arc::new(RwLock::new(MemoryStore::new())))
}

#[test]
fn registry_dispatches_by_name() {
    let registry = Registry::builder()
        .register("Ping", Box::new(|_ctx: &Context, _args: &[String]| Ok(b"pong".to_vec())))
        .build()
        .unwrap();

    let ctx = test_context();
    assert!(registry.contains("Ping"));
    assert_eq!(registry.dispatch(&ctx, "Ping", &[]).unwrap(), b"pong");
}

#[test]
fn registry_rejects_unknown_operation() {
    let registry = Registry::builder().build().unwrap();
    let ctx = test_context();

    let err = registry.dispatch(&ctx, "Nope", &[]).unwrap_err();
    assert!(matches!(err, LedgerError::UnknownOperation { name } if name == "Nope"));
}

#[test]
fn registry_rejects_duplicate_names_at_startup() {
    let res = Registry::builder()
        .register("Ping", Box::new(|_ctx: &Context, _args: &[String]| Ok(Vec::new())))
        .register("Ping", Box::new(|_ctx: &Context, _args: &[String]| Ok(Vec::new())))
        .build();

    assert!(matches!(res, Err(LedgerError::Registry { .. })));
}

#[test]
fn registry_rejects_empty_name_at_startup() {
    let res = Registry::builder()
        .register("", Box::new(|_ctx: &Context, _args: &[String]| Ok(Vec::new())))
        .build();

    assert!(matches!(res, Err(LedgerError::Registry { .. })));
}

#[test]
fn registry_lists_operations_in_order() {
    let registry = Registry::builder()
        .register("B", Box::new(|_ctx: &Context, _args: &[String]| Ok(Vec::new())))
        .register("A", Box::new(|_ctx: &Context, _args: &[String]| Ok(Vec::new())))
        .build()
        .unwrap();

    let ops: Vec<_> = registry.operations().collect();
    assert_eq!(ops, vec!["A", "B"]);
}

#[test]
fn expect_args_checks_arity() {
    let args = vec!["a".to_string(), "b".to_string()];
    assert!(expect_args("Op", &args, 2).is_ok());

    let err = expect_args("Op", &args, 3).unwrap_err();
    assert!(matches!(
        err,
        LedgerError::BadArgumentCount {
            op: "Op",
            expected: 3,
            got: 2,
        }
    ));
}
