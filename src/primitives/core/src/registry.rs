use std::collections::BTreeMap;

use crate::context::Context;
use crate::error::{LedgerError, Result};

/// An externally invocable operation. Arguments arrive as the positional
/// strings the host passed along; the response is the serialized payload
/// handed back to the host.
pub type Handler = Box<dyn Fn(&Context, &[String]) -> Result<Vec<u8>> + Send + Sync>;

/// Name-to-handler table for everything the host may invoke.
///
/// Built once at startup through [`RegistryBuilder`]; dispatch is a plain
/// lookup with no fallback route.
pub struct Registry {
    routes: BTreeMap<&'static str, Handler>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn dispatch(&self, ctx: &Context, op: &str, args: &[String]) -> Result<Vec<u8>> {
        let handler = self
            .routes
            .get(op)
            .ok_or_else(|| LedgerError::UnknownOperation {
                name: op.to_string(),
            })?;
        handler(ctx, args)
    }

    pub fn contains(&self, op: &str) -> bool {
        self.routes.contains_key(op)
    }

    pub fn operations(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.routes.keys().copied()
    }
}

/// Collects `(name, handler)` pairs and validates the whole set before any
/// dispatch can happen.
#[derive(Default)]
pub struct RegistryBuilder {
    entries: Vec<(&'static str, Handler)>,
}

impl RegistryBuilder {
    pub fn register(mut self, name: &'static str, handler: Handler) -> Self {
        self.entries.push((name, handler));
        self
    }

    pub fn build(self) -> Result<Registry> {
        let mut routes: BTreeMap<&'static str, Handler> = BTreeMap::new();
        for (name, handler) in self.entries {
            if name.is_empty() {
                return Err(LedgerError::Registry {
                    msg: "empty operation name".to_string(),
                });
            }
            if routes.insert(name, handler).is_some() {
                return Err(LedgerError::Registry {
                    msg: format!("duplicate operation name: {name}"),
                });
            }
        }
        Ok(Registry { routes })
    }
}

/// Arity check shared by handlers before they touch any state.
pub fn expect_args(op: &'static str, args: &[String], expected: usize) -> Result<()> {
    if args.len() != expected {
        return Err(LedgerError::BadArgumentCount {
            op,
            expected,
            got: args.len(),
        });
    }
    Ok(())
}
