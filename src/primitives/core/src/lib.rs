#![deny(warnings)]
#![allow(missing_docs)]

pub mod context;
pub mod error;
pub mod module;
pub mod registry;

#[cfg(test)]
mod tests;

pub use context::Context;
pub use error::{LedgerError, Result};
pub use module::AppModule;
pub use registry::{expect_args, Handler, Registry, RegistryBuilder};
