use crate::registry::RegistryBuilder;

/// The seam between the app shell and a module crate.
///
/// A module names itself and contributes its externally invocable operations
/// to the registry under construction.
pub trait AppModule {
    /// Returns the module's name.
    fn name(&self) -> &'static str;

    /// Registers every operation the module exposes.
    fn register_invocations(&self, builder: RegistryBuilder) -> RegistryBuilder;
}
