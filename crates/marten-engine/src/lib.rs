//! # Marten Engine Contract
//!
//! Adapter contract between the Marten test harness and a JavaScript
//! engine. The harness never touches engine internals: scripts, suites,
//! test functions and property keys all travel through the opaque
//! [`ScriptEngine::Value`] handle, and every operation the harness needs
//! is a method on [`ScriptEngine`].
//!
//! The engine owns a single execution context per run. The context is
//! shared and cumulative: later [`ScriptEngine::execute`] calls see
//! bindings established by earlier ones.

#![warn(clippy::all)]

mod error;

pub use error::{EngineError, EngineResult, LoadError, ThrownError};

/// A named piece of script source.
///
/// Supplied by the host in load order and consumed exactly once; the name
/// is used for diagnostics when loading fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub name: String,
    pub source: String,
}

impl SourceUnit {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }
}

/// Capabilities the test harness requires from a scripting engine.
///
/// Implementations must enumerate properties in stable insertion order;
/// the harness preserves that order verbatim into its logs and reports,
/// so an engine with incidental ordering would make runs irreproducible.
pub trait ScriptEngine {
    /// Opaque handle to an engine value.
    type Value: Clone;

    /// Compile and run source text in the shared context.
    fn execute(&mut self, source: &str, label: &str) -> Result<Self::Value, LoadError>;

    /// Look up a value by dotted global path, e.g. `marten.internal.testSuites`.
    fn resolve(&mut self, path: &str) -> Result<Self::Value, EngineError>;

    /// Call a function value. A script exception is captured and returned
    /// as [`ThrownError`], never raised as a host failure. `receiver` of
    /// `None` means the global object.
    fn invoke(
        &mut self,
        function: &Self::Value,
        args: &[Self::Value],
        receiver: Option<&Self::Value>,
    ) -> Result<Self::Value, ThrownError>;

    /// Own enumerable property keys of an object, in insertion order.
    fn property_names(&mut self, object: &Self::Value) -> Result<Vec<Self::Value>, EngineError>;

    /// Read a property off an object by key value.
    fn get_property(
        &mut self,
        object: &Self::Value,
        key: &Self::Value,
    ) -> Result<Self::Value, EngineError>;

    /// Elements of an array value, in index order.
    fn elements(&mut self, array: &Self::Value) -> Result<Vec<Self::Value>, EngineError>;

    /// Whether a value can be invoked.
    fn is_callable(&self, value: &Self::Value) -> bool;

    /// Engine-side string conversion.
    fn display_string(&mut self, value: &Self::Value) -> String;

    /// Return and clear console-style output captured since the previous
    /// drain. The harness drains once per test to attribute output.
    fn drain_console(&mut self) -> String;
}
