//! PageKit - pure computations behind a page's converter and signup form
//!
//! The engine owns a registry of function plugins and dispatches calls to
//! them by name. The pure Rust APIs of the unit and form crates are
//! re-exported for callers that do not need dynamic dispatch.

use pagekit_plugin::{EvalContext, PluginRegistry};
use std::sync::Arc;
use tracing::{debug, warn};

pub use pagekit_core::{codes, PageError, Severity, Value};
pub use pagekit_forms as forms;
pub use pagekit_units as units;

/// Registry with every unit and form function loaded
pub fn standard_registry() -> PluginRegistry {
    let registry = PluginRegistry::new();
    let registry = pagekit_units::load_units_library(registry);
    pagekit_forms::load_forms_library(registry)
}

/// Main PageKit engine
pub struct PageKit {
    registry: Arc<PluginRegistry>,
    default_precision: usize,
}

impl PageKit {
    pub fn new(registry: PluginRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            default_precision: pagekit_units::DISPLAY_DIGITS,
        }
    }

    pub fn with_standard_library() -> Self {
        Self::new(standard_registry())
    }

    /// Fractional digits used by `convert_fixed` when none are given
    ///
    /// Capped at `MAX_FIXED_DIGITS`.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.default_precision = precision.min(pagekit_units::MAX_FIXED_DIGITS);
        self
    }

    /// Call a registered function by name
    pub fn call(&self, name: &str, args: &[Value]) -> Value {
        debug!(function = name, args = args.len(), "call");

        let ctx = EvalContext::new(self.registry.clone())
            .with_precision(self.default_precision);
        let result = self.registry.call_function(name, args, &ctx);

        if result.is_error() {
            match result.as_error() {
                Some(e) if e.code == codes::UNDEFINED_FUNC => {
                    warn!(function = name, "unknown function");
                }
                Some(e) => debug!(function = name, code = %e.code, "call returned error"),
                None => {}
            }
        }
        result
    }

    pub fn help(&self, name: Option<&str>) -> Value {
        self.registry.help(name)
    }

    pub fn list_functions(&self, category: Option<&str>) -> Value {
        self.registry.list_functions(category)
    }

    pub fn function_names(&self) -> Vec<&str> {
        self.registry.function_names()
    }
}

impl Default for PageKit {
    fn default() -> Self {
        Self::with_standard_library()
    }
}

/// Build an argument list: `args![100.0, "cm", "meter"]`
#[macro_export]
macro_rules! args {
    () => { Vec::<$crate::Value>::new() };
    ($($value:expr),+ $(,)?) => {
        vec![$($crate::Value::from($value)),+]
    };
}
