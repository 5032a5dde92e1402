//! Evaluation Context

use crate::PluginRegistry;
use std::sync::Arc;

/// Fractional digits used when a converted magnitude is rendered for display
pub const DEFAULT_DISPLAY_PRECISION: usize = 12;

/// Evaluation context passed to plugins
pub struct EvalContext {
    pub precision: usize,
    pub registry: Arc<PluginRegistry>,
}

impl EvalContext {
    pub fn new(registry: Arc<PluginRegistry>) -> Self {
        Self {
            precision: DEFAULT_DISPLAY_PRECISION,
            registry,
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}
