//! Registry mapping template names to cast handlers.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::{CastContext, CastHandler};

/// Name-keyed handler table. Several handlers may share one template; they
/// run in binding order.
#[derive(Clone, Default)]
pub struct CastRegistry {
    handlers: HashMap<String, Vec<Arc<dyn CastHandler>>>,
}

impl CastRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, template: impl Into<String>, handler: Arc<dyn CastHandler>) {
        self.handlers.entry(template.into()).or_default().push(handler);
    }

    /// Removes every handler bound to `template`, returning how many there were.
    pub fn unbind(&mut self, template: &str) -> usize {
        self.handlers.remove(template).map_or(0, |h| h.len())
    }

    pub fn is_bound(&self, template: &str) -> bool {
        self.handlers.contains_key(template)
    }

    /// Invokes the handlers bound to the cast's template.
    ///
    /// Returns the number of handlers that ran.
    pub fn dispatch(&self, cast: &CastContext<'_>) -> usize {
        let Some(handlers) = self.handlers.get(cast.template) else {
            debug!(template = cast.template, "no handler bound to accepted shape");
            return 0;
        };
        for handler in handlers {
            handler.on_cast(cast);
        }
        handlers.len()
    }
}

impl std::fmt::Debug for CastRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CastRegistry")
            .field("templates", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}
