//! Named logger registry
//!
//! Loggers are obtained by name and shared: asking twice for `"svc.auth"`
//! returns the same instance, so handlers attached through one handle are
//! seen by every call site. The process-wide registry is created on first
//! use and lives for the rest of the process; its map is only locked while
//! a logger is looked up or created.

use super::handler::Handler;
use super::logger::Logger;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Name of the root logger
pub const ROOT_LOGGER_NAME: &str = "";

#[derive(Default)]
pub struct LoggerRegistry {
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
    default_handlers: RwLock<Vec<Arc<dyn Handler>>>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the logger named `name`, creating it on first use.
    ///
    /// New loggers start with the registry's default handlers attached.
    pub fn get(&self, name: &str) -> Arc<Logger> {
        let mut loggers = self.loggers.lock();
        if let Some(logger) = loggers.get(name) {
            return Arc::clone(logger);
        }
        let logger = Arc::new(Logger::new(name));
        for handler in self.default_handlers.read().iter() {
            logger.add_handler(Arc::clone(handler));
        }
        loggers.insert(name.to_string(), Arc::clone(&logger));
        logger
    }

    pub fn root(&self) -> Arc<Logger> {
        self.get(ROOT_LOGGER_NAME)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loggers.lock().contains_key(name)
    }

    /// Forget the logger named `name`. Existing handles keep working.
    pub fn remove(&self, name: &str) -> Option<Arc<Logger>> {
        self.loggers.lock().remove(name)
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.lock().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.loggers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.lock().is_empty()
    }

    /// Attach `handler` to every logger created from now on
    pub fn add_default_handler(&self, handler: Arc<dyn Handler>) {
        self.default_handlers.write().push(handler);
    }

    pub fn clear_default_handlers(&self) {
        self.default_handlers.write().clear();
    }
}

/// Process-wide logger registry
pub fn loggers() -> &'static LoggerRegistry {
    static REGISTRY: OnceLock<LoggerRegistry> = OnceLock::new();
    REGISTRY.get_or_init(LoggerRegistry::new)
}

/// Get or create a logger from the process-wide registry
pub fn logger(name: &str) -> Arc<Logger> {
    loggers().get(name)
}
