//! Function registry keyed by canonical name.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use strsim::levenshtein;
use tracing::debug;

use crate::dispatch::RegistryError;
use crate::generators::{BUILTINS, GenerateError, GeneratorInput};

/// A registered handler.
pub type Handler = Arc<dyn Fn(&GeneratorInput<'_>) -> Result<String, GenerateError> + Send + Sync>;

/// Maps canonical function names to handlers.
///
/// Lookups take a shared read lock and registration takes the write lock, so
/// the registry may be shared across threads and extended while in use.
pub struct FunctionRegistry {
    handlers: RwLock<HashMap<String, Handler>>,
}

impl FunctionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Create a registry holding the built-in generators.
    pub fn with_builtins() -> Self {
        let handlers = BUILTINS
            .into_iter()
            .map(|(name, generator)| (name.to_string(), Arc::new(generator) as Handler))
            .collect();
        Self {
            handlers: RwLock::new(handlers),
        }
    }

    /// Install a handler under `name`, replacing any existing one.
    ///
    /// The name is trimmed first and must not be empty.
    pub fn register<F>(&self, name: &str, handler: F) -> Result<(), RegistryError>
    where
        F: Fn(&GeneratorInput<'_>) -> Result<String, GenerateError> + Send + Sync + 'static,
    {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }

        let previous = self
            .handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), Arc::new(handler));
        if previous.is_some() {
            debug!(function = name, "replaced registered handler");
        }
        Ok(())
    }

    /// Look up the handler for a canonical name.
    pub fn get(&self, name: &str) -> Option<Handler> {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// All registered names, sorted.
    pub fn function_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// Registered names close to `name`, nearest first, at most three.
    ///
    /// Short names allow one edit, longer names two.
    pub fn suggestions(&self, name: &str) -> Vec<String> {
        let max_distance = if name.len() <= 3 { 1 } else { 2 };
        let mut suggestions: Vec<(usize, String)> = self
            .function_names()
            .into_iter()
            .filter_map(|candidate| {
                let distance = levenshtein(name, &candidate);
                (distance > 0 && distance <= max_distance).then_some((distance, candidate))
            })
            .collect();

        suggestions.sort_by_key(|(distance, _)| *distance);
        suggestions.into_iter().take(3).map(|(_, name)| name).collect()
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("functions", &self.function_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_find_near_misses() {
        let registry = FunctionRegistry::with_builtins();
        assert_eq!(
            registry.suggestions("Fenix_TodayShiftDays"),
            vec!["Fenix_TodayShiftDay".to_string()]
        );
        assert!(registry.suggestions("Other_Function").is_empty());
    }
}
