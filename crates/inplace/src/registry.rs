//! Case-insensitive handler registry.

use std::collections::HashMap;
use std::fmt;

use crate::Handler;

/// Maps lowercased token names to handlers.
///
/// Names are lowercased on registration and on lookup, so `"P1"` and `"p1"`
/// resolve to the same entry. Registering an existing name replaces the
/// previous handler. There is no removal.
pub struct HandlerRegistry<N, C = ()> {
    handlers: HashMap<String, Box<dyn Handler<N, C>>>,
}

impl<N, C> HandlerRegistry<N, C> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register `handler` under `name`, replacing any previous entry.
    pub fn register<H>(&mut self, name: &str, handler: H)
    where
        H: Handler<N, C> + 'static,
    {
        let key = name.to_lowercase();
        if self.handlers.insert(key, Box::new(handler)).is_some() {
            tracing::debug!(name, "Replaced existing handler");
        }
    }

    /// Look up the handler for `name`, ignoring case.
    pub fn resolve(&mut self, name: &str) -> Option<&mut (dyn Handler<N, C> + 'static)> {
        self.handlers
            .get_mut(&name.to_lowercase())
            .map(AsMut::as_mut)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(&name.to_lowercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered (lowercased) names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<N, C> Default for HandlerRegistry<N, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, C> fmt::Debug for HandlerRegistry<N, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("names", &self.names())
            .finish()
    }
}
