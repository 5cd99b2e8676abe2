//! Caller-owned, name-keyed registry. Asking twice for the same name hands back the first
//! facade instead of stacking a second pair of sinks onto it.

use crate::facade::{Facade, FacadeBuilder};
use crate::{Error, internal};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Whether [`Registry::get_or_build`] created a facade or returned one it already held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attach {
    Created,
    Existing,
}

/// Owned by the caller rather than the process, so name reuse is an explicit choice.
#[derive(Debug, Default)]
pub struct Registry {
    facades: Mutex<HashMap<String, Arc<Facade>>>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `builder` first; then returns the facade already registered under the
    /// resolved name, or builds and registers a new one. An existing facade keeps its
    /// original level and sinks.
    ///
    /// # Errors
    /// Validation errors from the builder (even when the name is already registered),
    /// or [`Error::Io`] when a new facade cannot open its file.
    pub fn get_or_build(&self, builder: FacadeBuilder) -> Result<(Arc<Facade>, Attach), Error> {
        let config = builder.validate()?;
        let mut facades = self.facades.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(existing) = facades.get(&config.name) {
            internal::debug(
                "REGISTRY",
                &format!("Reusing logger {} without new sinks", config.name),
            );
            return Ok((Arc::clone(existing), Attach::Existing));
        }

        let name = config.name.clone();
        let facade = Arc::new(builder.build()?);
        facades.insert(name.clone(), Arc::clone(&facade));
        internal::debug("REGISTRY", &format!("Registered logger {name}"));
        Ok((facade, Attach::Created))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<Facade>> {
        self.facades
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Unregisters `name`. The facade closes once the last `Arc` is dropped.
    pub fn remove(&self, name: &str) -> Option<Arc<Facade>> {
        self.facades
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.facades
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flushes and closes every registered facade and empties the registry.
    ///
    /// # Errors
    /// First I/O error; all facades are still shut down.
    pub fn shutdown_all(&self) -> Result<(), Error> {
        let drained: Vec<Arc<Facade>> = self
            .facades
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain()
            .map(|(_, facade)| facade)
            .collect();

        let mut first_err = None;
        for facade in drained {
            if let Err(e) = facade.shutdown() {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}
