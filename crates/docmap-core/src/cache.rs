//! Per-process mapping cache.
//!
//! Compiling is pure, so a model's mapping only ever needs building once.
//! Failures are not cached; the next call compiles again.

use crate::{compile::Compiler, error::MappingError, mapping::Mapping, traits::Model};
use std::{
    any::TypeId,
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};
use tracing::debug;

///
/// MappingCache
///

#[derive(Debug, Default)]
pub struct MappingCache {
    compiler: Compiler,
    entries: RwLock<HashMap<TypeId, Arc<Mapping>>>,
}

impl MappingCache {
    #[must_use]
    pub fn new(compiler: Compiler) -> Self {
        Self {
            compiler,
            entries: RwLock::new(HashMap::new()),
        }
    }

    #[must_use]
    pub const fn compiler(&self) -> &Compiler {
        &self.compiler
    }

    /// Return the cached mapping for `M`, compiling it on first use.
    pub fn get_or_compile<M: Model>(&self) -> Result<Arc<Mapping>, MappingError> {
        let key = TypeId::of::<M>();

        if let Some(mapping) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Ok(Arc::clone(mapping));
        }

        // compile outside the lock; a racing writer produces an equal value
        let compiled = Arc::new(self.compiler.compile::<M>()?);

        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let mapping = entries.entry(key).or_insert_with(|| {
            debug!(model = M::NAME, "cached mapping");
            compiled
        });

        Ok(Arc::clone(mapping))
    }

    #[must_use]
    pub fn contains<M: Model>(&self) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&TypeId::of::<M>())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
