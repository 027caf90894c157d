use std::sync::{Arc, Mutex};

/// Owns the lazily created summarization backend handle.
///
/// The handle is built from the injected factory on first use and shared
/// until [`EngineCache::clear`] resets it; the next call recreates it. The
/// mutex makes concurrent first-creation well-defined: only one handle is
/// ever built per generation.
pub struct EngineCache<E> {
    factory: Box<dyn Fn() -> E + Send + Sync>,
    handle: Mutex<Option<Arc<E>>>,
}

impl<E> EngineCache<E> {
    pub fn new(factory: impl Fn() -> E + Send + Sync + 'static) -> Self {
        Self {
            factory: Box::new(factory),
            handle: Mutex::new(None),
        }
    }

    pub fn get_or_create(&self) -> Arc<E> {
        let mut handle = self.handle.lock().expect("engine cache lock poisoned");
        match handle.as_ref() {
            Some(engine) => Arc::clone(engine),
            None => {
                tracing::info!("Initializing summarization backend");
                let engine = Arc::new((self.factory)());
                *handle = Some(Arc::clone(&engine));
                engine
            }
        }
    }

    /// Drops the cached handle; the next `get_or_create` rebuilds it.
    pub fn clear(&self) {
        self.handle
            .lock()
            .expect("engine cache lock poisoned")
            .take();
        tracing::info!("Summarization backend cache cleared");
    }

    pub fn is_loaded(&self) -> bool {
        self.handle
            .lock()
            .expect("engine cache lock poisoned")
            .is_some()
    }
}
