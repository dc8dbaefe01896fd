use crate::framework::{BuilderError, Director, StagedBuilder};
use crate::model::Car;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, warn};

/// A staged builder that several threads can drive.
///
/// Builders do no internal locking. When one builder must be shared, this wrapper
/// puts it behind an `Arc<Mutex<_>>` and runs every access under the lock.
/// [`construct`](Self::construct) holds the lock for the whole director run plus the
/// finalize, so concurrent constructions never interleave their staging steps.
///
/// Cloning a `SharedBuilder` shares the same underlying builder.
///
/// # Errors
/// If a thread panics while holding the lock, the staged state may be half-written.
/// Every later access then returns [`BuilderError::Poisoned`].
pub struct SharedBuilder<B: StagedBuilder> {
    inner: Arc<Mutex<B>>,
    name: &'static str,
}

impl<B: StagedBuilder> SharedBuilder<B> {
    pub fn new(builder: B) -> Self {
        let name = builder.name();
        Self {
            inner: Arc::new(Mutex::new(builder)),
            name,
        }
    }

    /// Runs `f` with exclusive access to the builder.
    pub fn with<R>(&self, f: impl FnOnce(&mut B) -> R) -> Result<R, BuilderError> {
        let mut guard = self.lock()?;
        Ok(f(&mut guard))
    }

    /// Runs a [`Director`] over the builder and finalizes it, as one locked unit.
    pub fn construct(&self) -> Result<Car, BuilderError> {
        self.with(|builder| Director::new(builder).construct_product())
    }

    pub fn finalize(&self) -> Result<Car, BuilderError> {
        self.with(|builder| builder.finalize())
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn lock(&self) -> Result<MutexGuard<'_, B>, BuilderError> {
        debug!(builder = self.name, "Acquiring builder lock");
        self.inner.lock().map_err(|_| {
            warn!(builder = self.name, "Builder lock poisoned");
            BuilderError::Poisoned(self.name.to_string())
        })
    }
}

impl<B: StagedBuilder> Clone for SharedBuilder<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            name: self.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::SedanBuilder;
    use crate::framework::mock::{RecordingBuilder, Step};
    use crate::model::CarSpec;
    use std::thread;

    #[test]
    fn test_construct_from_many_threads() {
        let shared = SharedBuilder::new(SedanBuilder::new());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || shared.construct())
            })
            .collect();

        for handle in handles {
            let car = handle.join().unwrap().unwrap();
            assert_eq!(car, Car::assemble("V6", 4, "Black"));
        }
    }

    #[test]
    fn test_constructions_do_not_interleave() {
        let builder = RecordingBuilder::new(CarSpec::sports_car());
        let log = builder.call_log();
        let shared = SharedBuilder::new(builder);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || shared.construct().unwrap())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let calls = log.lock().unwrap().clone();
        assert_eq!(calls.len(), 8 * 4);
        for chunk in calls.chunks(4) {
            assert_eq!(chunk, [Step::Engine, Step::Wheels, Step::Color, Step::Finalize]);
        }
    }

    #[test]
    fn test_with_gives_exclusive_access() {
        let shared = SharedBuilder::new(SedanBuilder::new());

        shared.with(|builder| builder.build_engine()).unwrap();

        assert_eq!(shared.finalize().unwrap(), Car::assemble("V6", 0, ""));
        assert_eq!(shared.name(), "SedanBuilder");
    }

    #[test]
    fn test_poisoned_lock_is_reported() {
        let shared = SharedBuilder::new(RecordingBuilder::default().panic_on(Step::Wheels));

        let worker = shared.clone();
        let joined = thread::spawn(move || worker.construct()).join();
        assert!(joined.is_err());

        assert_eq!(
            shared.finalize(),
            Err(BuilderError::Poisoned("RecordingBuilder".to_string()))
        );
    }
}
