//! Builder utilities for configuring the Borůvka scheduler.
//!
//! Exposes the worker-count configuration surface and the validation
//! performed before constructing [`Boruvka`] instances.

use std::num::NonZeroUsize;

use crate::{Result, boruvka::Boruvka, error::BoruvkaError};

/// Default number of parallel search workers.
///
/// The worker count is fixed and independent of graph size; each worker
/// processes a contiguous slice of the current component list.
pub const DEFAULT_WORKERS: usize = 8;

/// Configures and constructs [`Boruvka`] instances.
///
/// # Examples
/// ```
/// use boruvka::BoruvkaBuilder;
///
/// let boruvka = BoruvkaBuilder::new()
///     .with_workers(4)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(boruvka.workers().get(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct BoruvkaBuilder {
    workers: usize,
}

impl Default for BoruvkaBuilder {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
        }
    }
}

impl BoruvkaBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use boruvka::BoruvkaBuilder;
    ///
    /// let builder = BoruvkaBuilder::new();
    /// assert_eq!(builder.workers(), 8);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of parallel search workers.
    ///
    /// # Examples
    /// ```
    /// use boruvka::BoruvkaBuilder;
    ///
    /// let builder = BoruvkaBuilder::new().with_workers(2);
    /// assert_eq!(builder.workers(), 2);
    /// ```
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Returns the currently configured worker count.
    #[must_use]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Validates the configuration and constructs a [`Boruvka`] instance.
    ///
    /// # Errors
    /// Returns [`BoruvkaError::InvalidWorkerCount`] when the worker count
    /// is zero.
    pub fn build(self) -> Result<Boruvka> {
        let workers = NonZeroUsize::new(self.workers)
            .ok_or(BoruvkaError::InvalidWorkerCount { got: self.workers })?;

        Ok(Boruvka::new(workers))
    }
}
