//! Per-instance memoization of derived values.
//! A cell computes its value on first access and serves the stored result after.

use std::fmt;
use std::future::Future;

use tokio::sync::OnceCell;
use tracing::trace;

/// A lazily computed value owned by a single instance.
///
/// The first read runs the supplied computation and stores the result; every
/// later read returns the stored value without running the computation again.
/// A computation that fails leaves the cell empty, so the next read retries.
/// Concurrent first reads race safely: one computation runs, the rest wait
/// for its result. There is no invalidation; a stored value lives as long as
/// the cell.
///
/// The computation must not read its own cell; doing so deadlocks.
pub struct MemoCell<T> {
    name: &'static str,
    cell: OnceCell<T>,
}

impl<T> MemoCell<T> {
    /// Create an empty cell backing the property called `name`.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            cell: OnceCell::new(),
        }
    }

    /// Name of the property this cell backs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether a value has been computed and stored.
    pub fn is_computed(&self) -> bool {
        self.cell.initialized()
    }

    /// The stored value, if already computed. Never runs the computation.
    pub fn peek(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Return the stored value, computing and storing it on first access.
    pub async fn get_or_try_init<E, F, Fut>(&self, init: F) -> Result<&T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.cell
            .get_or_try_init(|| {
                trace!(cell = self.name, "computing memoized value");
                init()
            })
            .await
    }
}

impl<T> fmt::Debug for MemoCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoCell")
            .field("name", &self.name)
            .field("computed", &self.is_computed())
            .finish_non_exhaustive()
    }
}
