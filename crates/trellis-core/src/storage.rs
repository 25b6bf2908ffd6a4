//! Persistence hook
//!
//! Graphs are purely in-memory. Callers that keep a copy in some external
//! store implement [`Synchronizable`] against their store type and decide
//! what "in sync" means for it.

use crate::error::Result;

/// Reconcile an in-memory value with an external store.
pub trait Synchronizable<S> {
    /// Bring `store` up to date with `self` under the external key `id`.
    fn synchronize(&mut self, store: &mut S, id: u64) -> Result<()>;
}
