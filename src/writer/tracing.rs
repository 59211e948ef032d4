//! Tracing support for writers.
//!
//! Writers never perform I/O themselves. This module lets a pipeline report its
//! intermediate state through `tracing` without changing the value or the log.
//! Feature-gated behind `#[cfg(feature = "tracing")]`.

use std::fmt::Debug;

use crate::{Semigroup, Writer};

/// Extension trait for emitting writer state as tracing events.
///
/// This trait is only available when the `tracing` feature is enabled.
pub trait WriterTracingExt: Sized {
    /// Emit a `DEBUG` event with the current value and log, then return `self` unchanged.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use scrivener::writer::WriterTracingExt;
    /// use scrivener::Writer;
    ///
    /// let w = Writer::new(3, "start;".to_string())
    ///     .traced("loaded")
    ///     .bind(|x| Writer::new(x * 2, "doubled;".to_string()))
    ///     .traced("doubled");
    /// ```
    fn traced(self, label: &str) -> Self;
}

impl<V: Debug, L: Debug> WriterTracingExt for Writer<V, L> {
    fn traced(self, label: &str) -> Self {
        tracing::debug!(
            label = %label,
            value = ?self.value(),
            log = ?self.log(),
            "writer step"
        );
        self
    }
}

impl<V: Debug, L: Debug + Semigroup> Writer<V, L> {
    /// [`bind`](Writer::bind), emitting a `TRACE` event with both logs before they
    /// are combined.
    pub fn bind_traced<B, F>(self, label: &str, f: F) -> Writer<B, L>
    where
        F: FnOnce(V) -> Writer<B, L>,
    {
        self.bind(|a| {
            tracing::trace!(label = %label, value = ?a, "binding writer");
            let next = f(a);
            tracing::trace!(label = %label, entry = ?next.log(), "appending writer log");
            next
        })
    }
}
