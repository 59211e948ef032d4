//! The Writer monad: a value paired with an accumulated log.
//!
//! A [`Writer<V, L>`] carries a value of type `V` and a log of type `L`. Sequencing two
//! writers with [`bind`](Writer::bind) runs the first, feeds its value to the
//! continuation, and combines the two logs with the log type's [`Semigroup`] operation,
//! left log first.
//!
//! # Overview
//!
//! Instead of threading a log through every function by hand:
//!
//! ```rust,ignore
//! fn double(x: i32, log: &mut String) -> i32 {
//!     log.push_str("doubled;");
//!     x * 2
//! }
//! ```
//!
//! return the log alongside the value and let `bind` do the bookkeeping:
//!
//! ```rust
//! use scrivener::Writer;
//!
//! let w = Writer::new(3, "start;".to_string())
//!     .bind(|x| Writer::new(x * 2, "doubled;".to_string()))
//!     .bind(|x| Writer::new(x + 1, "inc;".to_string()));
//!
//! assert_eq!(w.run(), (7, "start;doubled;inc;".to_string()));
//! ```
//!
//! # Choosing a Log Type
//!
//! The log type defaults to `String`. Any [`Monoid`] works, and the choice is made in
//! the type, so [`unit`](Writer::unit) always knows which identity to use:
//!
//! ```rust
//! use scrivener::monoid::Sum;
//! use scrivener::Writer;
//!
//! let counted: Writer<i32, Sum<i32>> = Writer::unit(5);
//! assert_eq!(counted.run(), (5, Sum(0)));
//!
//! let w = Writer::new(5, Sum(3)).bind(|x| Writer::new(x + 1, Sum(4)));
//! assert_eq!(w.run(), (6, Sum(7)));
//! ```
//!
//! See [`flavors`] for named aliases and the [`writer_flavor!`](crate::writer_flavor)
//! macro.
//!
//! # Module Structure
//!
//! - [`Writer`] - the value/log pair with `map`, `bind` and `run`
//! - [`tell()`] and the log-editing methods (`listen`, `pass`, `censor`, `tap_tell`)
//! - [`sequence`], [`traverse`], [`fold_writer`] - collection combinators
//! - [`flavors`] - writers bound to a specific log monoid

mod combinators;
pub mod flavors;
mod tell;
#[cfg(feature = "tracing")]
pub mod tracing;

use std::fmt;

use crate::hkt::{Functor, Monad};
use crate::{Monoid, Semigroup};

pub use combinators::{fold_writer, sequence, traverse};
pub use tell::tell;

#[cfg(feature = "tracing")]
pub use self::tracing::WriterTracingExt;

/// A value of type `V` annotated with a log of type `L`.
///
/// Writers are immutable: every operation consumes `self` and returns a new writer. Two
/// writers are equal when both their values and their logs are equal.
///
/// # Laws
///
/// `map` and `bind` satisfy the functor and monad laws as long as `L` is a lawful
/// [`Monoid`]. The log type's laws are the caller's responsibility and are not checked
/// at runtime.
///
/// # Example
///
/// ```rust
/// use scrivener::Writer;
///
/// let w = Writer::new("a".to_string(), "log1".to_string())
///     .bind(|x| Writer::new(x + "b", "log2".to_string()));
///
/// assert_eq!(w.run(), ("ab".to_string(), "log1log2".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "the accumulated log is lost unless the writer is used"]
pub struct Writer<V, L = String> {
    value: V,
    log: L,
}

impl<V, L> Writer<V, L> {
    /// Pair a value with an existing log.
    ///
    /// The log is stored as given; its monoid laws are not validated.
    #[inline]
    pub fn new(value: V, log: L) -> Self {
        Writer { value, log }
    }

    /// Wrap a bare value with the identity log of `L`.
    ///
    /// ```rust
    /// use scrivener::Writer;
    ///
    /// let w: Writer<i32> = Writer::unit(1);
    /// assert_eq!(w.run(), (1, String::new()));
    /// ```
    #[inline]
    pub fn unit(value: V) -> Self
    where
        L: Monoid,
    {
        Writer::new(value, L::identity())
    }

    /// Transform the value, passing the log through unchanged.
    ///
    /// ```rust
    /// use scrivener::Writer;
    ///
    /// let w = Writer::new(2, vec!["two"]).map(|x| x * 10);
    /// assert_eq!(w.run(), (20, vec!["two"]));
    /// ```
    #[inline]
    pub fn map<B, F>(self, f: F) -> Writer<B, L>
    where
        F: FnOnce(V) -> B,
    {
        let (a, w) = self.run();
        Writer::new(f(a), w)
    }

    /// Sequence a computation that depends on this writer's value.
    ///
    /// The resulting log is this writer's log followed by the continuation's log.
    ///
    /// ```rust
    /// use scrivener::Writer;
    ///
    /// let w = Writer::new(1, "first;".to_string())
    ///     .bind(|x| Writer::new(x + 1, "second;".to_string()));
    /// assert_eq!(w.run(), (2, "first;second;".to_string()));
    /// ```
    #[inline]
    pub fn bind<B, F>(self, f: F) -> Writer<B, L>
    where
        L: Semigroup,
        F: FnOnce(V) -> Writer<B, L>,
    {
        let (a, w) = self.run();
        let (b, w2) = f(a).run();
        Writer::new(b, w.combine(w2))
    }

    /// Alias for [`bind`](Writer::bind).
    #[inline]
    pub fn and_then<B, F>(self, f: F) -> Writer<B, L>
    where
        L: Semigroup,
        F: FnOnce(V) -> Writer<B, L>,
    {
        self.bind(f)
    }

    /// Sequence `next` after this writer, keeping only `next`'s value.
    ///
    /// ```rust
    /// use scrivener::writer::tell;
    /// use scrivener::Writer;
    ///
    /// let w = tell(vec!["loading"]).then(Writer::new(42, vec!["loaded"]));
    /// assert_eq!(w.run(), (42, vec!["loading", "loaded"]));
    /// ```
    #[inline]
    pub fn then<B>(self, next: Writer<B, L>) -> Writer<B, L>
    where
        L: Semigroup,
    {
        self.bind(|_| next)
    }

    /// Combine two writers into a writer of both values.
    ///
    /// ```rust
    /// use scrivener::Writer;
    ///
    /// let w = Writer::new(1, "a".to_string()).zip(Writer::new('x', "b".to_string()));
    /// assert_eq!(w.run(), ((1, 'x'), "ab".to_string()));
    /// ```
    pub fn zip<B>(self, other: Writer<B, L>) -> Writer<(V, B), L>
    where
        L: Semigroup,
    {
        self.bind(|a| other.map(|b| (a, b)))
    }

    /// Extract the `(value, log)` pair.
    ///
    /// This is the inverse of [`new`](Writer::new).
    #[inline]
    pub fn run(self) -> (V, L) {
        (self.value, self.log)
    }

    /// Borrow the value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Borrow the accumulated log.
    pub fn log(&self) -> &L {
        &self.log
    }

    /// Extract the value, discarding the log.
    pub fn into_value(self) -> V {
        self.value
    }

    /// Extract the log, discarding the value.
    pub fn into_log(self) -> L {
        self.log
    }

    /// Apply a logging function to a bare `(value, log)` pair.
    ///
    /// `f` produces a new value and a log entry; the entry is appended to `log`.
    ///
    /// ```rust
    /// use scrivener::Writer;
    ///
    /// let halve = |x: i32| (x / 2, format!("halved {};", x));
    /// let (value, log) = Writer::<i32>::apply_log((10, "start;".to_string()), halve);
    /// assert_eq!((value, log.as_str()), (5, "start;halved 10;"));
    /// ```
    pub fn apply_log<B, F>(pair: (V, L), f: F) -> (B, L)
    where
        L: Semigroup,
        F: FnOnce(V) -> (B, L),
    {
        let (value, log) = pair;
        let (new, entry) = f(value);
        (new, log.combine(entry))
    }

    /// Sequence a fallible continuation.
    ///
    /// An `Err` from `f` is returned as is and this writer's log is dropped with it.
    ///
    /// ```rust
    /// use scrivener::Writer;
    ///
    /// let parse = |s: &str| -> Result<Writer<i32>, std::num::ParseIntError> {
    ///     Ok(Writer::new(s.parse()?, "parsed;".to_string()))
    /// };
    ///
    /// let ok = Writer::new("12", "read;".to_string()).try_bind(parse);
    /// assert_eq!(ok.unwrap().run(), (12, "read;parsed;".to_string()));
    ///
    /// let err = Writer::new("x", "read;".to_string()).try_bind(parse);
    /// assert!(err.is_err());
    /// ```
    pub fn try_bind<B, E, F>(self, f: F) -> Result<Writer<B, L>, E>
    where
        L: Semigroup,
        F: FnOnce(V) -> Result<Writer<B, L>, E>,
    {
        let (a, w) = self.run();
        let (b, w2) = f(a)?.run();
        Ok(Writer::new(b, w.combine(w2)))
    }
}

impl<V, L: Semigroup> Writer<Writer<V, L>, L> {
    /// Collapse a writer of writers, outer log first.
    pub fn flatten(self) -> Writer<V, L> {
        self.bind(|inner| inner)
    }
}

impl<V, E, L> Writer<Result<V, E>, L> {
    /// Move a `Result` value outwards.
    ///
    /// On `Err` the log is discarded.
    ///
    /// ```rust
    /// use scrivener::Writer;
    ///
    /// let ok: Writer<Result<i32, String>> = Writer::new(Ok(1), "a;".to_string());
    /// assert_eq!(ok.transpose(), Ok(Writer::new(1, "a;".to_string())));
    /// ```
    pub fn transpose(self) -> Result<Writer<V, L>, E> {
        let (value, log) = self.run();
        value.map(|v| Writer::new(v, log))
    }
}

impl<V, L: Monoid> Default for Writer<V, L>
where
    V: Default,
{
    fn default() -> Self {
        Writer::unit(V::default())
    }
}

impl<V, L> From<(V, L)> for Writer<V, L> {
    fn from((value, log): (V, L)) -> Self {
        Writer::new(value, log)
    }
}

impl<V, L> From<Writer<V, L>> for (V, L) {
    fn from(writer: Writer<V, L>) -> Self {
        writer.run()
    }
}

impl<V: fmt::Display, L: fmt::Display> fmt::Display for Writer<V, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} :: {}", self.value, self.log)
    }
}

impl<V, L> Functor for Writer<V, L> {
    type Inner = V;
    type Wrapped<B> = Writer<B, L>;

    fn map<B, F>(self, f: F) -> Self::Wrapped<B>
    where
        F: FnOnce(Self::Inner) -> B,
    {
        Writer::map(self, f)
    }
}

impl<V, L: Monoid> Monad for Writer<V, L> {
    fn unit(value: V) -> Self {
        Writer::unit(value)
    }

    fn bind<B, F>(self, f: F) -> Self::Wrapped<B>
    where
        F: FnOnce(Self::Inner) -> Self::Wrapped<B>,
    {
        Writer::bind(self, f)
    }
}

#[cfg(test)]
mod tests;
