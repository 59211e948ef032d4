//! Log-only writers and log-editing combinators.

use crate::{Semigroup, Writer};

/// Emit a log entry with no meaningful value.
///
/// The value is `()`, so only the log matters when the result is sequenced.
///
/// ```rust
/// use scrivener::writer::tell;
///
/// let w = tell("hello;".to_string())
///     .then(tell("world;".to_string()))
///     .map(|_| 42);
/// assert_eq!(w.run(), (42, "hello;world;".to_string()));
/// ```
#[inline]
pub fn tell<L>(log: L) -> Writer<(), L> {
    Writer::new((), log)
}

impl<L> Writer<(), L> {
    /// Associated form of [`tell`].
    #[inline]
    pub fn tell(log: L) -> Self {
        tell(log)
    }
}

impl<V, L> Writer<V, L> {
    /// Append a log entry computed from the current value.
    ///
    /// ```rust
    /// use scrivener::Writer;
    ///
    /// let w = Writer::new(10, vec!["start".to_string()])
    ///     .tap_tell(|n| vec![format!("got {}", n)]);
    /// assert_eq!(w.run(), (10, vec!["start".to_string(), "got 10".to_string()]));
    /// ```
    pub fn tap_tell<F>(self, f: F) -> Self
    where
        L: Semigroup,
        F: FnOnce(&V) -> L,
    {
        let entry = f(&self.value);
        Writer::new(self.value, self.log.combine(entry))
    }

    /// Expose the accumulated log in the value, leaving the log itself unchanged.
    ///
    /// ```rust
    /// use scrivener::Writer;
    ///
    /// let w = Writer::new(1, "seen".to_string()).listen();
    /// assert_eq!(w.run(), ((1, "seen".to_string()), "seen".to_string()));
    /// ```
    pub fn listen(self) -> Writer<(V, L), L>
    where
        L: Clone,
    {
        let (value, log) = self.run();
        Writer::new((value, log.clone()), log)
    }

    /// Like [`listen`](Writer::listen), but exposes a projection of the log.
    pub fn listens<B, F>(self, f: F) -> Writer<(V, B), L>
    where
        F: FnOnce(&L) -> B,
    {
        let (value, log) = self.run();
        let seen = f(&log);
        Writer::new((value, seen), log)
    }

    /// Rewrite the accumulated log.
    ///
    /// ```rust
    /// use scrivener::Writer;
    ///
    /// let w = Writer::new((), vec!["debug: noisy", "info: kept"])
    ///     .censor(|logs| logs.into_iter().filter(|l| !l.starts_with("debug")).collect());
    /// assert_eq!(w.into_log(), vec!["info: kept"]);
    /// ```
    pub fn censor<F>(self, f: F) -> Self
    where
        F: FnOnce(L) -> L,
    {
        let (value, log) = self.run();
        Writer::new(value, f(log))
    }
}

impl<V, F, L> Writer<(V, F), L>
where
    F: FnOnce(L) -> L,
{
    /// Apply the function carried in the value to the log.
    ///
    /// ```rust
    /// use scrivener::Writer;
    ///
    /// let shout = |log: String| log.to_uppercase();
    /// let w = Writer::new((7, shout), "quiet".to_string()).pass();
    /// assert_eq!(w.run(), (7, "QUIET".to_string()));
    /// ```
    pub fn pass(self) -> Writer<V, L> {
        let ((value, f), log) = self.run();
        Writer::new(value, f(log))
    }
}
