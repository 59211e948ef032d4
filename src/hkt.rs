//! Functor and Monad capability traits
//!
//! Rust has no higher-kinded types, so these traits use a generic associated type,
//! `Wrapped<B>`, to name "the same container holding a `B`". For
//! [`Writer<V, L>`](crate::Writer) that is `Writer<B, L>`: the log type stays fixed
//! while the value type changes.
//!
//! # Laws
//!
//! ## Functor
//!
//! ```text
//! m.map(|x| x) == m
//! m.map(f).map(g) == m.map(|x| g(f(x)))
//! ```
//!
//! ## Monad
//!
//! ```text
//! M::unit(a).bind(f) == f(a)                                (left identity)
//! m.bind(M::unit) == m                                      (right identity)
//! m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))             (associativity)
//! ```
//!
//! # Generic Code
//!
//! ```
//! use scrivener::hkt::{Functor, Monad};
//! use scrivener::Writer;
//!
//! fn double_it<M>(m: M) -> M::Wrapped<i32>
//! where
//!     M: Functor<Inner = i32>,
//! {
//!     m.map(|x| x * 2)
//! }
//!
//! let w: Writer<i32> = Monad::unit(21);
//! assert_eq!(double_it(w).run(), (42, String::new()));
//! ```

/// A container whose contents can be transformed without touching its structure.
pub trait Functor: Sized {
    /// The type currently held.
    type Inner;

    /// The same container holding a `B` instead.
    type Wrapped<B>;

    /// Apply `f` to the contained value.
    fn map<B, F>(self, f: F) -> Self::Wrapped<B>
    where
        F: FnOnce(Self::Inner) -> B;
}

/// A functor that can also wrap bare values and sequence dependent computations.
pub trait Monad: Functor {
    /// Wrap a bare value with no extra context.
    fn unit(value: Self::Inner) -> Self;

    /// Feed the contained value to `f` and flatten the result.
    fn bind<B, F>(self, f: F) -> Self::Wrapped<B>
    where
        F: FnOnce(Self::Inner) -> Self::Wrapped<B>;
}

/// Turn a plain function into one that works on any functor.
///
/// ```
/// use scrivener::hkt::lift;
/// use scrivener::Writer;
///
/// let len = lift::<Writer<String, Vec<i32>>, _, _>(|s: String| s.len());
/// assert_eq!(len(Writer::new("abc".to_string(), vec![1])).run(), (3, vec![1]));
/// ```
pub fn lift<M, B, F>(f: F) -> impl FnOnce(M) -> M::Wrapped<B>
where
    M: Functor,
    F: FnOnce(M::Inner) -> B,
{
    move |m| m.map(f)
}

/// Discard the contained value, keeping only the structure.
pub fn void<M: Functor>(m: M) -> M::Wrapped<()> {
    m.map(|_| ())
}

/// Wrap `value` with `M::unit` and immediately continue with `f`.
///
/// By the left identity law this is the same as calling `f(value)`.
pub fn unit_then<M, B, F>(value: M::Inner, f: F) -> M::Wrapped<B>
where
    M: Monad,
    F: FnOnce(M::Inner) -> M::Wrapped<B>,
{
    M::unit(value).bind(f)
}
