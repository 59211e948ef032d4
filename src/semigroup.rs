//! Semigroup trait for associative log combination
//!
//! A Semigroup is a type with an associative binary operation. Every log carried by a
//! [`Writer`](crate::Writer) is combined through this operation when two computations are
//! sequenced, so associativity is what makes the order of `bind` calls irrelevant to the
//! final log.
//!
//! # Mathematical Properties
//!
//! For a type to be a valid Semigroup, the `combine` operation must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! The crate cannot check this. A log type that breaks the law produces logs that depend
//! on how a pipeline was bracketed; see [`testing::check_monoid_laws`](crate::testing::check_monoid_laws)
//! for a helper that checks sample values in tests.
//!
//! # Examples
//!
//! ```
//! use scrivener::Semigroup;
//!
//! let s1 = "start;".to_string();
//! let s2 = "doubled;".to_string();
//! assert_eq!(s1.combine(s2), "start;doubled;");
//!
//! let t1 = (vec![1], "a".to_string());
//! let t2 = (vec![2], "b".to_string());
//! assert_eq!(t1.combine(t2), (vec![1, 2], "ab".to_string()));
//! ```
//!
//! # Custom Implementations
//!
//! ```
//! use scrivener::Semigroup;
//!
//! #[derive(Debug, PartialEq)]
//! struct AuditTrail(Vec<String>);
//!
//! impl Semigroup for AuditTrail {
//!     fn combine(mut self, other: Self) -> Self {
//!         self.0.extend(other.0);
//!         self
//!     }
//! }
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// # Note on Ownership
///
/// `combine` takes `self` by value. Writers own their logs exclusively, so combining
/// never needs to clone; clone beforehand if you want to keep the originals.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively.
    ///
    /// `self` is the earlier log and `other` the later one.
    ///
    /// ```
    /// use scrivener::Semigroup;
    ///
    /// assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
    /// ```
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl Semigroup for () {
    #[inline]
    fn combine(self, _other: Self) -> Self {}
}

// None is neutral; two Somes combine their contents.
impl<T: Semigroup> Semigroup for Option<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.combine(b)),
            (a @ Some(_), None) => a,
            (None, b) => b,
        }
    }
}

macro_rules! impl_semigroup_tuple {
    ($($idx:tt $T:ident),+) => {
        impl<$($T: Semigroup),+> Semigroup for ($($T,)+) {
            #[inline]
            fn combine(self, other: Self) -> Self {
                (
                    $(self.$idx.combine(other.$idx)),+
                )
            }
        }
    };
}

impl_semigroup_tuple!(0 T1, 1 T2);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5, 5 T6);
