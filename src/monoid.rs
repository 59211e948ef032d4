//! Monoid trait: log types with an identity element
//!
//! A `Monoid` extends [`Semigroup`] with an identity element. The identity is what
//! [`Writer::unit`](crate::Writer::unit) puts in the log of a bare value, so every log type
//! a writer can carry must implement this trait explicitly.
//!
//! # Mathematical Properties
//!
//! 1. **Associativity** (from Semigroup):
//!    ```text
//!    a.combine(b).combine(c) == a.combine(b.combine(c))
//!    ```
//! 2. **Right Identity**:
//!    ```text
//!    a.combine(M::identity()) == a
//!    ```
//! 3. **Left Identity**:
//!    ```text
//!    M::identity().combine(a) == a
//!    ```
//!
//! # Numeric Monoids
//!
//! Numbers have several lawful monoids (addition, multiplication), so they are wrapped
//! in newtypes that pick one:
//!
//! ```
//! use scrivener::monoid::{fold_all, Sum};
//!
//! let total = fold_all(vec![Sum(1), Sum(2), Sum(3), Sum(4)]);
//! assert_eq!(total, Sum(10));
//! ```

use crate::Semigroup;
use std::ops::{Add, Mul};

/// A `Monoid` is a `Semigroup` with an identity element.
///
/// # Laws
///
/// ```text
/// a.combine(M::identity()) == a           (right identity)
/// M::identity().combine(a) == a           (left identity)
/// a.combine(b).combine(c) == a.combine(b.combine(c))  (associativity)
/// ```
///
/// There is no fallback to `Default`: a type whose default value is not its identity
/// (for instance `Product<i32>`, whose default would be 0) must not be usable as a log
/// by accident.
///
/// # Example
///
/// ```rust
/// use scrivener::{Monoid, Semigroup};
///
/// let log = "step;".to_string();
/// let empty: String = Monoid::identity();
///
/// assert_eq!(log.clone().combine(empty.clone()), log);
/// assert_eq!(empty.combine(log.clone()), log);
/// ```
pub trait Monoid: Semigroup {
    /// The identity element for this monoid.
    fn identity() -> Self;
}

impl<T> Monoid for Vec<T> {
    fn identity() -> Self {
        Vec::new()
    }
}

impl Monoid for String {
    fn identity() -> Self {
        String::new()
    }
}

impl Monoid for () {
    fn identity() -> Self {}
}

impl<T: Semigroup> Monoid for Option<T> {
    fn identity() -> Self {
        None
    }
}

macro_rules! impl_monoid_tuple {
    ($($idx:tt $T:ident),+) => {
        impl<$($T: Monoid),+> Monoid for ($($T,)+) {
            fn identity() -> Self {
                ($($T::identity(),)+)
            }
        }
    };
}

impl_monoid_tuple!(0 T1, 1 T2);
impl_monoid_tuple!(0 T1, 1 T2, 2 T3);
impl_monoid_tuple!(0 T1, 1 T2, 2 T3, 3 T4);
impl_monoid_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5);
impl_monoid_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5, 5 T6);

/// Monoid for numeric types under addition.
///
/// Identity: 0
///
/// # Example
///
/// ```
/// use scrivener::monoid::Sum;
/// use scrivener::{Monoid, Semigroup};
///
/// assert_eq!(Sum(5).combine(Sum(10)), Sum(15));
/// assert_eq!(Sum::<i64>::identity(), Sum(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Sum<T>(pub T);

impl<T: Add<Output = T>> Semigroup for Sum<T> {
    fn combine(self, other: Self) -> Self {
        Sum(self.0 + other.0)
    }
}

impl<T: Add<Output = T> + Default> Monoid for Sum<T> {
    fn identity() -> Self {
        Sum(T::default())
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Sum<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Monoid for numeric types under multiplication.
///
/// Identity: 1
///
/// ```
/// use scrivener::monoid::{fold_all, Product};
///
/// assert_eq!(fold_all(vec![Product(2), Product(3), Product(4)]), Product(24));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Product<T>(pub T);

/// Helper trait for types with a multiplicative identity (1)
pub trait One {
    /// Returns the multiplicative identity element for this type
    fn one() -> Self;
}

macro_rules! impl_one {
    ($($t:ty => $one:expr),+ $(,)?) => {
        $(
            impl One for $t {
                fn one() -> Self {
                    $one
                }
            }
        )+
    };
}

impl_one!(
    i8 => 1, i16 => 1, i32 => 1, i64 => 1, i128 => 1, isize => 1,
    u8 => 1, u16 => 1, u32 => 1, u64 => 1, u128 => 1, usize => 1,
    f32 => 1.0, f64 => 1.0,
);

impl<T: Mul<Output = T>> Semigroup for Product<T> {
    fn combine(self, other: Self) -> Self {
        Product(self.0 * other.0)
    }
}

impl<T: Mul<Output = T> + One> Monoid for Product<T> {
    fn identity() -> Self {
        Product(T::one())
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Product<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Semigroup for ordered types under maximum.
///
/// Unbounded types have no identity here; use `Option<Max<T>>` as the log type.
///
/// ```
/// use scrivener::monoid::Max;
/// use scrivener::Semigroup;
///
/// assert_eq!(Max(5).combine(Max(10)), Max(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Max<T>(pub T);

impl<T: Ord> Semigroup for Max<T> {
    fn combine(self, other: Self) -> Self {
        Max(self.0.max(other.0))
    }
}

/// Semigroup for ordered types under minimum.
///
/// Unbounded types have no identity here; use `Option<Min<T>>` as the log type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Min<T>(pub T);

impl<T: Ord> Semigroup for Min<T> {
    fn combine(self, other: Self) -> Self {
        Min(self.0.min(other.0))
    }
}

/// Fold an iterator using the Monoid instance, starting with `identity()`.
///
/// ```
/// use scrivener::monoid::fold_all;
///
/// let logs = vec!["a;".to_string(), "b;".to_string()];
/// let all: String = fold_all(logs);
/// assert_eq!(all, "a;b;");
/// ```
pub fn fold_all<M, I>(iter: I) -> M
where
    M: Monoid,
    I: IntoIterator<Item = M>,
{
    iter.into_iter().fold(M::identity(), |acc, x| acc.combine(x))
}

/// Alias for `fold_all`.
pub fn reduce<M, I>(iter: I) -> M
where
    M: Monoid,
    I: IntoIterator<Item = M>,
{
    fold_all(iter)
}
