//! Testing utilities and helpers for Scrivener
//!
//! Nothing in the core checks that a log type really is a monoid. This module gives
//! tests a way to do it on sample values, along with assertion macros for writers and,
//! behind the `proptest` feature, `Arbitrary` instances.
//!
//! # Examples
//!
//! ## Law Checks
//!
//! ```rust
//! use scrivener::monoid::Sum;
//! use scrivener::testing::check_monoid_laws;
//!
//! assert!(check_monoid_laws(Sum(1), Sum(2), Sum(3)).is_ok());
//! ```
//!
//! ## Assertion Macros
//!
//! ```rust
//! use scrivener::{assert_log_eq, assert_value_eq, Writer};
//!
//! let w = Writer::new(7, "start;".to_string());
//! assert_value_eq!(w.clone(), 7);
//! assert_log_eq!(w, "start;");
//! ```

use std::fmt;

use crate::{Monoid, Writer};

/// The algebraic law a check was verifying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Law {
    /// `a.combine(b).combine(c) == a.combine(b.combine(c))`
    MonoidAssociativity,
    /// `L::identity().combine(a) == a`
    MonoidLeftIdentity,
    /// `a.combine(L::identity()) == a`
    MonoidRightIdentity,
    /// `m.map(|x| x) == m`
    FunctorIdentity,
    /// `m.map(f).map(g) == m.map(|x| g(f(x)))`
    FunctorComposition,
    /// `Writer::unit(a).bind(f) == f(a)`
    MonadLeftIdentity,
    /// `m.bind(Writer::unit) == m`
    MonadRightIdentity,
    /// `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
    MonadAssociativity,
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Law::MonoidAssociativity => "monoid associativity",
            Law::MonoidLeftIdentity => "monoid left identity",
            Law::MonoidRightIdentity => "monoid right identity",
            Law::FunctorIdentity => "functor identity",
            Law::FunctorComposition => "functor composition",
            Law::MonadLeftIdentity => "monad left identity",
            Law::MonadRightIdentity => "monad right identity",
            Law::MonadAssociativity => "monad associativity",
        };
        f.write_str(name)
    }
}

/// Error returned when sample values break an algebraic law.
///
/// Both sides of the failed equation are kept in their `Debug` rendering.
///
/// # Examples
///
/// ```rust
/// use scrivener::testing::{check_monoid_laws, Law};
/// use scrivener::{Monoid, Semigroup};
///
/// // Subtraction has no left identity.
/// #[derive(Debug, Clone, PartialEq)]
/// struct Diff(i32);
///
/// impl Semigroup for Diff {
///     fn combine(self, other: Self) -> Self {
///         Diff(self.0 - other.0)
///     }
/// }
///
/// impl Monoid for Diff {
///     fn identity() -> Self {
///         Diff(0)
///     }
/// }
///
/// let violation = check_monoid_laws(Diff(5), Diff(3), Diff(1)).unwrap_err();
/// assert_eq!(violation.law, Law::MonoidLeftIdentity);
/// assert_eq!(violation.to_string(), "monoid left identity law violated: Diff(-5) != Diff(5)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LawViolation {
    /// The law that did not hold.
    pub law: Law,
    /// `Debug` rendering of the left-hand side.
    pub left: String,
    /// `Debug` rendering of the right-hand side.
    pub right: String,
}

impl LawViolation {
    /// Create a new LawViolation error.
    pub fn new(law: Law, left: impl fmt::Debug, right: impl fmt::Debug) -> Self {
        Self {
            law,
            left: format!("{:?}", left),
            right: format!("{:?}", right),
        }
    }
}

impl fmt::Display for LawViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} law violated: {} != {}",
            self.law, self.left, self.right
        )
    }
}

impl std::error::Error for LawViolation {}

fn expect_equal<T>(law: Law, left: T, right: T) -> Result<(), LawViolation>
where
    T: PartialEq + fmt::Debug,
{
    if left == right {
        Ok(())
    } else {
        Err(LawViolation::new(law, left, right))
    }
}

/// Check the identity and associativity laws of a log type on three sample values.
pub fn check_monoid_laws<L>(a: L, b: L, c: L) -> Result<(), LawViolation>
where
    L: Monoid + Clone + PartialEq + fmt::Debug,
{
    expect_equal(
        Law::MonoidLeftIdentity,
        L::identity().combine(a.clone()),
        a.clone(),
    )?;
    expect_equal(
        Law::MonoidRightIdentity,
        a.clone().combine(L::identity()),
        a.clone(),
    )?;
    expect_equal(
        Law::MonoidAssociativity,
        a.clone().combine(b.clone()).combine(c.clone()),
        a.combine(b.combine(c)),
    )
}

/// Check the functor laws of [`Writer::map`] for one writer and two functions.
pub fn check_functor_laws<V, B, C, L, F, G>(m: Writer<V, L>, f: F, g: G) -> Result<(), LawViolation>
where
    V: Clone + PartialEq + fmt::Debug,
    C: PartialEq + fmt::Debug,
    L: Clone + PartialEq + fmt::Debug,
    F: Fn(V) -> B,
    G: Fn(B) -> C,
{
    expect_equal(Law::FunctorIdentity, m.clone().map(|x| x), m.clone())?;
    expect_equal(
        Law::FunctorComposition,
        m.clone().map(&f).map(&g),
        m.map(|x| g(f(x))),
    )
}

/// Check the monad laws of [`Writer::unit`] and [`Writer::bind`].
///
/// `a` seeds the left identity check and `m` the right identity and associativity
/// checks.
pub fn check_monad_laws<V, B, C, L, F, G>(
    a: V,
    m: Writer<V, L>,
    f: F,
    g: G,
) -> Result<(), LawViolation>
where
    V: Clone + PartialEq + fmt::Debug,
    B: PartialEq + fmt::Debug,
    C: PartialEq + fmt::Debug,
    L: Monoid + Clone + PartialEq + fmt::Debug,
    F: Fn(V) -> Writer<B, L>,
    G: Fn(B) -> Writer<C, L>,
{
    expect_equal(
        Law::MonadLeftIdentity,
        Writer::unit(a.clone()).bind(&f),
        f(a),
    )?;
    expect_equal(
        Law::MonadRightIdentity,
        m.clone().bind(Writer::unit),
        m.clone(),
    )?;
    expect_equal(
        Law::MonadAssociativity,
        m.clone().bind(&f).bind(&g),
        m.bind(|x| f(x).bind(&g)),
    )
}

/// Assert that a writer carries the expected log.
///
/// # Example
///
/// ```rust
/// use scrivener::{assert_log_eq, Writer};
///
/// assert_log_eq!(Writer::new((), vec![1, 2]), vec![1, 2]);
/// ```
#[macro_export]
macro_rules! assert_log_eq {
    ($writer:expr, $expected:expr) => {{
        let (_, log) = $crate::Writer::run($writer);
        assert_eq!(log, $expected, "unexpected writer log");
    }};
}

/// Assert that a writer carries the expected value.
///
/// # Example
///
/// ```rust
/// use scrivener::{assert_value_eq, Writer};
///
/// assert_value_eq!(Writer::new(3, String::new()), 3);
/// ```
#[macro_export]
macro_rules! assert_value_eq {
    ($writer:expr, $expected:expr) => {{
        let (value, _) = $crate::Writer::run($writer);
        assert_eq!(value, $expected, "unexpected writer value");
    }};
}

#[cfg(feature = "proptest")]
mod arbitrary {
    use proptest::prelude::*;
    use proptest::strategy::Map;

    use crate::monoid::{Product, Sum};
    use crate::Writer;

    impl<V, L> Arbitrary for Writer<V, L>
    where
        V: Arbitrary,
        L: Arbitrary,
    {
        type Parameters = (V::Parameters, L::Parameters);
        type Strategy = Map<(V::Strategy, L::Strategy), fn((V, L)) -> Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            let (v_params, l_params) = args;
            (any_with::<V>(v_params), any_with::<L>(l_params)).prop_map(Writer::from as fn((V, L)) -> Self)
        }
    }

    impl<T: Arbitrary> Arbitrary for Sum<T> {
        type Parameters = T::Parameters;
        type Strategy = Map<T::Strategy, fn(T) -> Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            any_with::<T>(args).prop_map(Sum as fn(T) -> Self)
        }
    }

    impl<T: Arbitrary> Arbitrary for Product<T> {
        type Parameters = T::Parameters;
        type Strategy = Map<T::Strategy, fn(T) -> Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            any_with::<T>(args).prop_map(Product as fn(T) -> Self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monoid::{Product, Sum};
    use crate::Semigroup;

    #[derive(Debug, Clone, PartialEq)]
    struct Diff(i32);

    impl Semigroup for Diff {
        fn combine(self, other: Self) -> Self {
            Diff(self.0 - other.0)
        }
    }

    impl Monoid for Diff {
        fn identity() -> Self {
            Diff(0)
        }
    }

    // Right identity holds (x - 0 == x) but left identity does not.
    #[test]
    fn test_non_monoid_is_reported() {
        let violation = check_monoid_laws(Diff(5), Diff(3), Diff(1)).unwrap_err();
        assert_eq!(violation.law, Law::MonoidLeftIdentity);
        assert_eq!(violation.left, "Diff(-5)");
        assert_eq!(violation.right, "Diff(5)");
    }

    #[test]
    fn test_lawful_monoids_pass() {
        assert_eq!(check_monoid_laws(Sum(1), Sum(-2), Sum(3)), Ok(()));
        assert_eq!(check_monoid_laws(Product(2), Product(3), Product(4)), Ok(()));
        assert_eq!(
            check_monoid_laws("a".to_string(), "b".to_string(), "c".to_string()),
            Ok(())
        );
        assert_eq!(check_monoid_laws(vec![1], vec![], vec![2, 3]), Ok(()));
    }

    #[test]
    fn test_writer_functor_laws() {
        let m = Writer::new(3, "m;".to_string());
        assert_eq!(check_functor_laws(m, |x| x + 1, |x: i32| x * 2), Ok(()));
    }

    #[test]
    fn test_writer_monad_laws() {
        let m = Writer::new(3, Sum(10));
        let f = |x: i32| Writer::new(x + 1, Sum(1));
        let g = |x: i32| Writer::new(x * 2, Sum(100));
        assert_eq!(check_monad_laws(5, m, f, g), Ok(()));
    }

    #[test]
    fn test_monad_laws_catch_unlawful_log() {
        let m = Writer::new(1, Diff(2));
        let f = |x: i32| Writer::new(x, Diff(3));
        let g = |x: i32| Writer::new(x, Diff(4));
        let violation = check_monad_laws(1, m, f, g).unwrap_err();
        assert_eq!(violation.law, Law::MonadLeftIdentity);
    }

    #[test]
    fn test_violation_display() {
        let v = LawViolation::new(Law::MonoidAssociativity, 1, 2);
        assert_eq!(v.to_string(), "monoid associativity law violated: 1 != 2");
    }

    #[test]
    fn assert_log_eq_macro() {
        assert_log_eq!(Writer::new(1, "log".to_string()), "log");
    }

    #[test]
    fn assert_value_eq_macro() {
        assert_value_eq!(Writer::new(1, Sum(0)), 1);
    }

    #[test]
    #[should_panic(expected = "unexpected writer log")]
    fn assert_log_eq_panics_on_mismatch() {
        assert_log_eq!(Writer::new(1, "log".to_string()), "other");
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn sum_log_monoid_laws(a: Sum<i16>, b: Sum<i16>, c: Sum<i16>) {
                let widen = |s: Sum<i16>| Sum(i64::from(s.0));
                prop_assert!(check_monoid_laws(widen(a), widen(b), widen(c)).is_ok());
            }

            #[test]
            fn arbitrary_writer_satisfies_monad_laws(a: i32, m: Writer<i32, Vec<u8>>) {
                let f = |x: i32| Writer::new(x.wrapping_add(1), vec![1]);
                let g = |x: i32| Writer::new(x.wrapping_mul(3), vec![2]);
                prop_assert!(check_monad_laws(a, m, f, g).is_ok());
            }
        }
    }
}
