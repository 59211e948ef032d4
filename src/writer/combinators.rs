//! Collection combinators for writers.

use crate::{Monoid, Writer};

/// Collect a sequence of writers into one writer of all their values.
///
/// Logs are combined in iteration order. An empty input yields an empty `Vec` with the
/// identity log.
///
/// ```rust
/// use scrivener::writer::sequence;
/// use scrivener::Writer;
///
/// let steps = vec![
///     Writer::new(1, "one;".to_string()),
///     Writer::new(2, "two;".to_string()),
/// ];
/// assert_eq!(sequence(steps).run(), (vec![1, 2], "one;two;".to_string()));
/// ```
pub fn sequence<V, L, I>(writers: I) -> Writer<Vec<V>, L>
where
    L: Monoid,
    I: IntoIterator<Item = Writer<V, L>>,
{
    let iter = writers.into_iter();
    let (lower, _) = iter.size_hint();
    let (values, log) = iter.fold(
        (Vec::with_capacity(lower), L::identity()),
        |(mut values, log), writer| {
            let (value, entry) = writer.run();
            values.push(value);
            (values, log.combine(entry))
        },
    );
    Writer::new(values, log)
}

/// Map every item to a writer and [`sequence`] the results.
///
/// ```rust
/// use scrivener::writer::traverse;
/// use scrivener::Writer;
///
/// let w = traverse(vec![1, 2, 3], |n| Writer::new(n * n, vec![n]));
/// assert_eq!(w.run(), (vec![1, 4, 9], vec![1, 2, 3]));
/// ```
pub fn traverse<T, V, L, I, F>(items: I, f: F) -> Writer<Vec<V>, L>
where
    L: Monoid,
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Writer<V, L>,
{
    sequence(items.into_iter().map(f))
}

/// Left fold where every step produces a writer.
///
/// The log starts at the identity and grows by each step's entry in order.
///
/// ```rust
/// use scrivener::monoid::Sum;
/// use scrivener::writer::fold_writer;
/// use scrivener::Writer;
///
/// let w = fold_writer(vec![3, 4, 5], 0, |acc, n| Writer::new(acc + n, Sum(1)));
/// assert_eq!(w.run(), (12, Sum(3)));
/// ```
pub fn fold_writer<T, A, L, I, F>(items: I, init: A, mut f: F) -> Writer<A, L>
where
    L: Monoid,
    I: IntoIterator<Item = T>,
    F: FnMut(A, T) -> Writer<A, L>,
{
    items
        .into_iter()
        .fold(Writer::unit(init), |acc, item| acc.bind(|a| f(a, item)))
}
