//! Writers bound to a specific log monoid.
//!
//! Picking a log type is a type-level choice. The aliases below name the common ones,
//! and [`writer_flavor!`](crate::writer_flavor) declares new ones. Because the log type
//! is part of the writer's type, [`Writer::unit`] resolves the right identity, and
//! binding writers with different log types is a compile error rather than a runtime
//! surprise.
//!
//! ```rust
//! use scrivener::writer::flavors::{StringWriter, SumWriter};
//! use scrivener::monoid::Sum;
//!
//! let counted: SumWriter<&str> = SumWriter::unit("x");
//! assert_eq!(counted.run(), ("x", Sum(0)));
//!
//! let logged: StringWriter<&str> = StringWriter::unit("x");
//! assert_eq!(logged.run(), ("x", String::new()));
//! ```
//!
//! ```compile_fail
//! use scrivener::writer::flavors::{StringWriter, SumWriter};
//!
//! let w: StringWriter<i32> = StringWriter::unit(1);
//! // A continuation must produce the same log type.
//! let _ = w.bind(|x| SumWriter::<i32>::unit(x));
//! ```

use crate::monoid::{Product, Sum};
use crate::Writer;

/// A writer whose log is a `String`, combined by concatenation.
pub type StringWriter<V> = Writer<V, String>;

/// A writer whose log is a list of entries.
pub type VecWriter<V, T> = Writer<V, Vec<T>>;

/// A writer that adds up a number alongside its value.
pub type SumWriter<V, T = i64> = Writer<V, Sum<T>>;

/// A writer that multiplies a number alongside its value.
pub type ProductWriter<V, T = i64> = Writer<V, Product<T>>;

/// A writer that carries only a log.
pub type UnitWriter<L = String> = Writer<(), L>;

/// Declare a named writer flavor for a chosen log type.
///
/// ```rust
/// use scrivener::monoid::Sum;
/// use scrivener::writer_flavor;
///
/// writer_flavor!(
///     /// Counts the steps a computation took.
///     pub StepCounter = Sum<u32>
/// );
///
/// let w: StepCounter<i32> = StepCounter::unit(5);
/// assert_eq!(w.run(), (5, Sum(0)));
///
/// let w = StepCounter::new(5, Sum(3)).bind(|x| StepCounter::new(x + 1, Sum(4)));
/// assert_eq!(w.run(), (6, Sum(7)));
/// ```
#[macro_export]
macro_rules! writer_flavor {
    ($(#[$meta:meta])* $vis:vis $name:ident = $log:ty) => {
        $(#[$meta])*
        $vis type $name<V> = $crate::Writer<V, $log>;
    };
}
