//! # Scrivener
//!
//! > *"Every step leaves a line in the ledger"*
//!
//! A Rust library providing a law-abiding Writer monad: a value paired with a log that
//! accumulates automatically as computations are sequenced.
//!
//! ## Philosophy
//!
//! **Scrivener** keeps logging in the pure core:
//! - Functions return their log instead of writing it somewhere
//! - `bind` combines logs with the log type's [`Monoid`], left to right
//! - The log type is chosen in the type, so `unit` always knows its identity
//!
//! ## Quick Example
//!
//! ```rust
//! use scrivener::Writer;
//!
//! fn double(x: i32) -> Writer<i32> {
//!     Writer::new(x * 2, "doubled;".to_string())
//! }
//!
//! fn increment(x: i32) -> Writer<i32> {
//!     Writer::new(x + 1, "inc;".to_string())
//! }
//!
//! let result = Writer::new(3, "start;".to_string())
//!     .bind(double)
//!     .bind(increment);
//!
//! assert_eq!(result.run(), (7, "start;doubled;inc;".to_string()));
//! ```
//!
//! ## Other Log Types
//!
//! ```rust
//! use scrivener::monoid::Sum;
//! use scrivener::Writer;
//!
//! let steps: Writer<i32, Sum<u32>> = Writer::unit(1)
//!     .bind(|x| Writer::new(x * 10, Sum(1)))
//!     .bind(|x| Writer::new(x + 5, Sum(1)));
//!
//! assert_eq!(steps.run(), (15, Sum(2)));
//! ```
//!
//! ## Features
//!
//! - `tracing` - emit writer state as `tracing` events ([`writer::WriterTracingExt`])
//! - `serde` - `Serialize`/`Deserialize` for [`Writer`], [`monoid::Sum`] and [`monoid::Product`]
//! - `proptest` - `Arbitrary` instances for property-based tests

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod hkt;
pub mod monoid;
pub mod semigroup;
pub mod testing;
pub mod writer;

// Re-exports
pub use hkt::{Functor, Monad};
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use writer::{tell, Writer};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::hkt::{Functor, Monad};
    pub use crate::monoid::{Monoid, Product, Sum};
    pub use crate::semigroup::Semigroup;
    pub use crate::writer::flavors::{StringWriter, SumWriter, UnitWriter, VecWriter};
    pub use crate::writer::{fold_writer, sequence, tell, traverse, Writer};
    #[cfg(feature = "tracing")]
    pub use crate::writer::WriterTracingExt;
}
