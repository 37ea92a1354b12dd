/*!
> **tyseq (crate):** Immutable sequences of type descriptors, with searching,
> filtering, and metafunction combinators.

Code that generates, checks, or reasons about other code often needs to treat an
ordered collection of *types* like a container: keep the integral ones, replace every
`i32` with an `i64`, wrap each element in `Vec<_>`, find where `f64` sits. This crate
provides that container.

- A [`TypeRepr`] is a structural, comparable description of a type — either a concrete
  Rust type captured with [`TypeRepr::of`], or a constructor application such as
  `Vec<i32>` built with [`TypeRepr::applied`].
- A [`TypeSeq`] is an immutable, persistent, order-preserving sequence of descriptors.
  Every operation returns a new sequence and leaves the old one untouched; unchanged
  cells are shared between the two.
- [`Predicate`]s and [`Transform`]s are ordinary values — closures or the named
  combinators in [`pred`] — and the [`metafunc`] wrapper composes them: complement,
  boolean combination, and transform pipelining.

Positional operations validate their indices and report [`Error`] values; a
[`find`](TypeSeq::find) that matches nothing is a normal `None`, never an error.

# Examples

```
use tyseq::{metafunc, pred::{IsIntegral, Wrap}, tyseq, TypeRepr};

let seq = tyseq![i32, f32, f64, i64];

// Query and search.
assert_eq!(seq.len(), 4);
assert_eq!(seq.get(1), Ok(&TypeRepr::of::<f32>()));
assert_eq!(seq.find(&TypeRepr::of::<f64>()), Some(2));

// Filter and rewrite, persistently: `seq` itself never changes.
assert_eq!(seq.filter(IsIntegral), tyseq![i32, i64]);
assert_eq!(
    seq.apply_if(IsIntegral, Wrap("Vec")).to_string(),
    "[Vec<i32>, f32, f64, Vec<i64>]",
);
assert_eq!(seq.len(), 4);

// Combine predicates.
let not_integral = metafunc(IsIntegral).negate();
assert_eq!(seq.filter(not_integral), tyseq![f32, f64]);
```
*/

#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]

#[macro_use]
extern crate derivative;

pub mod error;
pub mod meta;
pub mod pred;
pub mod repr;
pub mod seq;

mod sift;

pub use error::Error;
pub use meta::{metafunc, BinaryOp, Metafunc, Predicate, Transform};
pub use repr::TypeRepr;
pub use seq::TypeSeq;

/// The prelude module for quickly getting started with tyseq.
///
/// This module is designed to be imported as `use tyseq::prelude::*;`, which brings
/// into scope everything needed to build and rework sequences of descriptors.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::error::Error;
    #[doc(no_inline)]
    pub use crate::meta::{metafunc, Metafunc, Predicate, Transform};
    #[doc(no_inline)]
    pub use crate::repr::TypeRepr;
    #[doc(no_inline)]
    pub use crate::seq::TypeSeq;
    #[doc(no_inline)]
    pub use crate::tyseq;
}
