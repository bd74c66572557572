//! # Maybe: An Explicit Optional-Value Type
//!
//! Model "a value may or may not be here" as a real two-variant type with
//! composable combinators, instead of a nullable sentinel checked by hand at
//! every call site.
//!
//! ## Core Type
//!
//! - **[`Maybe<T>`]**: either [`Present(T)`](Maybe::Present) or
//!   [`Absent`](Maybe::Absent). Immutable once constructed; every combinator
//!   produces a new value. Compared by value, so two present values are equal
//!   exactly when their payloads are.
//!
//! ## Key Features
//!
//! - **Short-circuit on absence**: chain `.map()` and `.and_then()` freely —
//!   once a value is absent, no downstream closure ever runs
//! - **Exhaustive dispatch**: `.fold()` (and native `match`) force the absence
//!   branch to be handled at the call site
//! - **Boundary conversions**: lossless round trips with
//!   [`std::option::Option`] and [`either::Either`]
//!
//! ## Example
//!
//! ```
//! use maybe::{present, absent, Maybe};
//!
//! fn lookup(key: &str) -> Maybe<i32> {
//!     match key {
//!         "answer" => present(42),
//!         _ => absent(),
//!     }
//! }
//!
//! let doubled = lookup("answer").map(|v| v * 2);
//! assert_eq!(doubled, present(84));
//!
//! let msg = lookup("missing")
//!     .and_then(|v| if v > 0 { present(v) } else { absent() })
//!     .fold(|v| format!("got {v}"), || "no value".to_string());
//! assert_eq!(msg, "no value");
//! ```
//!
//! ## Common Functions
//!
//! **Constructing:**
//! - [`present(value)`](present) - Wrap a value, whatever it is
//! - [`absent()`](absent) - The empty case, polymorphic over the payload type
//! - [`Maybe::from_option`] - Adapt code that speaks `Option`
//!
//! **Consuming:**
//! - [`Maybe::unwrap_or`] / [`Maybe::unwrap_or_else`] - Extract with a default
//! - [`Maybe::fold`] - Dispatch exhaustively to one of two handlers
//! - [`Maybe::into_option`] - Hand the value back to `Option`-speaking code

mod convert;
mod iter;
mod maybe;
pub mod prelude;

pub use iter::IntoIter;
pub use maybe::{absent, present, Maybe};
