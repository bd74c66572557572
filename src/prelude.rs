//! Commonly used imports
//!
//! Use `use maybe::prelude::*;` for quick access to the most common types and
//! functions, including the variants themselves for pattern matching.

// Core type and its variants
pub use crate::Maybe;
pub use crate::Maybe::{Absent, Present};

// Constructors
pub use crate::{absent, present};
