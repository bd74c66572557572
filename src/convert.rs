//! Conversions at the boundary with other "possibly absent" representations.
//!
//! Code that speaks [`std::option::Option`] or [`either::Either`] meets code
//! that speaks [`Maybe`] here. Round-tripping through either representation is
//! lossless: a present value survives unchanged, and absence maps to the other
//! side's absence marker (`None`, or `Left(())`).
//!
//! # Examples
//!
//! ```rust
//! use maybe::{present, absent, Maybe};
//!
//! assert_eq!(Maybe::from_option(Some(42)), present(42));
//! assert_eq!(Maybe::from_option(None::<i32>), absent());
//!
//! assert_eq!(present(42).into_option(), Some(42));
//! assert_eq!(absent::<i32>().into_option(), None);
//! ```

use either::Either;

use crate::Maybe;

impl<T> Maybe<T> {
    /// Converts the native nullable representation into a `Maybe`.
    ///
    /// `None` becomes `Absent`; anything else becomes `Present`, including
    /// wrapped values other languages treat as falsy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::{present, absent, Maybe};
    ///
    /// assert_eq!(Maybe::from_option(Some(42)), present(42));
    /// assert_eq!(Maybe::from_option(None::<i32>), absent());
    /// assert_eq!(Maybe::from_option(Some(0)), present(0));
    /// assert_eq!(Maybe::from_option(Some(false)), present(false));
    /// ```
    #[inline]
    pub fn from_option(option: Option<T>) -> Maybe<T> {
        match option {
            Some(v) => Maybe::Present(v),
            None => Maybe::Absent,
        }
    }

    /// Converts a `Maybe` back into the native nullable representation.
    ///
    /// The exact inverse of [`from_option`](Maybe::from_option): a present
    /// value round-trips unchanged, absence collapses to `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::{present, absent, Maybe};
    ///
    /// assert_eq!(present(42).into_option(), Some(42));
    /// assert_eq!(absent::<i32>().into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Present(v) => Some(v),
            Maybe::Absent => None,
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        Maybe::from_option(option)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

/// Lossless `Either` form of a `Maybe`, with `Left(())` as the absence witness.
impl<T> From<Maybe<T>> for Either<(), T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Present(v) => Either::Right(v),
            Maybe::Absent => Either::Left(()),
        }
    }
}

impl<T> From<Either<(), T>> for Maybe<T> {
    #[inline]
    fn from(either: Either<(), T>) -> Self {
        match either {
            Either::Right(v) => Maybe::Present(v),
            Either::Left(()) => Maybe::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{absent, present};

    #[test]
    fn test_from_option() {
        assert_eq!(Maybe::from_option(Some(42)), present(42));
        assert_eq!(Maybe::from_option(None::<i32>), absent());
    }

    #[test]
    fn test_from_option_keeps_falsy_values_present() {
        assert_eq!(Maybe::from_option(Some(0)), present(0));
        assert_eq!(Maybe::from_option(Some("")), present(""));
        assert_eq!(Maybe::from_option(Some(false)), present(false));

        let nan = Maybe::from_option(Some(f64::NAN));
        assert!(nan.is_present());
        assert!(nan.unwrap().is_nan());
    }

    #[test]
    fn test_into_option() {
        assert_eq!(present(42).into_option(), Some(42));
        assert_eq!(absent::<i32>().into_option(), None);
    }

    #[test]
    fn test_option_round_trip() {
        let p: Maybe<i32> = Maybe::from_option(present(42).into_option());
        assert_eq!(p, present(42));

        let a: Maybe<i32> = Maybe::from_option(absent::<i32>().into_option());
        assert_eq!(a, absent());
    }

    #[test]
    fn test_from_trait_impls() {
        let p: Maybe<i32> = Some(42).into();
        assert_eq!(p, present(42));

        let o: Option<i32> = present(42).into();
        assert_eq!(o, Some(42));

        let a: Option<i32> = absent::<i32>().into();
        assert_eq!(a, None);
    }

    #[test]
    fn test_either_round_trip() {
        let e: Either<(), i32> = present(42).into();
        assert_eq!(e, Either::Right(42));
        assert_eq!(Maybe::from(e), present(42));

        let e: Either<(), i32> = absent::<i32>().into();
        assert_eq!(e, Either::Left(()));
        assert_eq!(Maybe::from(e), absent());
    }
}
