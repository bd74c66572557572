//! Iteration over an optional value.
//!
//! A [`Maybe<T>`] iterates like a container of zero or one items, so it can be
//! fed to `for` loops and iterator adapters directly.
//!
//! # Examples
//!
//! ```rust
//! use maybe::{present, absent, Maybe};
//!
//! let p = present(42);
//! let values: Vec<_> = p.into_iter().collect();
//! assert_eq!(values, vec![42]);
//!
//! let a: Maybe<i32> = absent();
//! assert_eq!(a.into_iter().next(), None);
//! ```

use crate::Maybe;

/// Iterator over the zero or one values of a [`Maybe<T>`].
///
/// Created by [`Maybe::into_iter`] or [`Maybe::iter`].
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Maybe<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        std::mem::replace(&mut self.inner, Maybe::Absent).into_option()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.inner.is_present() { 1 } else { 0 };
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.next()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> std::iter::FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> IntoIter<&'a T> {
        self.iter()
    }
}

impl<T> Maybe<T> {
    /// Returns an iterator over the possibly contained value, by reference.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::{present, absent, Maybe};
    ///
    /// let p = present(42);
    /// let mut iter = p.iter();
    /// assert_eq!(iter.next(), Some(&42));
    /// assert_eq!(iter.next(), None);
    ///
    /// let a: Maybe<i32> = absent();
    /// assert_eq!(a.iter().next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> IntoIter<&T> {
        IntoIter {
            inner: self.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{absent, present};

    #[test]
    fn test_into_iter_present() {
        let mut iter = present(42).into_iter();
        assert_eq!(iter.size_hint(), (1, Some(1)));
        assert_eq!(iter.next(), Some(42));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_into_iter_absent() {
        let mut iter = absent::<i32>().into_iter();
        assert_eq!(iter.size_hint(), (0, Some(0)));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_iter_by_reference() {
        let p = present("value");
        let values: Vec<_> = p.iter().collect();
        assert_eq!(values, vec![&"value"]);
        assert!(p.is_present());
    }

    #[test]
    fn test_for_loop() {
        let mut seen = Vec::new();
        for v in present(42) {
            seen.push(v);
        }
        for v in absent::<i32>() {
            seen.push(v);
        }
        assert_eq!(seen, vec![42]);
    }

    #[test]
    fn test_next_back() {
        let mut iter = present(42).into_iter();
        assert_eq!(iter.next_back(), Some(42));
        assert_eq!(iter.next_back(), None);
    }
}
