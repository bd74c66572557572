/// An optional value: either a value is present, or it is absent.
///
/// `Maybe` makes "value or no value" an explicit, first-class type instead of a
/// nullable sentinel threaded through calling code. The compiler checks every
/// `match` on it for exhaustiveness, so the absence case can never be silently
/// forgotten.
///
/// Presence is about the slot, not the truthiness of its contents: `0`, `""`,
/// `false`, and `f64::NAN` are all perfectly good present values.
///
/// # Examples
///
/// ```rust
/// use maybe::{present, absent, Maybe};
///
/// let x = present(42);
/// assert_eq!(x.unwrap_or(24), 42);
///
/// let y: Maybe<i32> = absent();
/// assert_eq!(y.unwrap_or(24), 24);
///
/// // Absence short-circuits through a whole chain without running any closure.
/// let z: Maybe<i32> = absent();
/// assert_eq!(z.map(|x| x * 2).and_then(|x| present(x + 1)), absent());
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// No value present
    Absent,
    /// A value is present
    Present(T),
}

/// Wrap a value in a present `Maybe`.
///
/// Always succeeds, whatever the value: presence is a property of the slot,
/// not of the value's truthiness.
///
/// # Examples
///
/// ```rust
/// use maybe::{present, Maybe};
///
/// assert_eq!(present(42), Maybe::Present(42));
/// assert!(present(0).is_present());
/// assert!(present("").is_present());
/// assert!(present(false).is_present());
/// assert!(present(f64::NAN).is_present());
/// ```
#[inline]
pub fn present<T>(value: T) -> Maybe<T> {
    Maybe::Present(value)
}

/// Create an absent `Maybe`.
///
/// `Absent` carries no value and is polymorphic over every payload type.
///
/// # Examples
///
/// ```rust
/// use maybe::{absent, Maybe};
///
/// let x: Maybe<i32> = absent();
/// assert!(x.is_absent());
/// ```
#[inline]
pub fn absent<T>() -> Maybe<T> {
    Maybe::Absent
}

impl<T> Maybe<T> {
    /// Returns `true` if a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Maybe;
    ///
    /// let x: Maybe<i32> = Maybe::Present(42);
    /// assert!(x.is_present());
    ///
    /// let y: Maybe<i32> = Maybe::Absent;
    /// assert!(!y.is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    /// Returns `true` if no value is present.
    ///
    /// For every value, exactly one of `is_present` and `is_absent` holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Maybe;
    ///
    /// let x: Maybe<i32> = Maybe::Absent;
    /// assert!(x.is_absent());
    ///
    /// let y: Maybe<i32> = Maybe::Present(42);
    /// assert!(!y.is_absent());
    /// ```
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    /// Returns `true` if a value equal to the given one is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Maybe;
    ///
    /// let x: Maybe<i32> = Maybe::Present(42);
    /// assert!(x.contains(&42));
    /// assert!(!x.contains(&100));
    ///
    /// let y: Maybe<i32> = Maybe::Absent;
    /// assert!(!y.contains(&42));
    /// ```
    #[inline]
    pub fn contains<U>(&self, value: &U) -> bool
    where
        U: PartialEq<T>,
    {
        matches!(self, Maybe::Present(v) if value == v)
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    ///
    /// Borrows the payload without consuming the original, so combinators that
    /// take `self` by value can still be used on a borrowed `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Maybe;
    ///
    /// let x: Maybe<String> = Maybe::Present("value".to_string());
    /// let len = x.as_ref().map(|s| s.len());
    /// assert_eq!(len, Maybe::Present(5));
    /// assert!(x.is_present()); // still usable
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(v) => Maybe::Present(v),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Returns the present value or a default.
    ///
    /// The default is evaluated eagerly by the caller; use
    /// [`unwrap_or_else`](Maybe::unwrap_or_else) when computing it is expensive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::{present, absent, Maybe};
    ///
    /// assert_eq!(present(42).unwrap_or(24), 42);
    ///
    /// let x: Maybe<i32> = absent();
    /// assert_eq!(x.unwrap_or(24), 24);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Present(v) => v,
            Maybe::Absent => default,
        }
    }

    /// Returns the present value or computes a default from a closure.
    ///
    /// The closure runs only in the absent case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::{present, absent, Maybe};
    ///
    /// assert_eq!(present(42).unwrap_or_else(|| 24), 42);
    ///
    /// let x: Maybe<i32> = absent();
    /// assert_eq!(x.unwrap_or_else(|| 24), 24);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Present(v) => v,
            Maybe::Absent => f(),
        }
    }

    /// Returns the present value, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics if the value is `Absent` with a custom panic message provided by
    /// `msg`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::present;
    ///
    /// assert_eq!(present(42).expect("was absent"), 42);
    /// ```
    ///
    /// ```should_panic
    /// use maybe::{absent, Maybe};
    ///
    /// let x: Maybe<i32> = absent();
    /// x.expect("the world is ending"); // panics with "the world is ending"
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Maybe::Present(v) => v,
            Maybe::Absent => panic!("{}", msg),
        }
    }

    /// Returns the present value, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics if the value is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::present;
    ///
    /// assert_eq!(present(42).unwrap(), 42);
    /// ```
    ///
    /// ```should_panic
    /// use maybe::{absent, Maybe};
    ///
    /// let x: Maybe<i32> = absent();
    /// x.unwrap(); // panics
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Maybe::Present(v) => v,
            Maybe::Absent => panic!("called `Maybe::unwrap()` on an `Absent` value"),
        }
    }

    /// Maps a `Maybe<T>` to `Maybe<U>` by applying a function to the present
    /// value, leaving absence untouched.
    ///
    /// `f` is called at most once, and never on an absent input, even if it has
    /// observable side effects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::{present, absent, Maybe};
    ///
    /// assert_eq!(present(10).map(|x| x * x), present(100));
    ///
    /// let x: Maybe<i32> = absent();
    /// assert_eq!(x.map(|x| x * x), absent());
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Present(v) => Maybe::Present(f(v)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Chains a `Maybe`-producing function, flattening the result.
    ///
    /// Where [`map`](Maybe::map) would produce `Maybe<Maybe<U>>` from a closure
    /// that itself returns a `Maybe`, `and_then` returns the closure's result
    /// directly with no extra wrapping. On an absent input the closure is never
    /// invoked and absence propagates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::{present, absent, Maybe};
    ///
    /// assert_eq!(present(4).and_then(|x| present(x * x)), present(16));
    /// assert_eq!(present(4).and_then(|_| absent::<i32>()), absent());
    ///
    /// let x: Maybe<i32> = absent();
    /// assert_eq!(x.and_then(|x| present(x * x)), absent());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Present(v) => f(v),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Dispatches to exactly one of two handlers and returns its result.
    ///
    /// This is the combinator form of an exhaustive `match`: the caller must
    /// supply a handler for the absent case, so the "no value" branch cannot be
    /// forgotten at the call site. Exactly one handler runs per call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::{present, absent, Maybe};
    ///
    /// let x = present(42);
    /// let msg = x.fold(|v| format!("got {v}"), || "no value".to_string());
    /// assert_eq!(msg, "got 42");
    ///
    /// let y: Maybe<i32> = absent();
    /// let msg = y.fold(|v| format!("got {v}"), || "no value".to_string());
    /// assert_eq!(msg, "no value");
    /// ```
    #[inline]
    pub fn fold<U, P, A>(self, on_present: P, on_absent: A) -> U
    where
        P: FnOnce(T) -> U,
        A: FnOnce() -> U,
    {
        match self {
            Maybe::Present(v) => on_present(v),
            Maybe::Absent => on_absent(),
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes exactly one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::{present, absent, Maybe};
    ///
    /// assert_eq!(present(present(42)).flatten(), present(42));
    /// assert_eq!(present(absent::<i32>()).flatten(), absent());
    ///
    /// let x: Maybe<Maybe<i32>> = absent();
    /// assert_eq!(x.flatten(), absent());
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Maybe::Present(inner) => inner,
            Maybe::Absent => Maybe::Absent,
        }
    }
}

impl<T> Default for Maybe<T> {
    /// Returns `Absent`.
    #[inline]
    fn default() -> Self {
        Maybe::Absent
    }
}
