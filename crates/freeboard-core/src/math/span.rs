// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use num_traits::Bounded;

/// A closed interval `[lo, hi]` defined by an inclusive lower and upper bound.
///
/// Both bounds are part of the span. The span of primary interest here is the
/// full representable range of a numeric type, see [`ValueSpan::full_range`].
///
/// # Invariants
/// `lo` must always be less than or equal to `hi`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ValueSpan<T> {
    lo: T,
    hi: T,
}

impl<T> ValueSpan<T>
where
    T: Copy + PartialOrd,
{
    /// Creates a new `ValueSpan`.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freeboard_core::math::span::ValueSpan;
    /// let span = ValueSpan::new(0, 10);
    /// assert!(span.contains(10));
    /// ```
    #[inline]
    pub fn new(lo: T, hi: T) -> Self {
        assert!(
            lo <= hi,
            "Invalid span: lo must be less than or equal to hi"
        );
        Self { lo, hi }
    }

    /// Creates a new `ValueSpan` if the inputs are valid.
    ///
    /// Returns `None` if `lo > hi`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freeboard_core::math::span::ValueSpan;
    /// assert!(ValueSpan::try_new(0, 10).is_some());
    /// assert!(ValueSpan::try_new(10, 0).is_none());
    /// ```
    #[inline]
    pub fn try_new(lo: T, hi: T) -> Option<Self> {
        if lo <= hi {
            Some(Self { lo, hi })
        } else {
            None
        }
    }

    /// Returns the inclusive lower bound of the span.
    #[inline]
    pub const fn lo(&self) -> T {
        self.lo
    }

    /// Returns the inclusive upper bound of the span.
    #[inline]
    pub const fn hi(&self) -> T {
        self.hi
    }

    /// Returns `true` if `value` is contained in the span `[lo, hi]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freeboard_core::math::span::ValueSpan;
    /// let span = ValueSpan::new(-128, 127);
    /// assert!(span.contains(-128));
    /// assert!(span.contains(127));
    /// assert!(!span.contains(128));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.lo <= value && value <= self.hi
    }
}

impl<T> ValueSpan<T>
where
    T: Bounded + Copy + PartialOrd,
{
    /// Returns the full representable span of `T`, taken from the type's own
    /// limits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freeboard_core::math::span::ValueSpan;
    /// let span = ValueSpan::<i8>::full_range();
    /// assert_eq!(span.lo(), -128);
    /// assert_eq!(span.hi(), 127);
    /// ```
    #[inline]
    pub fn full_range() -> Self {
        Self {
            lo: T::min_value(),
            hi: T::max_value(),
        }
    }
}

impl<T> std::fmt::Display for ValueSpan<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_inverted_bounds() {
        assert!(ValueSpan::try_new(1, 0).is_none());
        assert_eq!(ValueSpan::try_new(3, 3), Some(ValueSpan::new(3, 3)));
    }

    #[test]
    #[should_panic(expected = "Invalid span")]
    fn test_new_panics_on_inverted_bounds() {
        let _ = ValueSpan::new(10, 0);
    }

    #[test]
    fn test_contains_is_inclusive_on_both_ends() {
        let span = ValueSpan::new(0u8, 255u8);
        assert!(span.contains(0));
        assert!(span.contains(255));

        let span = ValueSpan::new(-1.5f64, 1.5f64);
        assert!(span.contains(1.5));
        assert!(!span.contains(1.6));
    }

    #[test]
    fn test_full_range_matches_type_limits() {
        let span = ValueSpan::<u16>::full_range();
        assert_eq!((span.lo(), span.hi()), (0, u16::MAX));

        let span = ValueSpan::<f32>::full_range();
        assert_eq!((span.lo(), span.hi()), (f32::MIN, f32::MAX));
    }

    #[test]
    fn test_display_renders_closed_interval() {
        assert_eq!(format!("{}", ValueSpan::new(-128i16, 127i16)), "[-128, 127]");
    }
}
