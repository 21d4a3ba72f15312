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

use num_traits::Zero;

/// An immutable description of one bounded accumulation run.
///
/// A request pairs a starting value with a step magnitude and the number of
/// iterations to attempt. The same request drives both additive and
/// subtractive runs; `step` is always a magnitude and must be non-negative.
/// Supplying a negative step is a caller-contract violation with undefined
/// results — it is only caught in debug builds.
///
/// # Examples
///
/// ```rust
/// # use freeboard_model::request::AccumulationRequest;
/// let request = AccumulationRequest::new(0u8, 51, 5);
/// assert_eq!(request.start(), 0);
/// assert_eq!(request.step(), 51);
/// assert_eq!(request.iterations(), 5);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AccumulationRequest<T> {
    start: T,
    step: T,
    iterations: u64,
}

impl<T> AccumulationRequest<T>
where
    T: Copy + PartialOrd + Zero,
{
    /// Creates a new request.
    #[inline]
    pub fn new(start: T, step: T, iterations: u64) -> Self {
        debug_assert!(
            step >= T::zero(),
            "AccumulationRequest: step must be non-negative"
        );
        Self {
            start,
            step,
            iterations,
        }
    }

    /// Returns the initial accumulator value.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the step magnitude applied each iteration.
    #[inline]
    pub const fn step(&self) -> T {
        self.step
    }

    /// Returns the number of steps the run attempts.
    #[inline]
    pub const fn iterations(&self) -> u64 {
        self.iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_return_constructed_values() {
        let request = AccumulationRequest::new(-3i32, 7, 11);
        assert_eq!(request.start(), -3);
        assert_eq!(request.step(), 7);
        assert_eq!(request.iterations(), 11);
    }

    #[test]
    fn test_requests_are_plain_value_types() {
        let a = AccumulationRequest::new(1u16, 2, 3);
        let b = a;
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "step must be non-negative")]
    #[cfg(debug_assertions)]
    fn test_negative_step_is_rejected_in_debug_builds() {
        let _ = AccumulationRequest::new(0i8, -1, 1);
    }
}
