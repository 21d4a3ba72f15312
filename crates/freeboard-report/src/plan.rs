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

use freeboard_model::request::AccumulationRequest;
use freeboard_probe::num::ProbeNumeric;

/// The number of in-range steps a default probe attempts per direction.
pub const DEFAULT_STEPS: u64 = 5;

/// A pair of accumulation requests probing one side of a type's
/// representable range: a run sized to stay in range, and the same run with
/// a single extra step.
///
/// The step magnitude is `max / steps`, so the in-range run walks the full
/// width of the range while the extra step pushes past the boundary (for
/// additive runs; subtractive runs on the nearly symmetric signed ranges
/// cross zero instead, and the report renders whatever actually happens).
#[derive(Clone, Copy, Debug)]
pub struct ProbePlan<T> {
    within: AccumulationRequest<T>,
    beyond: AccumulationRequest<T>,
}

impl<T> ProbePlan<T>
where
    T: ProbeNumeric,
{
    /// Builds the additive plan: walk up from zero in steps of `max / steps`.
    ///
    /// # Panics
    ///
    /// Panics if `steps` is zero.
    pub fn additive(steps: u64) -> Self {
        let step = Self::step_for(steps);
        Self {
            within: AccumulationRequest::new(T::zero(), step, steps),
            beyond: AccumulationRequest::new(T::zero(), step, steps + 1),
        }
    }

    /// Builds the subtractive plan: walk down from the maximum in steps of
    /// `max / steps`.
    ///
    /// # Panics
    ///
    /// Panics if `steps` is zero.
    pub fn subtractive(steps: u64) -> Self {
        let step = Self::step_for(steps);
        Self {
            within: AccumulationRequest::new(T::max_value(), step, steps),
            beyond: AccumulationRequest::new(T::max_value(), step, steps + 1),
        }
    }

    /// Returns the run sized to stay in range.
    #[inline]
    pub const fn within(&self) -> &AccumulationRequest<T> {
        &self.within
    }

    /// Returns the run with one extra step.
    #[inline]
    pub const fn beyond(&self) -> &AccumulationRequest<T> {
        &self.beyond
    }

    fn step_for(steps: u64) -> T {
        assert!(steps > 0, "ProbePlan: steps must be at least 1");
        let count =
            T::from(steps).expect("ProbePlan: step count must be representable in the probed type");
        T::max_value() / count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_additive_plan_walks_up_from_zero() {
        let plan = ProbePlan::<u8>::additive(5);
        assert_eq!(plan.within().start(), 0);
        assert_eq!(plan.within().step(), 51);
        assert_eq!(plan.within().iterations(), 5);
        assert_eq!(plan.beyond().iterations(), 6);
    }

    #[test]
    fn test_subtractive_plan_walks_down_from_max() {
        let plan = ProbePlan::<u8>::subtractive(5);
        assert_eq!(plan.within().start(), 255);
        assert_eq!(plan.within().step(), 51);
        assert_eq!(plan.beyond().iterations(), 6);
    }

    #[test]
    fn test_float_plans_use_the_type_arithmetic() {
        let plan = ProbePlan::<f64>::additive(5);
        assert_eq!(plan.within().step(), f64::MAX / 5.0);
    }

    #[test]
    #[should_panic(expected = "steps must be at least 1")]
    fn test_zero_steps_is_rejected() {
        let _ = ProbePlan::<u32>::additive(0);
    }
}
