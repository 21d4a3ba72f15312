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

use freeboard_model::{outcome::ProbeOutcome, request::AccumulationRequest};

use crate::num::ProbeNumeric;

/// Runs an additive bounded accumulation.
///
/// Performs up to `iterations` additions of `step` onto an accumulator
/// initialized to `start`. Before each addition the next step is checked
/// against the type's maximum; the instant an addition would overflow, the
/// run stops and reports [`ProbeOutcome::RangeExceeded`] carrying the
/// accumulator unchanged by the refused step. A request with zero
/// iterations completes immediately with the start value.
///
/// # Examples
///
/// ```rust
/// # use freeboard_model::request::AccumulationRequest;
/// # use freeboard_model::outcome::ProbeOutcome;
/// # use freeboard_probe::accumulate::bounded_add;
/// // Five steps of 51 walk a u8 from 0 exactly onto its maximum.
/// let outcome = bounded_add(&AccumulationRequest::new(0u8, 51, 5));
/// assert_eq!(outcome, ProbeOutcome::Completed(255));
///
/// // A sixth step would overflow; the last in-range value is reported.
/// let outcome = bounded_add(&AccumulationRequest::new(0u8, 51, 6));
/// assert_eq!(outcome, ProbeOutcome::RangeExceeded(255));
/// ```
pub fn bounded_add<T>(request: &AccumulationRequest<T>) -> ProbeOutcome<T>
where
    T: ProbeNumeric,
{
    let mut value = request.start();
    for _ in 0..request.iterations() {
        value = match value.guarded_add_val(request.step()) {
            Some(next) => next,
            None => return ProbeOutcome::RangeExceeded(value),
        };
    }
    ProbeOutcome::Completed(value)
}

/// Runs a subtractive bounded accumulation.
///
/// Mirror of [`bounded_add`] against the type's minimum: before each
/// subtraction of the `step` magnitude the next step is checked against the
/// lower bound, and the run stops with [`ProbeOutcome::RangeExceeded`] the
/// instant a subtraction would underflow.
pub fn bounded_sub<T>(request: &AccumulationRequest<T>) -> ProbeOutcome<T>
where
    T: ProbeNumeric,
{
    let mut value = request.start();
    for _ in 0..request.iterations() {
        value = match value.guarded_sub_val(request.step()) {
            Some(next) => next,
            None => return ProbeOutcome::RangeExceeded(value),
        };
    }
    ProbeOutcome::Completed(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use freeboard_core::math::span::ValueSpan;

    fn add<T: ProbeNumeric>(start: T, step: T, iterations: u64) -> ProbeOutcome<T> {
        bounded_add(&AccumulationRequest::new(start, step, iterations))
    }
    fn sub<T: ProbeNumeric>(start: T, step: T, iterations: u64) -> ProbeOutcome<T> {
        bounded_sub(&AccumulationRequest::new(start, step, iterations))
    }

    #[test]
    fn test_u8_add_reaches_max_then_detects_overflow() {
        assert_eq!(add(0u8, 51, 5), ProbeOutcome::Completed(255));
        assert_eq!(add(0u8, 51, 6), ProbeOutcome::RangeExceeded(255));
    }

    #[test]
    fn test_u8_sub_reaches_zero_then_detects_underflow() {
        assert_eq!(sub(255u8, 51, 5), ProbeOutcome::Completed(0));
        assert_eq!(sub(255u8, 51, 6), ProbeOutcome::RangeExceeded(0));
    }

    #[test]
    fn test_i32_add_stops_after_five_safe_steps() {
        let step = i32::MAX / 5;
        assert_eq!(add(0i32, step, 5), ProbeOutcome::Completed(5 * step));
        assert_eq!(add(0i32, step, 6), ProbeOutcome::RangeExceeded(5 * step));
    }

    #[test]
    fn test_signed_sub_from_max_crosses_zero_without_underflow() {
        // The signed range is nearly symmetric, so walking down from MAX
        // passes zero and keeps going; one extra step does not underflow.
        let step = i32::MAX / 5;
        assert_eq!(sub(i32::MAX, step, 5), ProbeOutcome::Completed(2));
        assert_eq!(
            sub(i32::MAX, step, 6),
            ProbeOutcome::Completed(2 - step)
        );
    }

    #[test]
    fn test_zero_iterations_always_completes_with_start() {
        assert_eq!(add(17u16, 9, 0), ProbeOutcome::Completed(17));
        assert_eq!(sub(17u16, 9, 0), ProbeOutcome::Completed(17));
        // Even when the very first step would already violate the bound.
        assert_eq!(add(255u8, 51, 0), ProbeOutcome::Completed(255));
        assert_eq!(sub(0u8, 51, 0), ProbeOutcome::Completed(0));
    }

    #[test]
    fn test_failure_point_is_monotonic_in_iterations() {
        let mut first_failure = None;
        for n in 0..20u64 {
            let outcome = add(0u8, 51, n);
            match first_failure {
                None => {
                    if outcome.is_range_exceeded() {
                        first_failure = Some(n);
                    }
                }
                Some(_) => {
                    // Once a run fails, every longer run reproduces the same
                    // stop point and value.
                    assert_eq!(outcome, ProbeOutcome::RangeExceeded(255));
                }
            }
        }
        assert_eq!(first_failure, Some(6));
    }

    #[test]
    fn test_failure_value_reflects_only_safe_steps() {
        let step = i64::MAX / 5;
        for n in 6..10u64 {
            let outcome = add(0i64, step, n);
            assert_eq!(outcome, ProbeOutcome::RangeExceeded(5 * step));
        }
    }

    #[test]
    fn test_completed_values_stay_in_range() {
        let span = ValueSpan::<i16>::full_range();
        let step = i16::MAX / 5;
        for n in 0..8u64 {
            let outcome = add(0i16, step, n);
            assert!(span.contains(outcome.value()));
        }
    }

    #[test]
    fn test_f32_add_detects_overflow_on_exact_boundary() {
        let half = f32::MAX / 2.0;
        assert_eq!(add(0.0f32, half, 2), ProbeOutcome::Completed(f32::MAX));
        assert_eq!(add(0.0f32, half, 3), ProbeOutcome::RangeExceeded(f32::MAX));
    }

    #[test]
    fn test_f64_sub_detects_underflow_on_exact_boundary() {
        let half = f64::MAX / 2.0;
        assert_eq!(sub(0.0f64, half, 2), ProbeOutcome::Completed(f64::MIN));
        assert_eq!(sub(0.0f64, half, 3), ProbeOutcome::RangeExceeded(f64::MIN));
    }

    #[test]
    fn test_float_steps_below_ulp_saturate_at_max() {
        // `MAX - step` rounds back to MAX for steps this small, so the guard
        // keeps passing while the additions round back into MAX. The run
        // completes at the bound instead of detecting overflow.
        assert_eq!(add(f32::MAX, 1.0f32, 10), ProbeOutcome::Completed(f32::MAX));
    }

    #[test]
    fn test_zero_step_never_trips_the_guard() {
        assert_eq!(add(u64::MAX, 0u64, 3), ProbeOutcome::Completed(u64::MAX));
        assert_eq!(sub(0i8, 0i8, 3), ProbeOutcome::Completed(0));
    }
}
