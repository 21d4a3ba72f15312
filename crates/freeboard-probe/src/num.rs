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

//! # Probe Numeric Trait
//!
//! Unified numeric bounds for the accumulation engine. `ProbeNumeric`
//! specifies the capabilities a type needs before it can be probed:
//! intrinsic traits from `num_traits` (`Num`, `NumCast`, `Bounded`), the
//! compile-time range limits and by-value guarded arithmetic traits from
//! `freeboard_core`, and formatting for report rendering.
//!
//! ## Motivation
//!
//! The engine should remain generic over every builtin fixed-width numeric
//! type — signed, unsigned, and floating-point — while retaining one
//! boundary-check policy. This trait collects the necessary bounds into a
//! single alias, simplifying generic signatures across the engine and the
//! reporting harness.

use std::fmt;

use freeboard_core::num::{
    limits::RangeLimits,
    ops::guarded_arithmetic::{GuardedAddVal, GuardedSubVal},
};
use num_traits::{Bounded, Num, NumCast};

/// A trait alias for numeric types the probe routines operate on. These are
/// the builtin fixed-width integer and floating-point types: `i8` through
/// `i64`, `u8` through `u64`, `f32` and `f64` (the wider `i128`/`u128` and
/// the pointer-sized types satisfy the bounds as well).
pub trait ProbeNumeric:
    Num
    + NumCast
    + Bounded
    + Copy
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + RangeLimits
    + GuardedAddVal
    + GuardedSubVal
    + Send
    + Sync
{
}

impl<T> ProbeNumeric for T where
    T: Num
        + NumCast
        + Bounded
        + Copy
        + PartialOrd
        + fmt::Debug
        + fmt::Display
        + RangeLimits
        + GuardedAddVal
        + GuardedSubVal
        + Send
        + Sync
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_probe_numeric<T: ProbeNumeric>() {}

    #[test]
    fn test_full_roster_satisfies_the_alias() {
        assert_probe_numeric::<i8>();
        assert_probe_numeric::<i16>();
        assert_probe_numeric::<i32>();
        assert_probe_numeric::<i64>();
        assert_probe_numeric::<u8>();
        assert_probe_numeric::<u16>();
        assert_probe_numeric::<u32>();
        assert_probe_numeric::<u64>();
        assert_probe_numeric::<f32>();
        assert_probe_numeric::<f64>();
    }
}
