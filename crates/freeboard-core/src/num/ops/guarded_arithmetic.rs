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

use core::ops::{Add, Sub};

/// A trait for types that support range-guarded addition by value (no references).
///
/// The guard is a pre-check against the type's upper bound: the step is
/// refused when `self > MAX - step`, with the right-hand side evaluated in
/// the type's own arithmetic. For integers this is exact. For floating-point
/// types `MAX - step` may itself round near the top of the range; that is an
/// accepted property of the policy, and it is what lets one expression cover
/// every builtin numeric type.
///
/// `step` must be non-negative. A negative step is outside the domain of
/// this trait: the guard expression is then free to misjudge the operation
/// or panic in debug builds.
///
/// # Examples
///
/// ```rust
/// # use freeboard_core::num::ops::guarded_arithmetic::GuardedAddVal;
/// let a: u8 = 200;
/// assert_eq!(a.guarded_add_val(100), None); // 200 + 100 would exceed 255
/// assert_eq!(a.guarded_add_val(55), Some(255)); // Lands exactly on the bound
/// ```
pub trait GuardedAddVal: Sized + Add<Self, Output = Self> {
    /// Adds `step` if the result stays representable, returning `None` if the
    /// addition would exceed the type's maximum value.
    fn guarded_add_val(self, step: Self) -> Option<Self>;
}

macro_rules! guarded_add_impl_val {
    ($t:ty) => {
        impl GuardedAddVal for $t {
            #[inline(always)]
            fn guarded_add_val(self, step: $t) -> Option<$t> {
                if self > <$t>::MAX - step {
                    None
                } else {
                    Some(self + step)
                }
            }
        }
    };
}

guarded_add_impl_val!(u8);
guarded_add_impl_val!(u16);
guarded_add_impl_val!(u32);
guarded_add_impl_val!(u64);
guarded_add_impl_val!(usize);
guarded_add_impl_val!(u128);

guarded_add_impl_val!(i8);
guarded_add_impl_val!(i16);
guarded_add_impl_val!(i32);
guarded_add_impl_val!(i64);
guarded_add_impl_val!(isize);
guarded_add_impl_val!(i128);

guarded_add_impl_val!(f32);
guarded_add_impl_val!(f64);

/// A trait for types that support range-guarded subtraction by value (no references).
///
/// Mirror of [`GuardedAddVal`] for the lower bound: the step is refused when
/// `self < MIN + step`. `step` is a magnitude and must be non-negative; the
/// same caller contract as for guarded addition applies.
///
/// # Examples
///
/// ```rust
/// # use freeboard_core::num::ops::guarded_arithmetic::GuardedSubVal;
/// let a: u8 = 50;
/// assert_eq!(a.guarded_sub_val(51), None); // 50 - 51 would drop below 0
/// assert_eq!(a.guarded_sub_val(50), Some(0)); // Lands exactly on the bound
///
/// let b: i8 = -100;
/// assert_eq!(b.guarded_sub_val(28), Some(-128));
/// assert_eq!(b.guarded_sub_val(29), None);
/// ```
pub trait GuardedSubVal: Sized + Sub<Self, Output = Self> {
    /// Subtracts `step` if the result stays representable, returning `None`
    /// if the subtraction would fall below the type's minimum value.
    fn guarded_sub_val(self, step: Self) -> Option<Self>;
}

macro_rules! guarded_sub_impl_val {
    ($t:ty) => {
        impl GuardedSubVal for $t {
            #[inline(always)]
            fn guarded_sub_val(self, step: $t) -> Option<$t> {
                if self < <$t>::MIN + step {
                    None
                } else {
                    Some(self - step)
                }
            }
        }
    };
}

guarded_sub_impl_val!(u8);
guarded_sub_impl_val!(u16);
guarded_sub_impl_val!(u32);
guarded_sub_impl_val!(u64);
guarded_sub_impl_val!(usize);
guarded_sub_impl_val!(u128);

guarded_sub_impl_val!(i8);
guarded_sub_impl_val!(i16);
guarded_sub_impl_val!(i32);
guarded_sub_impl_val!(i64);
guarded_sub_impl_val!(isize);
guarded_sub_impl_val!(i128);

guarded_sub_impl_val!(f32);
guarded_sub_impl_val!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn guarded_add_val<T: GuardedAddVal>(a: T, step: T) -> Option<T> {
        a.guarded_add_val(step)
    }
    fn guarded_sub_val<T: GuardedSubVal>(a: T, step: T) -> Option<T> {
        a.guarded_sub_val(step)
    }

    #[test]
    fn test_guarded_add_val_unsigned() {
        assert_eq!(guarded_add_val(255u8, 1u8), None);
        assert_eq!(guarded_add_val(254u8, 1u8), Some(255u8));
        assert_eq!(guarded_add_val(255u8, 0u8), Some(255u8));
        assert_eq!(guarded_add_val(u64::MAX - 10, 10u64), Some(u64::MAX));
        assert_eq!(guarded_add_val(u64::MAX - 10, 11u64), None);
    }

    #[test]
    fn test_guarded_add_val_signed() {
        assert_eq!(guarded_add_val(100i8, 27i8), Some(127i8));
        assert_eq!(guarded_add_val(101i8, 27i8), None);
        // Negative accumulators still have the full headroom to the top.
        assert_eq!(guarded_add_val(-128i8, 127i8), Some(-1i8));
        assert_eq!(guarded_add_val(i32::MAX, 1i32), None);
    }

    #[test]
    fn test_guarded_sub_val_unsigned() {
        assert_eq!(guarded_sub_val(0u8, 1u8), None);
        assert_eq!(guarded_sub_val(51u8, 51u8), Some(0u8));
        assert_eq!(guarded_sub_val(50u8, 51u8), None);
        assert_eq!(guarded_sub_val(0u8, 0u8), Some(0u8));
    }

    #[test]
    fn test_guarded_sub_val_signed() {
        assert_eq!(guarded_sub_val(-100i8, 28i8), Some(-128i8));
        assert_eq!(guarded_sub_val(-100i8, 29i8), None);
        assert_eq!(guarded_sub_val(i64::MIN, 1i64), None);
        assert_eq!(guarded_sub_val(i64::MIN + 1, 1i64), Some(i64::MIN));
    }

    #[test]
    fn test_guarded_add_val_float_exact_boundary() {
        let half = f32::MAX / 2.0;
        assert_eq!(guarded_add_val(half, half), Some(f32::MAX));
        assert_eq!(guarded_add_val(f32::MAX, f32::MAX), None);

        let half = f64::MAX / 2.0;
        assert_eq!(guarded_add_val(half, half), Some(f64::MAX));
        assert_eq!(guarded_add_val(f64::MAX, f64::MAX), None);
    }

    #[test]
    fn test_guarded_sub_val_float_exact_boundary() {
        // f32::MIN == -f32::MAX, so MIN + MAX/2 == MIN/2 exactly.
        let half = f32::MIN / 2.0;
        assert_eq!(guarded_sub_val(half, f32::MAX / 2.0), Some(f32::MIN));
        assert_eq!(guarded_sub_val(f32::MIN, f32::MAX), None);
    }

    #[test]
    fn test_guarded_add_val_float_tiny_step_rounds_into_max() {
        // Near the top of the range `MAX - step` rounds back to MAX for steps
        // below half an ulp, so the guard passes and the addition rounds back
        // into MAX. The value saturates instead of being refused.
        assert_eq!(guarded_add_val(f32::MAX, 1.0f32), Some(f32::MAX));
    }
}
