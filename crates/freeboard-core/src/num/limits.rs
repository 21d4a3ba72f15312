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

/// A trait for numeric types whose representable range is fixed and known at
/// compile time.
///
/// The limits are the type's own `MIN`/`MAX` associated constants, never a
/// computed quantity, so the trait holds for integer and floating-point
/// types alike. For the floating-point implementations `MIN_VALUE` is the
/// most negative finite value (`f32::MIN`, `f64::MIN`), not the smallest
/// positive one.
///
/// # Examples
///
/// ```rust
/// # use freeboard_core::num::limits::RangeLimits;
/// assert_eq!(<u8 as RangeLimits>::MAX_VALUE, 255);
/// assert_eq!(<i16 as RangeLimits>::MIN_VALUE, -32_768);
/// assert_eq!(<f64 as RangeLimits>::MAX_VALUE, f64::MAX);
/// ```
pub trait RangeLimits {
    /// The smallest value representable by the implementing type.
    const MIN_VALUE: Self;
    /// The largest value representable by the implementing type.
    const MAX_VALUE: Self;
}

macro_rules! impl_range_limits_for {
    ($t:ty) => {
        impl RangeLimits for $t {
            const MIN_VALUE: Self = <$t>::MIN;
            const MAX_VALUE: Self = <$t>::MAX;
        }
    };
}

impl_range_limits_for!(u8);
impl_range_limits_for!(u16);
impl_range_limits_for!(u32);
impl_range_limits_for!(u64);
impl_range_limits_for!(usize);
impl_range_limits_for!(u128);

impl_range_limits_for!(i8);
impl_range_limits_for!(i16);
impl_range_limits_for!(i32);
impl_range_limits_for!(i64);
impl_range_limits_for!(isize);
impl_range_limits_for!(i128);

impl_range_limits_for!(f32);
impl_range_limits_for!(f64);
