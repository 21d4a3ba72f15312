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

//! # Freeboard Core
//!
//! Foundational numeric primitives for the Freeboard range-probing toolkit.
//! In shipbuilding, the freeboard is the margin between the waterline and the
//! deck edge; here it is the headroom between an accumulated value and the
//! edge of its type's representable range. This crate consolidates the
//! reusable numeric building blocks that the probe engine and reporting
//! crates are built on.
//!
//! ## Modules
//!
//! - `num`: Associated-constant range limits (`RangeLimits`) for all core
//!   numeric types, and by-value range-guarded arithmetic traits
//!   (`GuardedAddVal`, `GuardedSubVal`) that refuse a step instead of
//!   wrapping or saturating past a type's bounds.
//! - `math`: The closed value span `[lo, hi]` primitive, including the full
//!   representable span of a numeric type.
//!
//! ## Purpose
//!
//! These primitives let the higher-level crates stay generic over every
//! builtin fixed-width numeric type, integer and floating-point alike, while
//! keeping the boundary-check policy in exactly one place.
//!
//! Refer to each module for detailed APIs and examples.

pub mod math;
pub mod num;
