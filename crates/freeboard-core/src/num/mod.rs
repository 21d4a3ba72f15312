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

//! # Numeric Foundations
//!
//! Traits and utilities for range-aware numeric programming. This module
//! consolidates compile-time range limits and by-value guarded arithmetic
//! traits that expose uniform, generic APIs over every builtin fixed-width
//! numeric type.
//!
//! ## Submodules
//!
//! - `limits`: The associated-constant trait `RangeLimits` (`MIN_VALUE`,
//!   `MAX_VALUE`) implemented for all core numeric types, so the
//!   representable range of a type is taken from its own definition rather
//!   than computed.
//! - `ops`: Range-guarded arithmetic traits (by value) for addition and
//!   subtraction that pre-check a step against the type's bounds and return
//!   `Option<T>` instead of wrapping, saturating, or panicking.
//!
//! ## Motivation
//!
//! Probing overflow behavior demands that the boundary check itself never
//! overflow. These modules keep the check expressed in each type's own
//! arithmetic, so the same policy covers signed, unsigned, and
//! floating-point types alike.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod limits;
pub mod ops;
