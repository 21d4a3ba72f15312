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

//! # Guarded Numeric Operations
//!
//! Unified, by-value range-guarded operation traits for the builtin numeric
//! primitives. The traits in this module pre-check each step against the
//! type's representable range and refuse it (`None`) instead of wrapping,
//! saturating, or panicking.
//!
//! ## Submodules
//!
//! - `guarded_arithmetic`: `GuardedAddVal` and `GuardedSubVal`, returning
//!   `Option<T>` where `None` means the step would have left the
//!   representable range.
//!
//! ## Motivation
//!
//! Unlike the intrinsic `checked_*` family, the guard expression is stated
//! in the type's own arithmetic (`self > MAX - step`), which extends the
//! same policy to floating-point types where no intrinsic checked
//! operations exist.
//!
//! Refer to the submodule for examples and trait lists.

pub mod guarded_arithmetic;
