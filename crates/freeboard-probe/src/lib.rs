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

//! # Freeboard Probe
//!
//! The bounded accumulation engine. Two pure routines form the entire
//! surface: [`accumulate::bounded_add`] walks an accumulator upward and
//! stops the instant the next step would exceed the type's maximum
//! representable value; [`accumulate::bounded_sub`] mirrors it against the
//! minimum. Both are generic over [`num::ProbeNumeric`], a single trait
//! alias covering the builtin integer and floating-point types.
//!
//! Each call is a single finite loop over independently owned local state:
//! deterministic, side-effect-free, and safe to invoke from any number of
//! threads without synchronization.

pub mod accumulate;
pub mod num;
