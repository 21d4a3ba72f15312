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

//! # Freeboard Model
//!
//! **The Core Domain Model for the Freeboard Range-Probing Toolkit.**
//!
//! This crate defines the data structures exchanged between callers and the
//! probe engine (`freeboard_probe`).
//!
//! ## Architecture
//!
//! * **`request`**: The immutable [`request::AccumulationRequest`] describing
//!   a single bounded accumulation run (`start`, `step`, `iterations`).
//! * **`outcome`**: The [`outcome::ProbeOutcome`] a run produces — either
//!   every step applied, or the run stopped at the last in-range value.
//! * **`kind`**: The closed [`kind::NumericKind`] tag over the builtin
//!   numeric types probed by the reporting harness, with a static label
//!   table replacing any runtime type introspection.
//!
//! ## Design Philosophy
//!
//! 1.  **Immutability**: A request never changes after construction; every
//!     run is a stateless computation over value types.
//! 2.  **No exceptional control flow**: Exceeding a range is a normal,
//!     reportable outcome carried in the result, never a panic.

pub mod kind;
pub mod outcome;
pub mod request;
