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

/// The outcome of a bounded accumulation run.
///
/// Exceeding the representable range is not a fault: it is the expected
/// answer of a probe, encoded as the [`ProbeOutcome::RangeExceeded`] variant
/// rather than signaled through any exceptional control path. In both
/// variants the carried value is the accumulator after the last step that
/// was still in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome<T> {
    /// Every requested step was applied without leaving the representable range.
    Completed(T),
    /// The next step would have left the representable range. The run stopped
    /// before applying it; the carried value reflects only the safe steps.
    RangeExceeded(T),
}

impl<T> ProbeOutcome<T>
where
    T: Copy,
{
    /// Returns `true` if every requested step was applied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use freeboard_model::outcome::ProbeOutcome;
    /// assert!(ProbeOutcome::Completed(255u8).succeeded());
    /// assert!(!ProbeOutcome::RangeExceeded(255u8).succeeded());
    /// ```
    #[inline]
    pub fn succeeded(&self) -> bool {
        matches!(self, ProbeOutcome::Completed(_))
    }

    /// Returns the accumulator value carried by either variant — the final
    /// value on completion, or the last in-range value on a detected
    /// boundary violation.
    #[inline]
    pub fn value(&self) -> T {
        match self {
            ProbeOutcome::Completed(value) => *value,
            ProbeOutcome::RangeExceeded(value) => *value,
        }
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        matches!(self, ProbeOutcome::Completed(_))
    }

    #[inline]
    pub fn is_range_exceeded(&self) -> bool {
        matches!(self, ProbeOutcome::RangeExceeded(_))
    }
}

impl<T> std::fmt::Display for ProbeOutcome<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeOutcome::Completed(value) => write!(f, "Completed(value={})", value),
            ProbeOutcome::RangeExceeded(value) => write!(f, "RangeExceeded(value={})", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_succeeded_tracks_variant() {
        assert!(ProbeOutcome::Completed(0i32).succeeded());
        assert!(ProbeOutcome::Completed(0i32).is_completed());
        assert!(ProbeOutcome::RangeExceeded(0i32).is_range_exceeded());
        assert!(!ProbeOutcome::RangeExceeded(0i32).succeeded());
    }

    #[test]
    fn test_value_is_carried_by_both_variants() {
        assert_eq!(ProbeOutcome::Completed(42u8).value(), 42);
        assert_eq!(ProbeOutcome::RangeExceeded(204u8).value(), 204);
    }

    #[test]
    fn test_display_formats_variant_and_value() {
        assert_eq!(
            format!("{}", ProbeOutcome::Completed(255u8)),
            "Completed(value=255)"
        );
        assert_eq!(
            format!("{}", ProbeOutcome::RangeExceeded(-5i8)),
            "RangeExceeded(value=-5)"
        );
    }
}
