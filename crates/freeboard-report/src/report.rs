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

use freeboard_core::math::span::ValueSpan;
use freeboard_model::{kind::NumericKind, outcome::ProbeOutcome, request::AccumulationRequest};
use freeboard_probe::{
    accumulate::{bounded_add, bounded_sub},
    num::ProbeNumeric,
};
use smallvec::SmallVec;

use crate::plan::{DEFAULT_STEPS, ProbePlan};

/// One rendered probe block for a single numeric kind: a title line naming
/// the kind and its representable range, followed by one line per run.
#[derive(Clone, Debug)]
pub struct KindReport {
    title: String,
    lines: SmallVec<[String; 2]>,
}

impl KindReport {
    /// Returns the title line of the block.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the rendered run lines of the block.
    #[inline]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl std::fmt::Display for KindReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)?;
        for line in &self.lines {
            write!(f, "\n    {}", line)?;
        }
        Ok(())
    }
}

fn render_line<T>(
    verb: &str,
    boundary: &str,
    request: &AccumulationRequest<T>,
    outcome: ProbeOutcome<T>,
) -> String
where
    T: ProbeNumeric,
{
    match outcome {
        ProbeOutcome::Completed(value) => format!(
            "{} ({}, {}, {}) = {}",
            verb,
            request.start(),
            request.step(),
            request.iterations(),
            value
        ),
        ProbeOutcome::RangeExceeded(value) => format!(
            "{} ({}, {}, {}) -> {} detected, last in-range value = {}",
            verb,
            request.start(),
            request.step(),
            request.iterations(),
            boundary,
            value
        ),
    }
}

fn overflow_report<T>(kind: NumericKind, steps: u64) -> KindReport
where
    T: ProbeNumeric,
{
    let plan = ProbePlan::<T>::additive(steps);
    let mut lines = SmallVec::new();
    lines.push(render_line(
        "add",
        "overflow",
        plan.within(),
        bounded_add(plan.within()),
    ));
    lines.push(render_line(
        "add",
        "overflow",
        plan.beyond(),
        bounded_add(plan.beyond()),
    ));
    KindReport {
        title: format!(
            "Overflow probe of type {} with range {}",
            kind,
            ValueSpan::<T>::full_range()
        ),
        lines,
    }
}

fn underflow_report<T>(kind: NumericKind, steps: u64) -> KindReport
where
    T: ProbeNumeric,
{
    let plan = ProbePlan::<T>::subtractive(steps);
    let mut lines = SmallVec::new();
    lines.push(render_line(
        "sub",
        "underflow",
        plan.within(),
        bounded_sub(plan.within()),
    ));
    lines.push(render_line(
        "sub",
        "underflow",
        plan.beyond(),
        bounded_sub(plan.beyond()),
    ));
    KindReport {
        title: format!(
            "Underflow probe of type {} with range {}",
            kind,
            ValueSpan::<T>::full_range()
        ),
        lines,
    }
}

macro_rules! dispatch_kind {
    ($kind:expr, $probe:ident, $steps:expr) => {
        match $kind {
            NumericKind::I8 => $probe::<i8>($kind, $steps),
            NumericKind::I16 => $probe::<i16>($kind, $steps),
            NumericKind::I32 => $probe::<i32>($kind, $steps),
            NumericKind::I64 => $probe::<i64>($kind, $steps),
            NumericKind::U8 => $probe::<u8>($kind, $steps),
            NumericKind::U16 => $probe::<u16>($kind, $steps),
            NumericKind::U32 => $probe::<u32>($kind, $steps),
            NumericKind::U64 => $probe::<u64>($kind, $steps),
            NumericKind::F32 => $probe::<f32>($kind, $steps),
            NumericKind::F64 => $probe::<f64>($kind, $steps),
        }
    };
}

/// Runs the additive probe pair for `kind` and renders its block.
pub fn overflow_report_for(kind: NumericKind, steps: u64) -> KindReport {
    dispatch_kind!(kind, overflow_report, steps)
}

/// Runs the subtractive probe pair for `kind` and renders its block.
pub fn underflow_report_for(kind: NumericKind, steps: u64) -> KindReport {
    dispatch_kind!(kind, underflow_report, steps)
}

/// Builder for [`RangeProbeReport`].
#[derive(Clone, Copy, Debug)]
pub struct ReportBuilder {
    steps: u64,
    banner_width: usize,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportBuilder {
    /// Creates a new builder with the default plan: five in-range steps and
    /// a fifty-column banner.
    #[inline]
    pub fn new() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            banner_width: 50,
        }
    }

    /// Sets the number of in-range steps probed per direction.
    ///
    /// # Panics
    ///
    /// Panics if `steps` is zero.
    #[inline]
    pub fn with_steps(mut self, steps: u64) -> Self {
        assert!(steps > 0, "ReportBuilder: steps must be at least 1");
        self.steps = steps;
        self
    }

    /// Sets the width of the section banner lines.
    #[inline]
    pub fn with_banner_width(mut self, width: usize) -> Self {
        self.banner_width = width;
        self
    }

    /// Builds the report runner.
    #[inline]
    pub fn build(self) -> RangeProbeReport {
        RangeProbeReport {
            steps: self.steps,
            banner_width: self.banner_width,
        }
    }
}

/// The console narrator: walks the whole kind roster in both directions and
/// prints one block per kind.
#[derive(Clone, Copy, Debug)]
pub struct RangeProbeReport {
    steps: u64,
    banner_width: usize,
}

impl RangeProbeReport {
    /// Returns a builder with the default plan.
    #[inline]
    pub fn builder() -> ReportBuilder {
        ReportBuilder::new()
    }

    /// Returns the number of in-range steps probed per direction.
    #[inline]
    pub const fn steps(&self) -> u64 {
        self.steps
    }

    /// Returns the configured banner width.
    #[inline]
    pub const fn banner_width(&self) -> usize {
        self.banner_width
    }

    /// Runs every probe in the roster and prints the narration to stdout.
    pub fn run(&self) {
        println!("Starting numeric overflow / underflow probes!");

        println!("Running overflow probes...");
        self.print_section("*** Running Overflow Probes ***");
        for kind in NumericKind::ALL {
            println!("{}", overflow_report_for(kind, self.steps));
        }

        println!("Running underflow probes...");
        self.print_section("*** Running Underflow Probes ***");
        for kind in NumericKind::ALL {
            println!("{}", underflow_report_for(kind, self.steps));
        }

        println!();
        println!("All numeric overflow / underflow probes complete!");
    }

    fn print_section(&self, heading: &str) {
        let banner = "*".repeat(self.banner_width);
        println!();
        println!("{}", banner);
        println!("{}", heading);
        println!("{}", banner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8_overflow_block_renders_both_runs() {
        let report = overflow_report_for(NumericKind::U8, 5);
        assert_eq!(report.title(), "Overflow probe of type u8 with range [0, 255]");
        assert_eq!(report.lines()[0], "add (0, 51, 5) = 255");
        assert_eq!(
            report.lines()[1],
            "add (0, 51, 6) -> overflow detected, last in-range value = 255"
        );
    }

    #[test]
    fn test_u8_underflow_block_renders_both_runs() {
        let report = underflow_report_for(NumericKind::U8, 5);
        assert_eq!(report.lines()[0], "sub (255, 51, 5) = 0");
        assert_eq!(
            report.lines()[1],
            "sub (255, 51, 6) -> underflow detected, last in-range value = 0"
        );
    }

    #[test]
    fn test_signed_underflow_extra_step_crosses_zero_instead() {
        // Walking down from i32::MAX crosses zero without reaching the lower
        // bound, so the extra step still completes and the line reports the
        // value rather than a detection.
        let report = underflow_report_for(NumericKind::I32, 5);
        let step = i32::MAX / 5;
        assert_eq!(
            report.lines()[1],
            format!("sub ({}, {}, 6) = {}", i32::MAX, step, 2 - step)
        );
    }

    #[test]
    fn test_display_indents_run_lines_under_the_title() {
        let report = overflow_report_for(NumericKind::U8, 5);
        let rendered = format!("{}", report);
        let mut lines = rendered.lines();
        assert_eq!(
            lines.next(),
            Some("Overflow probe of type u8 with range [0, 255]")
        );
        assert_eq!(lines.next(), Some("    add (0, 51, 5) = 255"));
    }

    #[test]
    fn test_builder_defaults_and_overrides() {
        let report = RangeProbeReport::builder().build();
        assert_eq!(report.steps(), DEFAULT_STEPS);
        assert_eq!(report.banner_width(), 50);

        let report = RangeProbeReport::builder()
            .with_steps(7)
            .with_banner_width(30)
            .build();
        assert_eq!(report.steps(), 7);
        assert_eq!(report.banner_width(), 30);
    }

    #[test]
    fn test_every_kind_produces_a_detection_in_the_additive_direction() {
        for kind in NumericKind::ALL {
            let report = overflow_report_for(kind, 5);
            assert!(
                report.lines()[1].contains("overflow detected"),
                "kind {} did not detect overflow: {}",
                kind,
                report.lines()[1]
            );
        }
    }
}
