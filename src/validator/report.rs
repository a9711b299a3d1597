use std::fmt::{self, Write};

use crate::acquisition::AcquisitionParameters;
use crate::grid::GridShape;

/// The diagnostics run by [`validate_trace`](super::validate_trace), in
/// execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    /// Enough samples for the padding window
    SampleCount,
    /// Sampling starts near 0 min
    StartTime,
    /// Evenly spaced time steps
    SamplingUniformity,
    /// Runtime and acquisition rate can be derived without large rounding
    AcquisitionRate,
    /// A cycle is close to a whole number of samples
    ModulationAlignment,
    /// The grid is not degenerate
    GridShape,
    /// The padded tail is a small share of the grid
    Padding,
    /// Negative samples that enhancement has to handle
    SignalSign,
}

impl Check {
    /// Every check in execution order
    pub const ALL: [Check; 8] = [
        Check::SampleCount,
        Check::StartTime,
        Check::SamplingUniformity,
        Check::AcquisitionRate,
        Check::ModulationAlignment,
        Check::GridShape,
        Check::Padding,
        Check::SignalSign,
    ];

    /// Human-readable name
    pub fn label(self) -> &'static str {
        match self {
            Check::SampleCount => "Sample count",
            Check::StartTime => "Start time",
            Check::SamplingUniformity => "Sampling uniformity",
            Check::AcquisitionRate => "Acquisition rate",
            Check::ModulationAlignment => "Modulation alignment",
            Check::GridShape => "Grid shape",
            Check::Padding => "Padding",
            Check::SignalSign => "Signal sign",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How one check came out
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Nothing to report
    Pass,
    /// The heatmap can be built but may be distorted
    Warn(String),
    /// The heatmap cannot be built
    Fail(String),
}

impl Outcome {
    /// Explanation attached to a warning or failure
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Pass => None,
            Outcome::Warn(message) | Outcome::Fail(message) => Some(message),
        }
    }

    fn tag(&self) -> (&'static str, Tone) {
        match self {
            Outcome::Pass => ("PASS", Tone::Good),
            Outcome::Warn(_) => ("WARN", Tone::Caution),
            Outcome::Fail(_) => ("FAIL", Tone::Bad),
        }
    }
}

/// A check paired with its outcome
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    /// Which diagnostic ran
    pub check: Check,
    /// What it found
    pub outcome: Outcome,
}

impl Finding {
    pub(crate) fn pass(check: Check) -> Self {
        Self { check, outcome: Outcome::Pass }
    }

    pub(crate) fn warn(check: Check, message: impl Into<String>) -> Self {
        Self { check, outcome: Outcome::Warn(message.into()) }
    }

    pub(crate) fn fail(check: Check, message: impl Into<String>) -> Self {
        Self { check, outcome: Outcome::Fail(message.into()) }
    }
}

/// Overall result of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every check passed
    Passed,
    /// No failures, at least one warning
    PassedWithWarnings,
    /// At least one check failed
    Failed,
}

impl Verdict {
    fn tone(self) -> Tone {
        match self {
            Verdict::Passed => Tone::Good,
            Verdict::PassedWithWarnings => Tone::Caution,
            Verdict::Failed => Tone::Bad,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verdict::Passed => "Validation PASSED",
            Verdict::PassedWithWarnings => "Validation PASSED with warnings",
            Verdict::Failed => "Validation FAILED",
        })
    }
}

/// Diagnostics for one trace and modulation period.
///
/// `params` and `shape` hold what the checks derived, and stay `None` when
/// the corresponding check failed.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Label of the validated trace (usually its file path)
    pub source: String,
    /// Modulation period under test, seconds
    pub modulation_period: f64,
    /// Acquisition parameters, when they could be derived
    pub params: Option<AcquisitionParameters>,
    /// Grid shape, when it is not degenerate
    pub shape: Option<GridShape>,
    /// Check outcomes in execution order
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    /// Create an empty report
    pub fn new(source: impl Into<String>, modulation_period: f64) -> Self {
        Self {
            source: source.into(),
            modulation_period,
            params: None,
            shape: None,
            findings: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Outcome of `check`, or `None` when it was skipped
    pub fn outcome(&self, check: Check) -> Option<&Outcome> {
        self.findings
            .iter()
            .find(|finding| finding.check == check)
            .map(|finding| &finding.outcome)
    }

    fn count(&self, matches: impl Fn(&Outcome) -> bool) -> usize {
        self.findings.iter().filter(|f| matches(&f.outcome)).count()
    }

    /// Number of passed checks
    pub fn passed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Pass))
    }

    /// Number of warnings
    pub fn warnings(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Warn(_)))
    }

    /// Number of failures
    pub fn failures(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Fail(_)))
    }

    /// True when any check failed
    pub fn has_failures(&self) -> bool {
        self.failures() > 0
    }

    /// True when any check warned
    pub fn has_warnings(&self) -> bool {
        self.warnings() > 0
    }

    /// Overall verdict
    pub fn verdict(&self) -> Verdict {
        if self.has_failures() {
            Verdict::Failed
        } else if self.has_warnings() {
            Verdict::PassedWithWarnings
        } else {
            Verdict::Passed
        }
    }

    /// Render for a terminal. Colors need the `colorized_output` feature;
    /// without it this matches `Display`.
    pub fn format_colored(&self) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = self.render(&mut out, true);
        out
    }

    fn render(&self, out: &mut impl Write, colored: bool) -> fmt::Result {
        writeln!(
            out,
            "{} {}",
            paint("GCxGC trace report:", Tone::Heading, colored),
            self.source
        )?;
        writeln!(out, "  modulation period  {} s", self.modulation_period)?;
        if let Some(params) = &self.params {
            writeln!(
                out,
                "  acquisition        {} samples over {} min at {} Hz",
                params.numpoints, params.runtime, params.rate
            )?;
            if let Some(shape) = &self.shape {
                writeln!(
                    out,
                    "  grid               {}, {} padding cells",
                    shape,
                    shape.padding_for(params.numpoints)
                )?;
            }
        }
        writeln!(out)?;

        for finding in &self.findings {
            let (tag, tone) = finding.outcome.tag();
            write!(out, "  {}  {}", paint(tag, tone, colored), finding.check)?;
            match finding.outcome.message() {
                Some(message) => writeln!(out, ": {}", message)?,
                None => writeln!(out)?,
            }
        }

        writeln!(out)?;
        writeln!(
            out,
            "{} passed, {} warnings, {} failed",
            self.passed(),
            self.warnings(),
            self.failures()
        )?;
        let verdict = self.verdict();
        writeln!(out, "{}", paint(&verdict.to_string(), verdict.tone(), colored))
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, false)
    }
}

#[derive(Debug, Clone, Copy)]
enum Tone {
    Heading,
    Good,
    Caution,
    Bad,
}

fn paint(text: &str, tone: Tone, colored: bool) -> String {
    #[cfg(feature = "colorized_output")]
    {
        if colored {
            let styled = console::style(text).bold();
            let styled = match tone {
                Tone::Heading => styled.cyan(),
                Tone::Good => styled.green(),
                Tone::Caution => styled.yellow(),
                Tone::Bad => styled.red(),
            };
            return styled.to_string();
        }
    }
    let _ = (tone, colored);
    text.to_string()
}
