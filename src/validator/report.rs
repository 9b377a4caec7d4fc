use std::fmt;

#[cfg(feature = "colorized_output")]
use console::{style, Emoji};

/// Part of an ImagCDF file a check covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Global attributes
    Metadata,
    /// Geomagnetic elements and temperature channels
    Channels,
    /// `DEPEND_0` timestamp variables
    TimeSeries,
    /// Variables outside the schema
    Structure,
}

impl Section {
    /// Report order
    pub const ALL: [Section; 4] = [
        Section::Metadata,
        Section::Channels,
        Section::TimeSeries,
        Section::Structure,
    ];

    /// Heading used when printing the report
    pub fn heading(self) -> &'static str {
        match self {
            Section::Metadata => "Metadata",
            Section::Channels => "Channels",
            Section::TimeSeries => "Time series",
            Section::Structure => "Structure",
        }
    }
}

/// Outcome of one check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed
    Ok,
    /// Usable, but something looks off
    Warning(String),
    /// Check failed
    Failed(String),
}

impl CheckStatus {
    fn symbol(&self) -> &'static str {
        match self {
            CheckStatus::Ok => "✓",
            CheckStatus::Warning(_) => "⚠",
            CheckStatus::Failed(_) => "✗",
        }
    }

    fn message(&self) -> Option<&str> {
        match self {
            CheckStatus::Ok => None,
            CheckStatus::Warning(msg) | CheckStatus::Failed(msg) => Some(msg),
        }
    }
}

/// One named check and where it belongs in the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationCheck {
    /// Section the check is listed under
    pub section: Section,
    /// Name of the validation check
    pub name: String,
    /// Result status of the check
    pub status: CheckStatus,
}

impl ValidationCheck {
    pub(crate) fn new(section: Section, name: impl Into<String>, status: CheckStatus) -> Self {
        Self {
            section,
            name: name.into(),
            status,
        }
    }

    pub(crate) fn ok(section: Section, name: impl Into<String>) -> Self {
        Self::new(section, name, CheckStatus::Ok)
    }

    pub(crate) fn warning(section: Section, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(section, name, CheckStatus::Warning(message.into()))
    }

    pub(crate) fn failed(section: Section, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(section, name, CheckStatus::Failed(message.into()))
    }
}

/// Passed, warning and failed counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Checks that passed
    pub passed: usize,
    /// Checks that passed with a warning
    pub warnings: usize,
    /// Checks that failed
    pub failed: usize,
}

impl Tally {
    fn of<'a>(checks: impl IntoIterator<Item = &'a ValidationCheck>) -> Self {
        checks.into_iter().fold(Self::default(), |mut tally, check| {
            tally.add(&check.status);
            tally
        })
    }

    fn add(&mut self, status: &CheckStatus) {
        match status {
            CheckStatus::Ok => self.passed += 1,
            CheckStatus::Warning(_) => self.warnings += 1,
            CheckStatus::Failed(_) => self.failed += 1,
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} passed, {} warnings, {} failed",
            self.passed, self.warnings, self.failed
        )
    }
}

/// Complete validation report for one ImagCDF container
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Individual check results, in the order they ran
    pub checks: Vec<ValidationCheck>,
    /// What was validated, usually a file path
    pub target: String,
}

impl ValidationReport {
    /// Create an empty report for `target`
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            checks: Vec::new(),
            target: target.into(),
        }
    }

    /// Add a check result to the report
    pub fn add_check(&mut self, check: ValidationCheck) {
        self.checks.push(check);
    }

    /// Look up a check by name
    pub fn check(&self, name: &str) -> Option<&ValidationCheck> {
        self.checks.iter().find(|c| c.name == name)
    }

    /// Checks listed under one section, in the order they ran
    pub fn section(&self, section: Section) -> impl Iterator<Item = &ValidationCheck> {
        self.checks.iter().filter(move |c| c.section == section)
    }

    /// Counts over the whole report
    pub fn tally(&self) -> Tally {
        Tally::of(&self.checks)
    }

    /// Whether any check failed
    pub fn has_failures(&self) -> bool {
        self.tally().failed > 0
    }

    /// Whether any check produced a warning
    pub fn has_warnings(&self) -> bool {
        self.tally().warnings > 0
    }

    /// Number of checks that passed
    pub fn success_count(&self) -> usize {
        self.tally().passed
    }

    /// Number of warnings
    pub fn warning_count(&self) -> usize {
        self.tally().warnings
    }

    /// Number of failures
    pub fn failure_count(&self) -> usize {
        self.tally().failed
    }

    fn verdict(&self) -> &'static str {
        let tally = self.tally();
        if tally.failed > 0 {
            "Validation FAILED"
        } else if tally.warnings > 0 {
            "Validation PASSED with warnings"
        } else {
            "Validation PASSED"
        }
    }

    /// Sections that ran, with their checks
    fn sections(&self) -> impl Iterator<Item = (Section, Vec<&ValidationCheck>)> {
        Section::ALL.into_iter().filter_map(move |section| {
            let checks: Vec<_> = self.section(section).collect();
            (!checks.is_empty()).then_some((section, checks))
        })
    }

    /// Format the report with colors (requires the `colorized_output` feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            static OK: Emoji<'_, '_> = Emoji("✓", "[OK]");
            static WARN: Emoji<'_, '_> = Emoji("⚠", "[WARN]");
            static FAIL: Emoji<'_, '_> = Emoji("✗", "[FAIL]");

            let mut output = format!(
                "{} {}\n",
                style("ImagCDF validation of").bold().cyan(),
                style(&self.target).bold()
            );

            for (section, checks) in self.sections() {
                let tally = Tally::of(checks.iter().copied());
                output.push_str(&format!(
                    "\n{} {}\n",
                    style(section.heading()).bold().underlined(),
                    style(format!("({tally})")).dim()
                ));
                for check in checks {
                    let line = match &check.status {
                        CheckStatus::Ok => format!("  {} {}", OK, style(&check.name).green()),
                        CheckStatus::Warning(msg) => {
                            format!("  {} {}: {}", WARN, style(&check.name).yellow(), msg)
                        }
                        CheckStatus::Failed(msg) => {
                            format!("  {} {}: {}", FAIL, style(&check.name).red().bold(), msg)
                        }
                    };
                    output.push_str(&line);
                    output.push('\n');
                }
            }

            let tally = self.tally();
            let verdict = if tally.failed > 0 {
                style(self.verdict()).red()
            } else if tally.warnings > 0 {
                style(self.verdict()).yellow()
            } else {
                style(self.verdict()).green()
            };
            output.push_str(&format!(
                "\n{} checks: {}\n{}\n",
                self.checks.len(),
                tally,
                verdict.bold()
            ));
            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            self.to_string()
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ImagCDF validation of {}", self.target)?;

        for (section, checks) in self.sections() {
            writeln!(f)?;
            writeln!(
                f,
                "{} ({})",
                section.heading(),
                Tally::of(checks.iter().copied())
            )?;
            for check in checks {
                write!(f, "  {} {}", check.status.symbol(), check.name)?;
                match check.status.message() {
                    Some(msg) => writeln!(f, ": {msg}")?,
                    None => writeln!(f)?,
                }
            }
        }

        writeln!(f)?;
        writeln!(f, "{} checks: {}", self.checks.len(), self.tally())?;
        writeln!(f, "{}", self.verdict())
    }
}
