/// Byte offset range in a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OffsetRange {
    pub start: usize,
    pub end: usize,
}

impl std::fmt::Display for OffsetRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl OffsetRange {
    /// Create a new offset range
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Position in a source file (0-indexed line, 0-indexed byte column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    #[must_use]
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// Range in a source file, `start` inclusive, `end` exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// Lint severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LintSeverity {
    Error,
    Warning,
}

impl LintSeverity {
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }
}

impl std::fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// A rule violation located in a source file.
///
/// `offset_range` is used for text manipulation, `range` for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintDiagnostic {
    pub offset_range: OffsetRange,
    pub range: Range,
    /// Severity (from rule default or config override)
    pub severity: LintSeverity,
    pub message: String,
    /// Rule identifier (e.g., `"no-unused-operations"`)
    pub rule: String,
}

impl LintDiagnostic {
    #[must_use]
    pub fn new(
        offset_range: OffsetRange,
        range: Range,
        severity: LintSeverity,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            offset_range,
            range,
            severity,
            message: message.into(),
            rule: rule.into(),
        }
    }

    /// Replace the severity, e.g. with a configured override
    #[must_use]
    pub const fn with_severity(mut self, severity: LintSeverity) -> Self {
        self.severity = severity;
        self
    }
}

/// Renders as `line:column severity message [rule]` with 1-based line and column.
impl std::fmt::Display for LintDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{} {} {} [{}]",
            self.range.start.line + 1,
            self.range.start.character + 1,
            self.severity,
            self.message,
            self.rule
        )
    }
}
