//! Data Model: findings, reports, support targets and matrices
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a single finding. Nothing else is ever emitted externally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warn,
}

/// Aggregate level of a report, derived from the finding counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportLevel {
    Ok,
    Warn,
    Error,
}

/// Source position. Lines are 1-based, columns 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl Position {
    pub fn span(line: u32, column: u32, end_line: u32, end_column: u32) -> Self {
        Self { line, column, end_line, end_column }
    }

    /// Zero-width position at the start of the source.
    pub fn start() -> Self {
        Self { line: 1, column: 0, end_line: 1, end_column: 0 }
    }
}

/// One diagnostic emitted by an analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// Rule identifier (ex: "compat/unsupported-feature")
    pub rule_id: String,
    pub message: String,
    pub severity: Severity,
    pub position: Position,
}

impl Finding {
    pub fn new(
        rule_id: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
        position: Position,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            message: message.into(),
            severity,
            position,
        }
    }
}

/// Aggregate counts over a report's findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub level: ReportLevel,
    pub errors: usize,
    pub warnings: usize,
    pub total: usize,
}

/// The normalized response contract: `total == errors + warnings == items.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub summary: Summary,
    pub items: Vec<Finding>,
}

/// A runtime version, ordered numerically (major, then minor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u16,
    pub minor: u16,
}

impl Version {
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minor == 0 {
            write!(f, "{}", self.major)
        } else {
            write!(f, "{}.{}", self.major, self.minor)
        }
    }
}

impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(2, '.');
        let major = parts
            .next()
            .unwrap_or("")
            .parse::<u16>()
            .map_err(|_| format!("invalid version: {s}"))?;
        let minor = match parts.next() {
            Some(m) => m.parse::<u16>().map_err(|_| format!("invalid version: {s}"))?,
            None => 0,
        };
        Ok(Self { major, minor })
    }
}

impl Serialize for Version {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One (runtime, minimum version) pair a feature must support.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTarget {
    pub runtime: String,
    pub min_version: Version,
}

impl SupportTarget {
    pub fn new(runtime: impl Into<String>, min_version: Version) -> Self {
        Self { runtime: runtime.into(), min_version }
    }
}

/// The resolved set of support targets a request is checked against.
///
/// Deduplicated by runtime keeping the lowest required version, sorted by
/// runtime name. Built once per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportMatrix {
    targets: Vec<SupportTarget>,
}

impl SupportMatrix {
    /// Build a matrix from raw targets, keeping the lowest version per runtime.
    pub fn from_targets(raw: impl IntoIterator<Item = SupportTarget>) -> Self {
        let mut targets: Vec<SupportTarget> = Vec::new();
        for target in raw {
            if let Some(i) = targets.iter().position(|t| t.runtime == target.runtime) {
                if target.min_version < targets[i].min_version {
                    targets[i].min_version = target.min_version;
                }
            } else {
                targets.push(target);
            }
        }
        targets.sort_by(|a, b| a.runtime.cmp(&b.runtime));
        Self { targets }
    }

    pub fn targets(&self) -> &[SupportTarget] {
        &self.targets
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Minimum version the matrix requires for `runtime`, if present.
    pub fn minimum_for(&self, runtime: &str) -> Option<Version> {
        self.targets
            .iter()
            .find(|t| t.runtime == runtime)
            .map(|t| t.min_version)
    }
}

/// One detected occurrence of a platform feature in source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureUsage {
    pub feature_id: String,
    pub position: Position,
}

/// Outcome of checking one feature usage against a support matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompatibilityVerdict {
    Supported,
    /// Runtimes in the matrix that lack support for the feature.
    UnsupportedOn(Vec<String>),
}

/// One lint request, transport-agnostic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintRequest {
    /// Language identifier, case-insensitive; defaults to "javascript".
    pub language: Option<String>,
    pub code: String,
    /// Raw target query (ex: ">= 0.5%, last 2 versions, not dead").
    pub targets: Option<String>,
    /// Severity for compat findings; defaults to warn (non-blocking).
    pub compat_severity: Option<Severity>,
}

/// Result of a completed lint request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintOutcome {
    pub language: String,
    pub report: DiagnosticReport,
}
