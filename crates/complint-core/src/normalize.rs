//! Diagnostic Normalizer: raw findings -> stable report schema
use crate::data_model::{DiagnosticReport, Finding, ReportLevel, Severity, Summary};

/// Compute aggregate counts over findings, preserving their order.
///
/// `level` is error if any error finding exists, warn if any warning
/// exists, ok otherwise. `total == errors + warnings == items.len()`.
pub fn normalize(findings: Vec<Finding>) -> DiagnosticReport {
    let errors = findings.iter().filter(|f| f.severity == Severity::Error).count();
    let warnings = findings.len() - errors;
    let level = if errors > 0 {
        ReportLevel::Error
    } else if warnings > 0 {
        ReportLevel::Warn
    } else {
        ReportLevel::Ok
    };

    DiagnosticReport {
        summary: Summary { level, errors, warnings, total: findings.len() },
        items: findings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_model::Position;

    fn finding(rule: &str, severity: Severity) -> Finding {
        Finding::new(rule, rule, severity, Position::start())
    }

    #[test]
    fn empty_findings_normalize_to_ok() {
        let report = normalize(vec![]);
        assert_eq!(report.summary.level, ReportLevel::Ok);
        assert_eq!(report.summary.total, 0);
        assert!(report.items.is_empty());
    }

    #[test]
    fn counts_always_reconcile() {
        let report = normalize(vec![
            finding("a", Severity::Warn),
            finding("b", Severity::Error),
            finding("c", Severity::Warn),
        ]);
        assert_eq!(report.summary.errors, 1);
        assert_eq!(report.summary.warnings, 2);
        assert_eq!(report.summary.total, report.summary.errors + report.summary.warnings);
        assert_eq!(report.summary.total, report.items.len());
        assert_eq!(report.summary.level, ReportLevel::Error);
    }

    #[test]
    fn warnings_only_yield_warn_level() {
        let report = normalize(vec![finding("a", Severity::Warn)]);
        assert_eq!(report.summary.level, ReportLevel::Warn);
    }

    #[test]
    fn input_ordering_is_preserved() {
        let report = normalize(vec![
            finding("third", Severity::Warn),
            finding("first", Severity::Warn),
            finding("second", Severity::Error),
        ]);
        let order: Vec<_> = report.items.iter().map(|f| f.rule_id.as_str()).collect();
        assert_eq!(order, vec!["third", "first", "second"]);
    }
}
