//! JavaScript analyzer
//!
//! Two rule families: the feature-compatibility rule, which checks every
//! detected platform-feature usage against the request's support matrix,
//! and a small set of baseline source checks.
use complint_core::{
    AnalyzeOptions, Analyzer, AnalyzerError, CompatibilityVerdict, Finding, Position, Severity,
    SupportMatrix,
};
use complint_features::{scan, verdict};
use lazy_static::lazy_static;
use regex::Regex;

/// Rule id for feature usages the support matrix does not cover.
pub const RULE_UNSUPPORTED_FEATURE: &str = "compat/unsupported-feature";
/// Rule id for leftover `debugger` statements.
pub const RULE_NO_DEBUGGER: &str = "no-debugger";
/// Rule id for `alert()` calls.
pub const RULE_NO_ALERT: &str = "no-alert";

lazy_static! {
    static ref DEBUGGER: Regex = Regex::new(r"\bdebugger\b").expect("valid pattern");
    static ref ALERT: Regex = Regex::new(r"\balert\s*\(").expect("valid pattern");
}

#[derive(Default)]
pub struct JavaScriptAnalyzer;

impl JavaScriptAnalyzer {
    pub fn new() -> Self {
        Self
    }

    fn compat_findings(&self, code: &str, options: &AnalyzeOptions) -> Vec<Finding> {
        scan(code)
            .into_iter()
            .filter_map(|usage| match verdict(&usage.feature_id, &options.targets) {
                CompatibilityVerdict::Supported => None,
                CompatibilityVerdict::UnsupportedOn(runtimes) => Some(Finding::new(
                    RULE_UNSUPPORTED_FEATURE,
                    unsupported_message(&usage.feature_id, &runtimes, &options.targets),
                    options.compat_severity,
                    usage.position,
                )),
            })
            .collect()
    }

    fn baseline_findings(&self, code: &str) -> Vec<Finding> {
        let mut findings = Vec::new();
        for (index, line) in code.lines().enumerate() {
            let line_no = (index + 1) as u32;
            if let Some(m) = DEBUGGER.find(line) {
                findings.push(Finding::new(
                    RULE_NO_DEBUGGER,
                    "unexpected 'debugger' statement",
                    Severity::Warn,
                    Position::span(line_no, m.start() as u32, line_no, m.end() as u32),
                ));
            }
            if let Some(m) = ALERT.find(line) {
                findings.push(Finding::new(
                    RULE_NO_ALERT,
                    "unexpected 'alert' call",
                    Severity::Warn,
                    Position::span(line_no, m.start() as u32, line_no, m.end() as u32),
                ));
            }
        }
        findings
    }
}

impl Analyzer for JavaScriptAnalyzer {
    fn language(&self) -> &'static str {
        "javascript"
    }

    fn analyze(&self, code: &str, options: &AnalyzeOptions) -> Result<Vec<Finding>, AnalyzerError> {
        let mut findings = self.compat_findings(code, options);
        findings.extend(self.baseline_findings(code));
        // Keep findings readable top-to-bottom across rule families.
        findings.sort_by_key(|f| (f.position.line, f.position.column));
        tracing::debug!(findings = findings.len(), "javascript analysis complete");
        Ok(findings)
    }
}

/// "'fetch' is not supported in ie 11, safari 15.6"
fn unsupported_message(feature_id: &str, runtimes: &[String], matrix: &SupportMatrix) -> String {
    let audience: Vec<String> = runtimes
        .iter()
        .map(|runtime| match matrix.minimum_for(runtime) {
            Some(version) => format!("{runtime} {version}"),
            None => runtime.clone(),
        })
        .collect();
    format!("'{}' is not supported in {}", feature_id, audience.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use complint_core::SupportTarget;

    fn options(targets: &[(&str, &str)]) -> AnalyzeOptions {
        AnalyzeOptions::new(SupportMatrix::from_targets(
            targets
                .iter()
                .map(|(runtime, version)| SupportTarget::new(*runtime, version.parse().unwrap())),
        ))
    }

    #[test]
    fn flags_feature_missing_from_matrix_runtime() {
        let findings = JavaScriptAnalyzer::new()
            .analyze("fetch('/api');", &options(&[("ie", "11"), ("chrome", "120")]))
            .unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule_id, RULE_UNSUPPORTED_FEATURE);
        assert_eq!(findings[0].severity, Severity::Warn);
        assert!(findings[0].message.contains("'fetch'"));
        assert!(findings[0].message.contains("ie 11"));
        assert!(!findings[0].message.contains("chrome"));
    }

    #[test]
    fn supported_matrix_produces_no_compat_findings() {
        let findings = JavaScriptAnalyzer::new()
            .analyze("fetch('/api');", &options(&[("chrome", "120"), ("safari", "17.6")]))
            .unwrap();
        assert!(findings.is_empty());
    }

    #[test]
    fn compat_severity_is_configurable() {
        let opts = options(&[("ie", "11")]).with_compat_severity(Severity::Error);
        let findings = JavaScriptAnalyzer::new().analyze("fetch('/api');", &opts).unwrap();
        assert_eq!(findings[0].severity, Severity::Error);
    }

    #[test]
    fn baseline_rules_fire_alongside_compat() {
        let code = "debugger;\nfetch('/api');\nalert('hi');\n";
        let findings =
            JavaScriptAnalyzer::new().analyze(code, &options(&[("ie", "11")])).unwrap();
        let rules: Vec<_> = findings.iter().map(|f| f.rule_id.as_str()).collect();
        // Sorted by source position across rule families.
        assert_eq!(rules, vec![RULE_NO_DEBUGGER, RULE_UNSUPPORTED_FEATURE, RULE_NO_ALERT]);
    }

    #[test]
    fn one_finding_per_usage() {
        let code = "fetch(a);\nfetch(b);\n";
        let findings =
            JavaScriptAnalyzer::new().analyze(code, &options(&[("ie", "11")])).unwrap();
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].position.line, 1);
        assert_eq!(findings[1].position.line, 2);
    }

    #[test]
    fn version_floor_decides_the_verdict() {
        let analyzer = JavaScriptAnalyzer::new();
        // structured-clone needs safari 15.4.
        let below = analyzer
            .analyze("structuredClone(x);", &options(&[("safari", "15.2")]))
            .unwrap();
        assert_eq!(below.len(), 1);
        assert!(below[0].message.contains("safari 15.2"));

        let above = analyzer
            .analyze("structuredClone(x);", &options(&[("safari", "15.4")]))
            .unwrap();
        assert!(above.is_empty());
    }
}
