//! Gateway: orchestrates one lint request end to end
//!
//! Stateless. Each request runs validate -> resolve -> analyze ->
//! normalize as a single synchronous transformation; the only shared
//! state it touches is read-only collaborator data.
use crate::analyzer::{AnalyzeOptions, AnalyzerRegistry};
use crate::data_model::{Finding, LintOutcome, LintRequest, Position, Severity};
use crate::error::GatewayError;
use crate::normalize::normalize;
use crate::resolve::TargetResolver;

/// Rule id for the synthetic finding emitted for unregistered languages.
pub const RULE_UNSUPPORTED_LANGUAGE: &str = "unsupported-language";
/// Rule id for skipped target-query tokens.
pub const RULE_INVALID_TARGET: &str = "invalid-target";

const DEFAULT_LANGUAGE: &str = "javascript";

pub struct Gateway {
    registry: AnalyzerRegistry,
    resolver: Box<dyn TargetResolver>,
}

impl Gateway {
    pub fn new(registry: AnalyzerRegistry, resolver: Box<dyn TargetResolver>) -> Self {
        Self { registry, resolver }
    }

    /// Run one lint request to completion.
    ///
    /// Unsupported languages and malformed target tokens degrade to warn
    /// findings inside a successful outcome; only blank input and
    /// analyzer crashes produce an error.
    pub fn lint(&self, request: &LintRequest) -> Result<LintOutcome, GatewayError> {
        if request.code.trim().is_empty() {
            return Err(GatewayError::InvalidInput(
                "field 'code' must be a non-empty string".to_string(),
            ));
        }

        let language = request
            .language
            .as_deref()
            .map(|l| l.trim().to_ascii_lowercase())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        let analyzer = match self.registry.get(&language) {
            Some(analyzer) => analyzer,
            None => {
                tracing::debug!(language = %language, "no analyzer registered, degrading");
                let finding = Finding::new(
                    RULE_UNSUPPORTED_LANGUAGE,
                    format!(
                        "language '{}' is not analyzed; supported: {}",
                        language,
                        self.registry.languages().join(", ")
                    ),
                    Severity::Warn,
                    Position::start(),
                );
                return Ok(LintOutcome { language, report: normalize(vec![finding]) });
            }
        };

        let resolution = self.resolver.resolve(request.targets.as_deref().unwrap_or(""));
        tracing::debug!(
            language = %language,
            targets = resolution.matrix.len(),
            skipped_tokens = resolution.warnings.len(),
            "resolved support matrix"
        );

        let mut findings: Vec<Finding> = resolution
            .warnings
            .iter()
            .map(|warning| {
                Finding::new(RULE_INVALID_TARGET, warning.clone(), Severity::Warn, Position::start())
            })
            .collect();

        let options = AnalyzeOptions::new(resolution.matrix)
            .with_compat_severity(request.compat_severity.unwrap_or(Severity::Warn));

        let raw = analyzer.analyze(&request.code, &options).map_err(|e| {
            tracing::error!(language = %language, error = %e, "analyzer failed");
            GatewayError::AnalyzerFailure(e.to_string())
        })?;
        findings.extend(raw);

        Ok(LintOutcome { language, report: normalize(findings) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Analyzer;
    use crate::data_model::{ReportLevel, SupportMatrix, SupportTarget, Version};
    use crate::error::AnalyzerError;
    use crate::resolve::Resolution;

    struct FixedResolver {
        warnings: Vec<String>,
    }

    impl TargetResolver for FixedResolver {
        fn resolve(&self, _query: &str) -> Resolution {
            Resolution {
                matrix: SupportMatrix::from_targets(vec![SupportTarget::new(
                    "chrome",
                    Version::new(120, 0),
                )]),
                warnings: self.warnings.clone(),
            }
        }
    }

    struct MatrixEcho;

    impl Analyzer for MatrixEcho {
        fn language(&self) -> &'static str {
            "javascript"
        }

        fn analyze(
            &self,
            _code: &str,
            options: &AnalyzeOptions,
        ) -> Result<Vec<Finding>, AnalyzerError> {
            Ok(options
                .targets
                .targets()
                .iter()
                .map(|t| {
                    Finding::new(
                        "echo-target",
                        format!("{} {}", t.runtime, t.min_version),
                        options.compat_severity,
                        Position::start(),
                    )
                })
                .collect())
        }
    }

    struct Crashing;

    impl Analyzer for Crashing {
        fn language(&self) -> &'static str {
            "javascript"
        }

        fn analyze(&self, _: &str, _: &AnalyzeOptions) -> Result<Vec<Finding>, AnalyzerError> {
            Err(AnalyzerError::new("parser blew up"))
        }
    }

    fn gateway_with(analyzer: Box<dyn Analyzer>, warnings: Vec<String>) -> Gateway {
        let mut registry = AnalyzerRegistry::new();
        registry.register(&["javascript", "js"], analyzer);
        Gateway::new(registry, Box::new(FixedResolver { warnings }))
    }

    #[test]
    fn blank_code_is_invalid_input() {
        let gateway = gateway_with(Box::new(MatrixEcho), vec![]);
        let request = LintRequest {
            language: None,
            code: "   \n\t".to_string(),
            targets: None,
            compat_severity: None,
        };
        assert!(matches!(gateway.lint(&request), Err(GatewayError::InvalidInput(_))));
    }

    #[test]
    fn language_defaults_to_javascript_and_is_case_insensitive() {
        let gateway = gateway_with(Box::new(MatrixEcho), vec![]);
        let defaulted = gateway
            .lint(&LintRequest {
                language: None,
                code: "x".to_string(),
                targets: None,
                compat_severity: None,
            })
            .unwrap();
        assert_eq!(defaulted.language, "javascript");

        let upper = gateway
            .lint(&LintRequest {
                language: Some("JavaScript".to_string()),
                code: "x".to_string(),
                targets: None,
                compat_severity: None,
            })
            .unwrap();
        assert_eq!(upper.language, "javascript");
    }

    #[test]
    fn unknown_language_degrades_to_single_warn_finding() {
        let gateway = gateway_with(Box::new(MatrixEcho), vec![]);
        let outcome = gateway
            .lint(&LintRequest {
                language: Some("brainfuck".to_string()),
                code: "++".to_string(),
                targets: None,
                compat_severity: None,
            })
            .unwrap();
        assert_eq!(outcome.report.items.len(), 1);
        let finding = &outcome.report.items[0];
        assert_eq!(finding.rule_id, RULE_UNSUPPORTED_LANGUAGE);
        assert_eq!(finding.severity, Severity::Warn);
        assert!(finding.message.contains("brainfuck"));
        assert!(finding.message.contains("javascript"));
        assert_eq!(outcome.report.summary.level, ReportLevel::Warn);
    }

    #[test]
    fn analyzer_failure_is_caught() {
        let gateway = gateway_with(Box::new(Crashing), vec![]);
        let result = gateway.lint(&LintRequest {
            language: None,
            code: "x".to_string(),
            targets: None,
            compat_severity: None,
        });
        assert!(matches!(result, Err(GatewayError::AnalyzerFailure(_))));
    }

    #[test]
    fn resolver_warnings_become_invalid_target_findings() {
        let gateway =
            gateway_with(Box::new(MatrixEcho), vec!["unknown token: 'bogus'".to_string()]);
        let outcome = gateway
            .lint(&LintRequest {
                language: None,
                code: "x".to_string(),
                targets: Some("bogus".to_string()),
                compat_severity: None,
            })
            .unwrap();
        assert_eq!(outcome.report.items[0].rule_id, RULE_INVALID_TARGET);
        assert_eq!(outcome.report.items[0].severity, Severity::Warn);
        // Analyzer findings follow the target warnings.
        assert_eq!(outcome.report.items[1].rule_id, "echo-target");
        assert_eq!(outcome.report.summary.total, outcome.report.items.len());
    }

    #[test]
    fn compat_severity_is_forwarded() {
        let gateway = gateway_with(Box::new(MatrixEcho), vec![]);
        let outcome = gateway
            .lint(&LintRequest {
                language: None,
                code: "x".to_string(),
                targets: None,
                compat_severity: Some(Severity::Error),
            })
            .unwrap();
        assert_eq!(outcome.report.items[0].severity, Severity::Error);
        assert_eq!(outcome.report.summary.level, ReportLevel::Error);
    }

    #[test]
    fn identical_requests_yield_identical_reports() {
        let gateway = gateway_with(Box::new(MatrixEcho), vec![]);
        let request = LintRequest {
            language: Some("js".to_string()),
            code: "const a = 1;".to_string(),
            targets: Some("last 2 versions".to_string()),
            compat_severity: None,
        };
        let first = gateway.lint(&request).unwrap();
        let second = gateway.lint(&request).unwrap();
        assert_eq!(first.report, second.report);
    }
}
