//! Analyzer Trait: contract every language analyzer implements
use crate::data_model::{Finding, Severity, SupportMatrix};
use crate::error::AnalyzerError;
use std::collections::HashMap;
use std::sync::Arc;

/// Per-request options handed to an analyzer.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Resolved support matrix for this request.
    pub targets: SupportMatrix,
    /// Severity for feature-compatibility findings (default: warn).
    pub compat_severity: Severity,
}

impl AnalyzeOptions {
    pub fn new(targets: SupportMatrix) -> Self {
        Self { targets, compat_severity: Severity::Warn }
    }

    pub fn with_compat_severity(mut self, severity: Severity) -> Self {
        self.compat_severity = severity;
        self
    }
}

/// Capability of one language analyzer.
pub trait Analyzer: Send + Sync {
    /// Canonical lowercase language identifier (ex: "javascript").
    fn language(&self) -> &'static str;

    /// Analyze source text and produce raw findings, in source order
    /// where possible.
    fn analyze(&self, code: &str, options: &AnalyzeOptions) -> Result<Vec<Finding>, AnalyzerError>;
}

/// Maps language identifiers to analyzers. Exactly one analyzer per
/// language; lookups are case-insensitive.
#[derive(Default)]
pub struct AnalyzerRegistry {
    analyzers: HashMap<String, Box<dyn Analyzer>>,
}

impl AnalyzerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an analyzer under one or more language aliases.
    pub fn register(&mut self, aliases: &[&str], analyzer: Box<dyn Analyzer>) {
        let analyzer: Arc<dyn Analyzer> = Arc::from(analyzer);
        for alias in aliases {
            self.analyzers.insert(
                alias.to_ascii_lowercase(),
                Box::new(SharedAnalyzer(Arc::clone(&analyzer))),
            );
        }
    }

    pub fn get(&self, language: &str) -> Option<&dyn Analyzer> {
        self.analyzers
            .get(&language.to_ascii_lowercase())
            .map(|a| a.as_ref())
    }

    /// Registered language aliases, sorted for stable output.
    pub fn languages(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.analyzers.keys().cloned().collect();
        keys.sort();
        keys
    }
}

/// Lets one analyzer instance serve several aliases.
struct SharedAnalyzer(Arc<dyn Analyzer>);

impl Analyzer for SharedAnalyzer {
    fn language(&self) -> &'static str {
        self.0.language()
    }

    fn analyze(&self, code: &str, options: &AnalyzeOptions) -> Result<Vec<Finding>, AnalyzerError> {
        self.0.analyze(code, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_model::{Position, Severity};

    struct EchoAnalyzer;

    impl Analyzer for EchoAnalyzer {
        fn language(&self) -> &'static str {
            "echo"
        }

        fn analyze(&self, code: &str, _: &AnalyzeOptions) -> Result<Vec<Finding>, AnalyzerError> {
            Ok(vec![Finding::new("echo", code, Severity::Warn, Position::start())])
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut registry = AnalyzerRegistry::new();
        registry.register(&["echo"], Box::new(EchoAnalyzer));
        assert!(registry.get("ECHO").is_some());
        assert!(registry.get("other").is_none());
    }

    #[test]
    fn aliases_share_one_analyzer() {
        let mut registry = AnalyzerRegistry::new();
        registry.register(&["echo", "e"], Box::new(EchoAnalyzer));
        assert_eq!(registry.get("e").unwrap().language(), "echo");
        assert_eq!(registry.languages(), vec!["e".to_string(), "echo".to_string()]);
    }
}
