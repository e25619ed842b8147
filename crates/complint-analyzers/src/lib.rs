//! Complint Analyzers: language analyzers and the default registry
//!
//! Adding a language means implementing [`complint_core::Analyzer`] and
//! registering it here; the gateway never grows language branches.

pub mod javascript;

pub use javascript::{JavaScriptAnalyzer, RULE_NO_ALERT, RULE_NO_DEBUGGER, RULE_UNSUPPORTED_FEATURE};

use complint_core::AnalyzerRegistry;

/// Registry with every built-in analyzer. JavaScript is the primary
/// supported language, reachable under both `javascript` and `js`.
pub fn default_registry() -> AnalyzerRegistry {
    let mut registry = AnalyzerRegistry::new();
    registry.register(&["javascript", "js"], Box::new(JavaScriptAnalyzer::new()));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_serves_javascript_aliases() {
        let registry = default_registry();
        assert!(registry.get("javascript").is_some());
        assert!(registry.get("JS").is_some());
        assert!(registry.get("python").is_none());
    }
}
