//! Complint Core: data model, analyzer contract, and the diagnostic gateway
//!
//! The gateway dispatches code to a language analyzer, resolves the
//! request's compatibility targets through a collaborator, and normalizes
//! raw findings into one stable report schema.

pub mod analyzer;
pub mod data_model;
pub mod error;
pub mod gateway;
pub mod normalize;
pub mod resolve;

pub use analyzer::{AnalyzeOptions, Analyzer, AnalyzerRegistry};
pub use data_model::{
    CompatibilityVerdict, DiagnosticReport, FeatureUsage, Finding, LintOutcome, LintRequest,
    Position, ReportLevel, Severity, Summary, SupportMatrix, SupportTarget, Version,
};
pub use error::{AnalyzerError, GatewayError};
pub use gateway::{Gateway, RULE_INVALID_TARGET, RULE_UNSUPPORTED_LANGUAGE};
pub use normalize::normalize;
pub use resolve::{Resolution, TargetResolver};
