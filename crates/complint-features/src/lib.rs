//! Complint Features: compatibility index and feature-usage scanner
//!
//! Read-only support data keyed by feature identifier, plus the scanner
//! that finds feature usages in JavaScript source text.

pub mod index;
pub mod scanner;

pub use index::{support_for, verdict, FeatureSupport};
pub use scanner::scan;
