//! Target Resolver contract
use crate::data_model::SupportMatrix;

/// Outcome of resolving a target query string.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub matrix: SupportMatrix,
    /// One entry per skipped (unknown or malformed) token. Never fatal.
    pub warnings: Vec<String>,
}

impl Resolution {
    pub fn clean(matrix: SupportMatrix) -> Self {
        Self { matrix, warnings: Vec::new() }
    }
}

/// Parses a compatibility-target query into a concrete support matrix.
///
/// An empty or unparseable query must fall back to the resolver's
/// documented default matrix rather than fail.
pub trait TargetResolver: Send + Sync {
    fn resolve(&self, query: &str) -> Resolution;
}
