//! Complint Browsers: runtime catalog and target resolution
//!
//! Turns a human-readable compatibility-target query into the concrete
//! support matrix a lint request is checked against.

pub mod catalog;
pub mod resolver;

pub use catalog::{runtimes, Runtime, VersionStat};
pub use resolver::{BrowserTargetResolver, DEFAULT_QUERY};
