//! Feature Compatibility Index
//!
//! Static lookup from a platform-feature identifier to the minimum
//! runtime versions that support it. Built once at first use, read-only
//! afterwards; lookups are hash-based since the analyzer performs one
//! per detected usage.
use complint_core::{CompatibilityVerdict, SupportMatrix, Version};
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Support data for one feature: runtime -> minimum supporting version.
/// A runtime absent from the map never supports the feature.
#[derive(Debug)]
pub struct FeatureSupport {
    pub feature_id: &'static str,
    minimums: HashMap<&'static str, Version>,
}

impl FeatureSupport {
    /// Minimum version of `runtime` that supports this feature.
    pub fn minimum_on(&self, runtime: &str) -> Option<Version> {
        self.minimums.get(runtime).copied()
    }
}

// (feature id, [(runtime, minimum supporting version)]). Versions come
// from the vendored compatibility snapshot; runtimes missing from a row
// have never shipped the feature.
static INDEX_ROWS: &[(&str, &[(&str, &str)])] = &[
    (
        "fetch",
        &[
            ("chrome", "42"),
            ("edge", "14"),
            ("firefox", "39"),
            ("safari", "10.1"),
            ("opera", "29"),
            ("node", "18"),
        ],
    ),
    (
        "promise",
        &[
            ("chrome", "32"),
            ("edge", "12"),
            ("firefox", "29"),
            ("safari", "8"),
            ("opera", "19"),
            ("node", "4"),
        ],
    ),
    (
        "intersection-observer",
        &[
            ("chrome", "51"),
            ("edge", "15"),
            ("firefox", "55"),
            ("safari", "12.1"),
            ("opera", "38"),
        ],
    ),
    (
        "resize-observer",
        &[
            ("chrome", "64"),
            ("edge", "79"),
            ("firefox", "69"),
            ("safari", "13.1"),
            ("opera", "51"),
        ],
    ),
    (
        "structured-clone",
        &[
            ("chrome", "98"),
            ("edge", "98"),
            ("firefox", "94"),
            ("safari", "15.4"),
            ("opera", "84"),
            ("node", "17"),
        ],
    ),
    (
        "clipboard-api",
        &[
            ("chrome", "66"),
            ("edge", "79"),
            ("firefox", "63"),
            ("safari", "13.1"),
            ("opera", "53"),
        ],
    ),
    (
        "optional-chaining",
        &[
            ("chrome", "80"),
            ("edge", "80"),
            ("firefox", "74"),
            ("safari", "13.1"),
            ("opera", "67"),
            ("node", "14"),
        ],
    ),
    (
        "nullish-coalescing",
        &[
            ("chrome", "80"),
            ("edge", "80"),
            ("firefox", "72"),
            ("safari", "13.1"),
            ("opera", "67"),
            ("node", "14"),
        ],
    ),
    (
        "array-at",
        &[
            ("chrome", "92"),
            ("edge", "92"),
            ("firefox", "90"),
            ("safari", "15.4"),
            ("opera", "78"),
            ("node", "16"),
        ],
    ),
    (
        "abort-controller",
        &[
            ("chrome", "66"),
            ("edge", "16"),
            ("firefox", "57"),
            ("safari", "12.1"),
            ("opera", "53"),
            ("node", "15"),
        ],
    ),
    (
        "broadcast-channel",
        &[
            ("chrome", "54"),
            ("edge", "79"),
            ("firefox", "38"),
            ("safari", "15.4"),
            ("opera", "41"),
            ("node", "18"),
        ],
    ),
    ("web-share", &[("chrome", "89"), ("edge", "93"), ("safari", "12.1")]),
];

lazy_static! {
    static ref INDEX: HashMap<&'static str, FeatureSupport> = INDEX_ROWS
        .iter()
        .map(|&(feature_id, rows)| {
            let minimums = rows
                .iter()
                .map(|&(runtime, version)| {
                    (runtime, version.parse().expect("index version literals are valid"))
                })
                .collect();
            (feature_id, FeatureSupport { feature_id, minimums })
        })
        .collect();
}

/// Support data for `feature_id`; `None` means "support unknown" and is
/// treated as supported everywhere to avoid false positives.
pub fn support_for(feature_id: &str) -> Option<&'static FeatureSupport> {
    INDEX.get(feature_id)
}

/// Check one feature against a support matrix.
pub fn verdict(feature_id: &str, matrix: &SupportMatrix) -> CompatibilityVerdict {
    let Some(support) = support_for(feature_id) else {
        return CompatibilityVerdict::Supported;
    };

    let missing: Vec<String> = matrix
        .targets()
        .iter()
        .filter(|target| match support.minimum_on(&target.runtime) {
            Some(minimum) => minimum > target.min_version,
            None => true,
        })
        .map(|target| target.runtime.clone())
        .collect();

    if missing.is_empty() {
        CompatibilityVerdict::Supported
    } else {
        CompatibilityVerdict::UnsupportedOn(missing)
    }
}
