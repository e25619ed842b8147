//! Runtime catalog: known runtimes, their versions, usage and status
//!
//! Static, process-wide and read-only. Refreshing the data means
//! shipping a new build; there is no runtime mutation path.
use complint_core::Version;
use lazy_static::lazy_static;

/// Raw catalog row as embedded in the crate.
struct RuntimeRow {
    name: &'static str,
    /// Vendor has shipped no update for at least 24 months.
    dead: bool,
    /// Newest-first (version, global usage share percent) pairs.
    versions: &'static [(&'static str, f32)],
}

/// One runtime with parsed, newest-first version data.
#[derive(Debug, Clone)]
pub struct Runtime {
    pub name: &'static str,
    pub dead: bool,
    pub versions: Vec<VersionStat>,
}

#[derive(Debug, Clone, Copy)]
pub struct VersionStat {
    pub version: Version,
    /// Global usage share in percent.
    pub usage: f32,
}

// Snapshot of the usage data the resolver works from. Shares are global
// percentages; runtimes not tracked by usage counters carry 0.0.
static CATALOG_ROWS: &[RuntimeRow] = &[
    RuntimeRow {
        name: "chrome",
        dead: false,
        versions: &[
            ("139", 0.9),
            ("138", 17.8),
            ("137", 2.4),
            ("136", 1.1),
            ("135", 0.7),
            ("125", 0.5),
            ("109", 1.3),
        ],
    },
    RuntimeRow {
        name: "edge",
        dead: false,
        versions: &[("138", 4.6), ("137", 0.5), ("136", 0.2)],
    },
    RuntimeRow {
        name: "firefox",
        dead: false,
        versions: &[("141", 0.2), ("140", 1.5), ("139", 0.3), ("128", 0.3), ("115", 0.4)],
    },
    RuntimeRow {
        name: "safari",
        dead: false,
        versions: &[("18.5", 2.2), ("18.4", 1.0), ("17.6", 0.6), ("16.6", 0.3), ("15.6", 0.3)],
    },
    RuntimeRow {
        name: "opera",
        dead: false,
        versions: &[("120", 0.7), ("119", 0.2), ("116", 0.9)],
    },
    RuntimeRow {
        name: "ie",
        dead: true,
        versions: &[("11", 0.4), ("10", 0.1)],
    },
    RuntimeRow {
        name: "node",
        dead: false,
        versions: &[("24", 0.0), ("22", 0.0), ("20", 0.0), ("18", 0.0)],
    },
];

lazy_static! {
    /// Parsed catalog, built once at first use.
    static ref CATALOG: Vec<Runtime> = CATALOG_ROWS
        .iter()
        .map(|row| Runtime {
            name: row.name,
            dead: row.dead,
            versions: row
                .versions
                .iter()
                .map(|(v, usage)| VersionStat {
                    version: v.parse().expect("catalog version literals are valid"),
                    usage: *usage,
                })
                .collect(),
        })
        .collect();
}

/// All known runtimes, in catalog order.
pub fn runtimes() -> &'static [Runtime] {
    &CATALOG
}
