//! Target Resolver: compatibility-target query -> support matrix
//!
//! Grammar: comma-separated tokens, case-insensitive. Inclusion tokens
//! (`>= P%`, `last N versions`) union in listed order; exclusion flags
//! (`not dead`) subtract last regardless of position. Unknown or
//! malformed tokens are skipped with a warning, never fatal.
use crate::catalog::{runtimes, Runtime};
use complint_core::{Resolution, SupportMatrix, SupportTarget, TargetResolver};

/// Matrix used when the query is empty or yields no inclusions.
pub const DEFAULT_QUERY: &str = "last 2 versions, not dead";

const DEFAULT_LAST_VERSIONS: usize = 2;

#[derive(Debug, PartialEq)]
enum Token {
    UsageShare { threshold: f32, inclusive: bool },
    LastVersions(usize),
    NotDead,
}

pub struct BrowserTargetResolver;

impl BrowserTargetResolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowserTargetResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetResolver for BrowserTargetResolver {
    fn resolve(&self, query: &str) -> Resolution {
        let mut warnings = Vec::new();
        let mut includes: Vec<SupportTarget> = Vec::new();
        let mut drop_dead = false;

        for raw in query.split(',') {
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }
            match parse_token(raw) {
                Ok(Token::UsageShare { threshold, inclusive }) => {
                    includes.extend(by_usage_share(threshold, inclusive));
                }
                Ok(Token::LastVersions(n)) => includes.extend(by_last_versions(n)),
                Ok(Token::NotDead) => drop_dead = true,
                Err(warning) => {
                    tracing::debug!(token = raw, "skipping target token");
                    warnings.push(warning);
                }
            }
        }

        // An all-exclusion or unparseable query still needs an audience to
        // subtract from, so inclusions fall back to the default set.
        if includes.is_empty() {
            includes = by_last_versions(DEFAULT_LAST_VERSIONS);
            drop_dead = true;
        }

        if drop_dead {
            let dead: Vec<&str> =
                runtimes().iter().filter(|r| r.dead).map(|r| r.name).collect();
            includes.retain(|t| !dead.contains(&t.runtime.as_str()));
        }

        Resolution { matrix: SupportMatrix::from_targets(includes), warnings }
    }
}

fn parse_token(raw: &str) -> Result<Token, String> {
    let token = raw.to_ascii_lowercase();

    if token == "not dead" {
        return Ok(Token::NotDead);
    }

    if let Some(rest) = token.strip_prefix(">=").or_else(|| token.strip_prefix('>')) {
        let inclusive = token.starts_with(">=");
        let rest = rest.trim();
        let digits = rest
            .strip_suffix('%')
            .ok_or_else(|| format!("malformed usage-share token: '{raw}'"))?;
        let threshold: f32 = digits
            .trim()
            .parse()
            .map_err(|_| format!("malformed usage-share token: '{raw}'"))?;
        return Ok(Token::UsageShare { threshold, inclusive });
    }

    if let Some(rest) = token.strip_prefix("last ") {
        let rest = rest
            .strip_suffix(" versions")
            .or_else(|| rest.strip_suffix(" version"))
            .ok_or_else(|| format!("malformed recency token: '{raw}'"))?;
        let n: usize = rest
            .trim()
            .parse()
            .map_err(|_| format!("malformed recency token: '{raw}'"))?;
        if n == 0 {
            return Err(format!("malformed recency token: '{raw}'"));
        }
        return Ok(Token::LastVersions(n));
    }

    Err(format!("unknown target token: '{raw}'"))
}

fn by_last_versions(n: usize) -> Vec<SupportTarget> {
    runtimes()
        .iter()
        .flat_map(|runtime: &Runtime| {
            runtime
                .versions
                .iter()
                .take(n)
                .map(move |stat| SupportTarget::new(runtime.name, stat.version))
        })
        .collect()
}

fn by_usage_share(threshold: f32, inclusive: bool) -> Vec<SupportTarget> {
    runtimes()
        .iter()
        .flat_map(|runtime| {
            runtime
                .versions
                .iter()
                .filter(move |stat| {
                    if inclusive {
                        stat.usage >= threshold
                    } else {
                        stat.usage > threshold
                    }
                })
                .map(move |stat| SupportTarget::new(runtime.name, stat.version))
        })
        .collect()
}
