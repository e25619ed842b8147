//! Feature usage scanner for JavaScript source text
//!
//! Pattern-based detection, not a full parser: each detector is a regex
//! mapped to a feature identifier. Line comments are skipped; usages are
//! emitted in source order with 1-based lines and 0-based columns.
use complint_core::{FeatureUsage, Position};
use lazy_static::lazy_static;
use regex::Regex;

struct Detector {
    feature_id: &'static str,
    pattern: Regex,
}

macro_rules! detector {
    ($feature:literal, $pattern:literal) => {
        Detector {
            feature_id: $feature,
            pattern: Regex::new($pattern).expect("detector patterns are valid"),
        }
    };
}

lazy_static! {
    static ref DETECTORS: Vec<Detector> = vec![
        detector!("fetch", r"\bfetch\s*\("),
        detector!("promise", r"\bnew\s+Promise\b"),
        detector!("promise", r"\bPromise\.(?:all|allSettled|any|race|resolve|reject)\b"),
        detector!("intersection-observer", r"\bnew\s+IntersectionObserver\b"),
        detector!("resize-observer", r"\bnew\s+ResizeObserver\b"),
        detector!("structured-clone", r"\bstructuredClone\s*\("),
        detector!("clipboard-api", r"\bnavigator\.clipboard\b"),
        detector!("web-share", r"\bnavigator\.share\s*\("),
        detector!("abort-controller", r"\bnew\s+AbortController\b"),
        detector!("broadcast-channel", r"\bnew\s+BroadcastChannel\b"),
        detector!("array-at", r"\.at\s*\("),
        detector!("optional-chaining", r"\?\."),
        detector!("nullish-coalescing", r"\?\?"),
    ];
}

/// Detect platform-feature usages in `source`, in source order.
pub fn scan(source: &str) -> Vec<FeatureUsage> {
    let mut usages = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let line_no = (index + 1) as u32;
        let effective = strip_line_comment(line);

        for detector in DETECTORS.iter() {
            for m in detector.pattern.find_iter(effective) {
                usages.push(FeatureUsage {
                    feature_id: detector.feature_id.to_string(),
                    position: Position::span(
                        line_no,
                        m.start() as u32,
                        line_no,
                        m.end() as u32,
                    ),
                });
            }
        }
    }

    usages.sort_by_key(|u| (u.position.line, u.position.column));
    usages
}

/// Drop the `//` comment tail of a line. Tracks quote state so a `//`
/// inside a string literal (a protocol-relative URL, say) does not
/// truncate the rest of the line.
fn strip_line_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    let mut quote: Option<u8> = None;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(q) => {
                if b == b'\\' {
                    i += 1;
                } else if b == q {
                    quote = None;
                }
            }
            None => match b {
                b'\'' | b'"' | b'`' => quote = Some(b),
                b'/' if bytes.get(i + 1) == Some(&b'/') => return &line[..i],
                _ => {}
            },
        }
        i += 1;
    }
    line
}
