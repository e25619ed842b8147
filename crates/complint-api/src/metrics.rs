//! Prometheus counters for the API surface.
use lazy_static::lazy_static;
use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

lazy_static! {
    pub static ref LINT_REQUESTS: IntCounter = IntCounter::new(
        "complint_lint_requests_total",
        "Total lint requests received",
    )
    .expect("valid metric definition");

    static ref REGISTRY: Registry = {
        let registry = Registry::new();
        registry
            .register(Box::new(LINT_REQUESTS.clone()))
            .expect("metric registers once");
        registry
    };
}

pub fn encode() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&REGISTRY.gather(), &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).to_string())
}
