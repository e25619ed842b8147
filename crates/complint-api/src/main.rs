//! Binary entrypoint for the Complint API server.
use complint_api::run;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Default listen address can be overridden with COMPLINT_ADDR
    let addr = std::env::var("COMPLINT_ADDR").unwrap_or_else(|_| "0.0.0.0:8787".to_string());
    run(&addr).await;
}
