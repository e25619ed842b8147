//! HTTP middleware: CORS policy for the playground and API callers.
use tower_http::cors::CorsLayer;

pub fn cors() -> CorsLayer {
    CorsLayer::permissive()
}
