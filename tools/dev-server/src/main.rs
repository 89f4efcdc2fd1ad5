//! Development Server for the Aurora backdrop
//!
//! Serves the page shell in `web/` (override with `WEB_ROOT`) with correct
//! MIME types for the wasm module and its JS glue.

use axum::{
    body::Body,
    http::{header, HeaderValue, Request, StatusCode},
    response::Response,
    routing::get_service,
    Router,
};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let root = std::env::var("WEB_ROOT").unwrap_or_else(|_| "web".to_string());

    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    let serve_dir = ServeDir::new(&root).precompressed_gzip().precompressed_br();

    let app = Router::new()
        .fallback_service(get_service(serve_dir).handle_error(|_| async {
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }))
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(axum::middleware::from_fn(fix_content_type)),
        );

    println!("╔═══════════════════════════════════════════════════╗");
    println!("║          Aurora Backdrop Development Server       ║");
    println!("╠═══════════════════════════════════════════════════╣");
    println!("║  URL: http://localhost:{}                       ║", port);
    println!("║  Root: {:<43}║", root);
    println!("║  Press Ctrl+C to stop                             ║");
    println!("╚═══════════════════════════════════════════════════╝");
    println!();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

/// Content type for a request path, for the extensions the page shell uses
fn content_type_for(path: &str) -> Option<&'static str> {
    let ext = path.rsplit_once('.').map(|(_, ext)| ext)?;
    match ext {
        "js" | "mjs" => Some("application/javascript; charset=utf-8"),
        "wasm" => Some("application/wasm"),
        "css" => Some("text/css; charset=utf-8"),
        "html" => Some("text/html; charset=utf-8"),
        "json" => Some("application/json; charset=utf-8"),
        _ => None,
    }
}

/// Fix MIME types for module scripts and wasm
async fn fix_content_type(request: Request<Body>, next: axum::middleware::Next) -> Response<Body> {
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    if let Some(content_type) = content_type_for(&path) {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    }

    response
}
