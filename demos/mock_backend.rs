//! A backend to try the proxy against by hand:
//!
//! ```text
//! cargo run --example mock_backend
//! PATHS=demo:http://127.0.0.1:9000 cargo run
//! curl -H 'X-Test: abc' 'http://127.0.0.1:8080/demo/hello?name=pico'
//! ```

use axum::{body::Body, http::Request, routing::get, Router};
use std::net::SocketAddr;

#[tokio::main]
async fn main() {
    let app = Router::new()
        .route("/", get(|| async { "Mock backend root" }))
        .fallback(|request: Request<Body>| async move {
            let x_test = request
                .headers()
                .get("x-test")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("-")
                .to_string();
            ([("x-reply", "xyz")], format!("{} {} x-test={}\n", request.method(), request.uri(), x_test))
        });

    let addr = SocketAddr::from(([127, 0, 0, 1], 9000));
    println!("Mock backend listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
