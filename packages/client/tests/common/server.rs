//! In-process axum server running on its own runtime thread

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum::body::Bytes;
use axum::http::header::{LOCATION, SET_COOKIE};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::any;

/// Echoes the request line, headers and body as plain text
async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> String {
    let mut out = format!("{method} {uri}\n");
    for (name, value) in &headers {
        out.push_str(&format!("{name}: {}\n", String::from_utf8_lossy(value.as_bytes())));
    }
    out.push('\n');
    out.push_str(&String::from_utf8_lossy(&body));
    out
}

async fn redirect() -> impl IntoResponse {
    (StatusCode::FOUND, [(LOCATION, "/echo")])
}

async fn set_cookie() -> impl IntoResponse {
    ([(SET_COOKIE, "session=abc; Path=/")], "cookie set")
}

async fn slow() -> &'static str {
    tokio::time::sleep(Duration::from_millis(500)).await;
    "slow"
}

/// Start the test server and return its address
pub fn spawn() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    listener.set_nonblocking(true).expect("nonblocking listener");
    let addr = listener.local_addr().expect("listener address");

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("server runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).expect("tokio listener");
            let app = Router::new()
                .route("/echo", any(echo))
                .route("/redirect", any(redirect))
                .route("/set-cookie", any(set_cookie))
                .route("/slow", any(slow));
            axum::serve(listener, app).await.expect("test server");
        });
    });

    addr
}
