use axum::Router;
use std::net::SocketAddr;

/// Serves `app` on an ephemeral local port for the lifetime of the test runtime.
pub async fn spawn_http_stub(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind stub listener");
    let addr = listener.local_addr().expect("stub listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });
    addr
}
