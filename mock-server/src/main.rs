use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt().init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let persistence = match std::env::var("MOCK_PERSISTENCE").as_deref() {
        Ok("echo") => mock_server::Persistence::Echo,
        _ => mock_server::Persistence::Stored,
    };
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, ?persistence, "listening");
    mock_server::run(listener, persistence).await
}
