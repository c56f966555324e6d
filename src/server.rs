use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use crate::response;

const LISTEN_ADDR: (&str, u16) = ("127.0.0.1", 3000);

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let listener = TcpListener::bind(LISTEN_ADDR).await?;
    println!("Backend server running on port {}", LISTEN_ADDR.1);
    tracing::info!(message = "Accepting requests.", addr = %listener.local_addr()?);
    serve(listener).await
}

pub async fn serve(listener: TcpListener) -> anyhow::Result<()> {
    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(err) => {
                tracing::error!(message = "Failed to accept connection", error = %err);
                continue;
            }
        };
        tracing::debug!(message = "Accepted connection", peer = %peer);
        tokio::spawn(async move {
            let io = TokioIo::new(stream);
            let service = service_fn(move |req| response::handle(req, peer.ip()));
            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                tracing::debug!(message = "Connection closed with error", peer = %peer, error = %err);
            }
        });
    }
}
