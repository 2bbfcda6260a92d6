use std::net::SocketAddr;

use swapi_proxy::{AppState, Config, Server, app};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// A proxy running on an ephemeral port. Shuts down when dropped.
pub struct TestProxy {
    addr: SocketAddr,
    _shutdown: oneshot::Sender<()>,
}

impl TestProxy {
    pub async fn start(swapi_url: Option<String>) -> Self {
        let config = Config::from_lookup(|key| match key {
            "SWAPI_URL" => swapi_url.clone(),
            "BIND_ADDR" => Some("127.0.0.1:0".to_owned()),
            _ => None,
        })
        .unwrap();
        let state = AppState::new(config).unwrap();

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            Server::from_listener(listener)
                .serve_with_shutdown(app(state), async {
                    let _ = rx.await;
                })
                .await
                .unwrap();
        });

        Self { addr, _shutdown: tx }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}
