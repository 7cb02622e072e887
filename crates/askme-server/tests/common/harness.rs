//! Test server harness.

use std::net::SocketAddr;
use std::time::Duration;

use askme::{CorpusIndex, FaqCorpus, FaqRouter};
use askme_server::gateway::{HandlerState, cors_layer, create_router_with_state};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

const STARTUP_WAIT_TIMEOUT_SECS: u64 = 5;
const STARTUP_POLL_INTERVAL_MS: u64 = 50;

pub const DEFAULT_FAQ_JSON: &str = r#"{
    "perguntas": {
        "1": "Qual o horário de funcionamento?",
        "2": "Como faço para cancelar meu pedido?",
        "3": "Vocês entregam aos domingos?"
    },
    "respostas": {
        "1": "Funcionamos das 9h às 18h.",
        "2": "Acesse o app e toque em cancelar.",
        "3": "Sim, entregamos aos domingos das 10h às 16h."
    }
}"#;

#[derive(Debug, Clone)]
pub struct TestServerConfig {
    pub faq_json: String,
    pub cors_origins: Vec<String>,
    pub parallel_threshold: usize,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            faq_json: DEFAULT_FAQ_JSON.to_string(),
            cors_origins: Vec::new(),
            parallel_threshold: askme::DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

pub struct TestServer {
    pub addr: SocketAddr,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    _temp_dir: TempDir,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub async fn wait_for_server_ready(
    addr: SocketAddr,
    timeout: Duration,
    interval: Duration,
) -> Result<(), ServerStartupError> {
    let start = std::time::Instant::now();

    loop {
        if start.elapsed() > timeout {
            return Err(ServerStartupError::Timeout);
        }

        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => return Ok(()),
            Err(_) => {
                tokio::time::sleep(interval).await;
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerStartupError {
    #[error("Server failed to start within timeout")]
    Timeout,
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
    #[error("Server startup failed: {0}")]
    StartupFailed(String),
}

/// Spawns a server on an ephemeral port, loading its corpus from a FAQ file on disk.
///
/// The corpus goes through the same load/index path as the binary, so malformed
/// `faq_json` surfaces as [`ServerStartupError::StartupFailed`].
pub async fn spawn_test_server(config: TestServerConfig) -> Result<TestServer, ServerStartupError> {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
    let local_addr = listener.local_addr()?;

    let temp_dir = TempDir::new()?;
    let faq_path = temp_dir.path().join("faq.json");
    std::fs::write(&faq_path, &config.faq_json)?;

    let corpus =
        FaqCorpus::load(&faq_path).map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?;
    let index: CorpusIndex =
        CorpusIndex::build(corpus).map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?;
    let router = FaqRouter::new(index).with_parallel_threshold(config.parallel_threshold);

    let app = create_router_with_state(
        HandlerState::new(router),
        cors_layer(&config.cors_origins),
    );

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    wait_for_server_ready(
        local_addr,
        Duration::from_secs(STARTUP_WAIT_TIMEOUT_SECS),
        Duration::from_millis(STARTUP_POLL_INTERVAL_MS),
    )
    .await?;

    Ok(TestServer {
        addr: local_addr,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
        _temp_dir: temp_dir,
    })
}
