//! Askme HTTP server entrypoint.

use std::net::SocketAddr;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use askme::config::Config;
use askme::{CorpusIndex, FaqCorpus, FaqRouter};
use askme_server::gateway::{HandlerState, cors_layer, create_router_with_state};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!(
        r#"
   __ _  ___| | ___ __ ___   ___
  / _` |/ __| |/ / '_ ` _ \ / _ \
 | (_| |\__ \   <| | | | | |  __/
  \__,_||___/_|\_\_| |_| |_|\___|

        ASK. SCORE. ROUTE.
                          AGPL-3.0
"#
    );

    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check());
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        faq_path = %config.faq_path.display(),
        "Askme starting"
    );

    let corpus = FaqCorpus::load(&config.faq_path)?;
    let index: CorpusIndex = CorpusIndex::build(corpus)?;
    let router = FaqRouter::new(index).with_parallel_threshold(config.parallel_threshold);

    if config.cors_origins.is_empty() {
        tracing::info!("CORS: any origin");
    } else {
        tracing::info!(origins = ?config.cors_origins, "CORS: restricted");
    }

    let app = create_router_with_state(
        HandlerState::new(router),
        cors_layer(&config.cors_origins),
    );

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Askme shutdown complete");
    Ok(())
}

fn run_health_check() -> i32 {
    let port = ["ASKME_PORT", "PORT"]
        .iter()
        .find_map(|var| std::env::var(var).ok())
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let Ok(rt) = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    else {
        return 1;
    };

    rt.block_on(async {
        let Ok(client) = reqwest::Client::builder()
            .timeout(Duration::from_secs(1))
            .build()
        else {
            return 1;
        };

        match client.get(&url).send().await {
            Ok(res) if res.status().is_success() => 0,
            _ => 1,
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
