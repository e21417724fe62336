use eco_meter::{ledger::keys, router, AppState, Config, FileStore};
use std::net::SocketAddr;
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    if let Some(parent) = config.data_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    let store = FileStore::open(config.data_path.clone()).await;
    info!("using data file {}", store.path().display());
    let state = AppState::new(store);

    if let Some(period) = config.refresh_interval {
        let refresher = state.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                refresher.refresh_external().await;
            }
        });
        state.changes.on_external_change(keys::RECENT_ACTIONS, |key| {
            info!("{key} was updated by another writer");
        });
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
