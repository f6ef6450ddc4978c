use sales_dashboard::{AppState, Config, router};
use std::net::SocketAddr;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env()?;
    info!(source = %config.source, policy = ?config.policy, "loading sales table");

    let table = config.source.load().await?;
    info!(header = ?table.header, rows = table.row_count(), "parsed table");
    for (number, row) in table.rows.iter().enumerate() {
        debug!(row = number + 1, cells = ?row);
    }

    let state = AppState::new(&config, table);
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
