use geobeacon::api::{create_router, ServerState};
use geobeacon::{Config, Result};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt::try_init();

    let config = Config::load()?;
    let app = create_router(ServerState::new(config.ack_delay));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Location stub server listening on http://{}", addr);
    info!("  POST /api/location           {{\"latitude\": <lat>, \"longitude\": <lon>}}");
    info!("  POST /api/location-services  (same payload)");
    info!("Acknowledging after {:?}", config.ack_delay);

    axum::serve(listener, app).await?;
    Ok(())
}
