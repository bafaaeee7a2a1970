/// Process entry point: configuration, storage connection, HTTP listener.

use std::error::Error;
use std::sync::Arc;

use tokio::net::TcpListener;

use normals_service::api::{AppState, routes};
use normals_service::config::AppConfig;
use normals_service::logging::{self, DataSource, LogLevel};
use normals_service::store::PgStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    logging::init_logger(LogLevel::Info, None);

    let config = AppConfig::load()?;
    logging::info(
        DataSource::Sys,
        None,
        &format!(
            "configuration loaded (threshold {}, validate_range_bounds {})",
            config.query.recent_threshold, config.query.validate_range_bounds
        ),
    );

    let database_url = AppConfig::database_url()?;
    let store = PgStore::connect(&database_url).await?;
    logging::info(DataSource::Db, None, "connected to measurement store");

    let state = AppState {
        store: Arc::new(store),
        config: Arc::new(config.clone()),
    };
    let app = routes::create_router(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    logging::info(DataSource::Sys, None, &format!("listening on {}", addr));

    axum::serve(listener, app).await?;
    Ok(())
}
