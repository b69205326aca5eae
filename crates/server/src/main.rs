use database::db::create_connection;
use log::{error, info};
use migration::{Migrator, MigratorTrait};
use server::{AppState, build_router, config::Config, utils::shutdown::shutdown_signal};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    let db = create_connection(&config.database_url).await?;
    if config.run_migrations {
        info!("Applying pending migrations");
        Migrator::up(&db, None).await?;
    }

    let app = build_router(AppState { db });

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Running axum on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
