use std::sync::Arc;

use clap::Parser;
use poem::{Server, listener::TcpListener};

use clubreview_backend::AppData;
use clubreview_backend::api::build_routes;
use clubreview_backend::cli::{Cli, Commands, execute_command};
use clubreview_backend::config::{Settings, init_logging};
use clubreview_backend::providers::SystemClock;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging()?;

    let cli = Cli::parse();
    let settings = Settings::from_env()?;
    tracing::debug!("Loaded settings: {:?}", settings);

    let app_data = Arc::new(AppData::init(settings, Arc::new(SystemClock)).await?);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(app_data).await?,
        command => execute_command(command, app_data).await?,
    }

    Ok(())
}

async fn serve(app_data: Arc<AppData>) -> Result<(), Box<dyn std::error::Error>> {
    app_data.database.migrate().await?;

    let bind_address = app_data.settings.bind_address();
    let server_url = format!("http://localhost:{}", app_data.settings.server_port);
    let app = build_routes(app_data, &server_url);

    tracing::info!("Starting server on http://{}", bind_address);
    tracing::info!("Swagger UI available at {}/swagger", server_url);

    Server::new(TcpListener::bind(bind_address)).run(app).await?;
    Ok(())
}
