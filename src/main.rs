use anyhow::Result;

use paintpro_backend::{app, config, logging, services::PricingSettingsService};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = config::Settings::from_env()?;

    // Initialize logging
    logging::init_logging(&settings.env);

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        strict_service_types = settings.strict_service_types,
        "Starting PaintPro backend"
    );

    // Pricing configuration service, shared by every handler
    let pricing = PricingSettingsService::new(settings.default_pricing);
    tracing::info!(
        labor_rate = pricing.default_pricing().labor_rate,
        "Pricing settings initialized"
    );

    // Create application state
    let state = app::AppState::new(settings.clone(), pricing);

    // Build application
    let app = app::create_app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&settings.server_addr).await?;
    tracing::info!("Listening on {}", settings.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
