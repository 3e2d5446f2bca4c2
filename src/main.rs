use actix_web::{App, HttpServer};
use hub_invoicing::config::Config;
use hub_invoicing::invoices::InvoiceCalculator;
use hub_invoicing::middleware::RequestId;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("hub_invoicing={},actix_web=info", config.app.log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let policy = config
        .invoicing
        .rounding_policy()
        .expect("Rounding policy validated above");
    let calculator = InvoiceCalculator::new(policy);

    tracing::info!("Starting Odoo Hub invoicing service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Rounding: {}", policy);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let bind_address = config.server.bind_address();
    let configure = hub_invoicing::configure(calculator);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestId)
            .configure(configure.clone())
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}
