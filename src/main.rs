use contact_mailer::configuration::get_configuration;
use contact_mailer::startup::Application;
use contact_mailer::telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("contact_mailer".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().map_err(|e| {
        tracing::error!(error.message = %e, "Failed to read configuration");
        e
    })?;
    let application = Application::build(configuration).await.map_err(|e| {
        tracing::error!(error.cause_chain = ?e, "Refusing to start");
        e
    })?;
    tracing::info!(port = application.port(), "Contact form service listening");
    application.run_until_stopped().await?;
    Ok(())
}
