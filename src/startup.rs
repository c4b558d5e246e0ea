use crate::configuration::Settings;
use crate::domain::EmailAddress;
use crate::email_client::EmailClient;
use crate::routes;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Validates the configuration and binds the listener.
    ///
    /// Fails before binding anything if the provider credential, the sender or the
    /// recipient is missing or invalid.
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let email_client = configuration.email_client.client()?;
        let recipient = configuration
            .contact
            .recipient()
            .map_err(|e| anyhow::anyhow!("Invalid recipient email address: {}", e))?;
        tracing::info!(
            sender = %email_client.sender(),
            recipient = %recipient,
            "Email provider configured"
        );

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(
            listener,
            email_client,
            recipient,
            configuration.application.site_name,
        )?;
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

/// Largest request body accepted by the contact endpoint.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Address that receives every contact form notification.
pub struct ContactRecipient(pub EmailAddress);

/// Site name printed in the notification footer.
pub struct SiteName(pub String);

pub fn run(
    listener: TcpListener,
    email_client: EmailClient,
    recipient: EmailAddress,
    site_name: String,
) -> Result<Server, std::io::Error> {
    let email_client = web::Data::new(email_client);
    let recipient = web::Data::new(ContactRecipient(recipient));
    let site_name = web::Data::new(SiteName(site_name));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route(
                "/health_check",
                web::get().to(routes::health_check::health_check),
            )
            .route("/api/contact", web::post().to(routes::contact::contact))
            .app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
            .app_data(email_client.clone())
            .app_data(recipient.clone())
            .app_data(site_name.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
