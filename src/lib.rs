pub mod configuration;
pub mod contact_client;
pub mod domain;
pub mod email_client;
pub mod email_template;
pub mod form;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod utils;
