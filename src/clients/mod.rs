//! Outbound HTTP clients

pub mod astros_client;
pub mod directive_client;

use once_cell::sync::Lazy;
use reqwest::Client;
use std::time::Duration;

pub use astros_client::{AstrosClient, CountSource};
pub use directive_client::{DirectiveClient, DirectiveSender};

pub(crate) static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .expect("Failed to create HTTP client")
});
