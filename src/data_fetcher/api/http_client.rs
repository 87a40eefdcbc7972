//! HTTP client creation and configuration utilities

use reqwest::blocking::Client;
use std::time::Duration;

/// Creates the blocking HTTP client used for every request of an invocation.
///
/// Without a timeout the reqwest default applies. A configured timeout is
/// only set when the user asked for one.
pub fn create_http_client(timeout_seconds: Option<u64>) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(seconds) = timeout_seconds {
        builder = builder.timeout(Duration::from_secs(seconds));
    }
    builder.build()
}
