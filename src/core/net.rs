// src/core/net.rs
// One blocking HTTPS GET. Certificate validation stays on (reqwest default); no retries.

use std::time::Instant;

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::options::FetchOptions;
use crate::error::NetworkError;

/// Fetch the planning page described by `opts` and return its body as text.
pub fn fetch_planning_page(opts: &FetchOptions) -> Result<String, NetworkError> {
    let client = Client::builder()
        .user_agent(opts.user_agent.as_str())
        .build()
        .map_err(NetworkError::Client)?;

    http_get(&client, &opts.url)
}

/// GET `url`; anything but a 2xx status is an error.
pub fn http_get(client: &Client, url: &str) -> Result<String, NetworkError> {
    let t = Instant::now();

    let resp = client
        .get(url)
        .send()
        .map_err(|source| NetworkError::Request { url: String::from(url), source })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(NetworkError::Status { url: String::from(url), status });
    }

    let body = resp
        .text()
        .map_err(|source| NetworkError::Body { url: String::from(url), source })?;

    debug!(url, status = status.as_u16(), bytes = body.len(), elapsed = ?t.elapsed(), "fetched page");
    Ok(body)
}
