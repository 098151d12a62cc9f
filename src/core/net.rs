// src/core/net.rs
//
// One GET at a time over a blocking reqwest client. The `Fetch` seam lets the
// lookup driver run against canned pages in tests.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{LookupError, Result};

/// A fetched page. `url` is where we ended up after redirects.
#[derive(Clone, Debug)]
pub struct Fetched {
    pub url: Url,
    pub body: String,
}

pub trait Fetch {
    fn get(&self, url: &Url) -> Result<Fetched>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(Duration::from_secs(REQUEST_TIMEOUT_SECS), USER_AGENT)
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &Url) -> Result<Fetched> {
        logd!("GET {url}");
        let resp = self.client.get(url.clone()).send()?;
        let status = resp.status();
        let final_url = resp.url().clone();
        // 4xx still carries the site's own "not found" page, so let the parser see it.
        if status.is_server_error() {
            return Err(LookupError::Status {
                status: status.as_u16(),
                url: final_url.to_string(),
            });
        }
        let body = resp.text()?;
        logd!("GET {final_url} → {} ({} bytes)", status.as_u16(), body.len());
        Ok(Fetched { url: final_url, body })
    }
}
