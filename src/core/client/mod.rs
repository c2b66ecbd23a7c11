//! Public client surface + builder.
//! Defaults live in `constants` (UA, endpoint, page size).

mod constants;

pub use constants::PAGE_SIZE;

use crate::core::EdgarError;
use constants::{DEFAULT_BASE_OWNERSHIP, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Thin wrapper that holds a configured HTTP client and the ownership endpoint.
#[derive(Debug, Clone)]
pub struct EdgarClient {
    http: Client,
    base_ownership: Url,
}

impl Default for EdgarClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl EdgarClient {
    /// Create a new builder.
    pub fn builder() -> EdgarClientBuilder {
        EdgarClientBuilder::default()
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Builds the URL for one page of an issuer's ownership report.
    pub(crate) fn ownership_page_url(&self, cik: &str, offset: usize) -> Url {
        let mut url = self.base_ownership.clone();
        url.query_pairs_mut()
            .append_pair("action", "getissuer")
            .append_pair("CIK", cik)
            .append_pair("type", "")
            .append_pair("dateb", "")
            .append_pair("owner", "include")
            .append_pair("start", &offset.to_string());
        url
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct EdgarClientBuilder {
    user_agent: Option<String>,
    base_ownership: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl EdgarClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the ownership page endpoint (e.g., `https://www.sec.gov/cgi-bin/own-disp`).
    pub fn base_ownership(mut self, url: Url) -> Self {
        self.base_ownership = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<EdgarClient, EdgarError> {
        let base_ownership = match self.base_ownership {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_OWNERSHIP)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(EdgarClient {
            http,
            base_ownership,
        })
    }
}
