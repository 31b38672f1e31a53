use crate::{Error, Result, Week};
use log::info;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::time::Duration;

pub const ESPN_NFL_SITE_V2: &str = "http://site.api.espn.com/apis/site/v2/sports/football/nfl";
pub const HTTPBIN_POST: &str = "https://httpbin.org/post";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// NFL scoreboard client backed by ESPN's public site API.
#[derive(Debug, Clone)]
pub struct NflApi {
    client: Client,
    base_url: String,
    echo_url: String,
    timeout: Duration,
}

impl Default for NflApi {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent("nflscores/0.1 (weekly scoreboard cache)")
                .build()
                .unwrap_or_default(),
            base_url: ESPN_NFL_SITE_V2.to_owned(),
            echo_url: HTTPBIN_POST.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// What the echo endpoint sent back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchoResponse {
    pub status: u16,
    pub body: String,
}

impl NflApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    pub fn with_echo_url(mut self, echo_url: impl Into<String>) -> Self {
        self.echo_url = echo_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn scoreboard_url(&self, week: Week) -> String {
        format!("{}/scoreboard?week={week}", self.base_url)
    }

    /// Fetch one week's scoreboard as an untyped document, so it can be
    /// cached exactly as received.
    pub async fn fetch_scoreboard(&self, week: Week) -> Result<Value> {
        let url = self.scoreboard_url(week);
        info!("Retrieving: {url}");
        self.get(&url).await
    }

    /// POST `payload` to the echo endpoint. Used as a connectivity check.
    pub async fn sanity(&self, payload: &str) -> Result<EchoResponse> {
        let url = self.echo_url.as_str();
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(payload.to_owned())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| Error::Network(e, url.to_owned()))?
            .error_for_status()
            .map_err(|e| Error::Remote(e, url.to_owned()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Parsing(e, url.to_owned()))?;
        Ok(EchoResponse { status, body })
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| Error::Network(e, url.to_owned()))?;

        match response.error_for_status() {
            Ok(res) => res
                .json::<T>()
                .await
                .map_err(|e| Error::Parsing(e, url.to_owned())),
            Err(e) => Err(Error::Remote(e, url.to_owned())),
        }
    }
}
