use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;

use super::{SolveRequest, SolveResponse, SolveService};

/// `POST {url}` with a JSON body; any non-2xx status or undecodable body is an error.
pub struct HttpSolveService {
    url: String,
    client: Client,
}

impl HttpSolveService {
    /// `timeout: None` lets an exact solve run for as long as the server needs.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client for the solver")?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

impl SolveService for HttpSolveService {
    fn solve(&self, request: &SolveRequest) -> Result<SolveResponse> {
        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .with_context(|| format!("failed to reach solver at {}", self.url))?
            .error_for_status()
            .context("solver rejected the request")?;

        response
            .json::<SolveResponse>()
            .context("solver returned a malformed response")
    }
}
