//! HTTP boundary to the remote poll service

use reqwest::{Client, StatusCode};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::PollError;
use crate::models::{Poll, SubmissionRequest};

/// Client for the two poll service operations: fetch a poll by identifier
/// and submit a response for it.
pub struct PollClient {
    http: Client,
    endpoint: String,
}

impl PollClient {
    pub fn new(config: &Config) -> Result<Self, PollError> {
        let http = Client::builder()
            .user_agent(&config.http.user_agent)
            .timeout(config.http_timeout())
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch a poll by identifier. `Ok(None)` means the service answered but
    /// holds no poll for this id (404 or a null body).
    pub async fn fetch_poll(&self, id: &str) -> Result<Option<Poll>, PollError> {
        let url = format!("{}/poll/{}", self.endpoint, id);
        debug!("Fetching poll from {}", url);

        let response = self.http.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(PollError::Api {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let body = response.text().await?;
        let poll: Option<Poll> = serde_json::from_str(&body)?;
        Ok(poll)
    }

    /// Submit a response. The service documents no response body; only
    /// success or failure of the transmission is observed.
    pub async fn submit_response(
        &self,
        id: &str,
        submission: &SubmissionRequest,
    ) -> Result<(), PollError> {
        let url = format!("{}/poll/respond/{}", self.endpoint, id);
        info!("Submitting response for poll {} as '{}'", id, submission.name);

        let response = self.http.post(&url).json(submission).send().await?;
        if !response.status().is_success() {
            return Err(PollError::Api {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        Ok(())
    }
}
