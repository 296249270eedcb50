use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::Milestone;
use crate::error::{AutoMilestoneError, Result};
use crate::tracker::{IssueTracker, Repository};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Issue tracker backed by the GitHub REST API
#[derive(Debug, Clone)]
pub struct GitHubTracker {
    client: Client,
    api_url: String,
    repository: Repository,
}

#[derive(Debug, Serialize)]
struct UpdateIssueRequest {
    milestone: u64,
}

#[derive(Debug, Deserialize)]
struct IssueResponse {
    #[serde(default)]
    milestone: Option<Milestone>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl GitHubTracker {
    /// Create a tracker for `repository` authenticated with `token`.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not a valid header value or the
    /// HTTP client cannot be built.
    pub fn new(api_url: &str, repository: Repository, token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("auto-milestone/", env!("CARGO_PKG_VERSION"))),
        );

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| AutoMilestoneError::config("github-token contains invalid characters"))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder().default_headers(headers).build()?;

        Ok(GitHubTracker {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            repository,
        })
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    fn repo_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/{}",
            self.api_url, self.repository.owner, self.repository.name, path
        )
    }
}

impl IssueTracker for GitHubTracker {
    fn list_milestones(&self) -> Result<Vec<Milestone>> {
        let url = self.repo_url("milestones");
        debug!(%url, "listing milestones");

        let response = self
            .client
            .get(&url)
            .query(&[("state", "open"), ("per_page", "100")])
            .send()?;

        read_json(response)
    }

    fn assign_milestone(
        &self,
        issue_number: u64,
        milestone_number: u64,
    ) -> Result<Option<Milestone>> {
        let url = self.repo_url(&format!("issues/{}", issue_number));
        debug!(%url, milestone = milestone_number, "updating issue milestone");

        let response = self
            .client
            .patch(&url)
            .json(&UpdateIssueRequest {
                milestone: milestone_number,
            })
            .send()?;

        let issue: IssueResponse = read_json(response)?;
        Ok(issue.milestone)
    }
}

fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text()?;

    if !status.is_success() {
        return Err(AutoMilestoneError::api(status.as_u16(), error_message(&body)));
    }

    Ok(serde_json::from_str(&body)?)
}

/// Message of a GitHub error body, or the raw body when it is not JSON.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.message,
        Err(_) => body.trim().to_string(),
    }
}
