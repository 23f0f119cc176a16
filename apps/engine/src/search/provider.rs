//! Job Provider — the single point of entry for upstream job-search calls.
//!
//! The orchestrator only sees the [`JobProvider`] trait; [`HttpJobProvider`]
//! is the production adapter over the upstream search API. Provider failures
//! are never retried here: a task either gets its one page of postings or
//! fails with a condition the caller can distinguish.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::models::job::JobPosting;

/// Query for one provider page.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub keyword: String,
    pub location: String,
    /// Free-form experience hint forwarded upstream ("senior", "entry level").
    pub experience_hint: Option<String>,
    pub page: u32,
    pub page_count: u32,
    pub company: Option<String>,
    pub platform: Option<String>,
}

/// Provider failure taxonomy. Callers surface these as distinct task
/// failures; none of them are retried automatically.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Job provider rate limit exceeded")]
    RateLimited,

    #[error("Job provider rejected credentials")]
    Auth,

    #[error("Job provider rejected the request: {0}")]
    BadRequest(String),

    #[error("Job provider returned status {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Job provider unreachable: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Job provider response could not be decoded: {0}")]
    Decode(String),
}

/// The external job-search collaborator. Implementations return normalized
/// postings for one page; the engine treats the data as already fetched and
/// normalized beyond this seam.
#[async_trait]
pub trait JobProvider: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<JobPosting>, ProviderError>;
}

// ────────────────────────────────────────────────────────────────────────────
// HTTP adapter
// ────────────────────────────────────────────────────────────────────────────

/// Production adapter over the upstream job-search HTTP API.
pub struct HttpJobProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpJobProvider {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.provider_base_url, &config.provider_api_key)
    }
}

#[async_trait]
impl JobProvider for HttpJobProvider {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<JobPosting>, ProviderError> {
        let mut params: Vec<(&str, String)> = vec![
            ("query", query.keyword.clone()),
            ("location", query.location.clone()),
            ("page", query.page.to_string()),
            ("num_pages", query.page_count.to_string()),
        ];
        if let Some(hint) = &query.experience_hint {
            params.push(("experience", hint.clone()));
        }
        if let Some(company) = &query.company {
            params.push(("company", company.clone()));
        }
        if let Some(platform) = &query.platform {
            params.push(("platform", platform.clone()));
        }

        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .header("X-API-KEY", &self.api_key)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                429 => ProviderError::RateLimited,
                401 | 403 => ProviderError::Auth,
                400 => ProviderError::BadRequest(message),
                code => ProviderError::Upstream {
                    status: code,
                    message,
                },
            });
        }

        let body: SearchResponseWire = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        debug!(count = body.data.len(), keyword = %query.keyword, "provider page fetched");
        Ok(body.data.into_iter().map(JobWire::into_posting).collect())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Wire format
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SearchResponseWire {
    #[serde(default)]
    data: Vec<JobWire>,
}

/// Upstream posting shape. Everything except the title is optional on the
/// wire; normalization fills the blanks.
#[derive(Debug, Deserialize)]
struct JobWire {
    #[serde(default)]
    job_title: String,
    #[serde(default)]
    employer_name: String,
    #[serde(default)]
    job_location: String,
    #[serde(default)]
    job_description: String,
    #[serde(default)]
    required_skills: Vec<String>,
    #[serde(default)]
    preferred_skills: Vec<String>,
    #[serde(default)]
    min_experience_years: f64,
    max_experience_years: Option<f64>,
    required_education: Option<String>,
    role_type: Option<String>,
    job_url: Option<String>,
}

impl JobWire {
    fn into_posting(self) -> JobPosting {
        JobPosting {
            title: self.job_title,
            company: self.employer_name,
            location: self.job_location,
            description: self.job_description,
            required_skills: self.required_skills,
            preferred_skills: self.preferred_skills,
            min_experience: self.min_experience_years,
            max_experience: self.max_experience_years,
            required_education: self.required_education,
            role_type: self.role_type,
            url: self.job_url,
        }
    }
}
