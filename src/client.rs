//! Organization directory client.
//! Fetches org metadata and the repository list, memoizing each payload per client.

use std::sync::Arc;

use serde_json::Value;

use crate::error::{OctodirError, Result};
use crate::json::access_nested;
use crate::memo::MemoCell;
use crate::transport::{HttpTransport, Transport};

const GITHUB_API_BASE: &str = "https://api.github.com";

/// Client for one organization's directory entry.
///
/// The org name is fixed at construction and determines every derived value.
/// Each remote payload is fetched at most once per client instance: `org`,
/// the repository-listing URL derived from it, and the repository list itself
/// are memoized independently. `public_repos` takes a parameter and is
/// recomputed on every call from the memoized payload.
pub struct OrgClient {
    org_name: String,
    base_url: String,
    transport: Arc<dyn Transport>,
    org: MemoCell<Value>,
    repos_url: MemoCell<String>,
    repos_payload: MemoCell<Value>,
}

impl OrgClient {
    /// Create a client for `org_name` using the production HTTP transport.
    pub fn new(org_name: &str) -> Result<Self> {
        Ok(Self::with_transport(
            org_name,
            Arc::new(HttpTransport::new()?),
        ))
    }

    /// Create a client for `org_name` over an injected transport.
    pub fn with_transport(org_name: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            org_name: org_name.to_string(),
            base_url: GITHUB_API_BASE.to_string(),
            transport,
            org: MemoCell::new("org"),
            repos_url: MemoCell::new("repos_url"),
            repos_payload: MemoCell::new("repos_payload"),
        }
    }

    /// Override the API base URL (GitHub Enterprise deployments, tests).
    /// The repository-listing URL is still taken from the org payload.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// The organization name this client was built for.
    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    /// The organization's metadata payload, fetched once per client.
    pub async fn org(&self) -> Result<&Value> {
        self.org
            .get_or_try_init(|| {
                let url = format!("{}/orgs/{}", self.base_url, self.org_name);
                async move { self.transport.get_json(&url).await }
            })
            .await
    }

    /// The repository-listing URL, taken from the org payload's `repos_url`
    /// field. Forces `org` to resolve on first access.
    pub async fn repos_url(&self) -> Result<&str> {
        self.repos_url
            .get_or_try_init(|| async {
                let org = self.org().await?;
                let url = access_nested(org, &["repos_url"])?;
                url.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| OctodirError::UnexpectedType("repos_url".to_string()))
            })
            .await
            .map(String::as_str)
    }

    /// The raw repository list, fetched once per client from `repos_url`.
    pub async fn repos_payload(&self) -> Result<&Value> {
        self.repos_payload
            .get_or_try_init(|| async {
                let url = self.repos_url().await?;
                self.transport.get_json(url).await
            })
            .await
    }

    /// Repository names in payload order, optionally filtered to those whose
    /// `license.key` equals `license`. Filtering is stable and does not
    /// deduplicate.
    pub async fn public_repos(&self, license: Option<&str>) -> Result<Vec<String>> {
        let payload = self.repos_payload().await?;
        let repos = payload
            .as_array()
            .ok_or_else(|| OctodirError::UnexpectedType("repository list".to_string()))?;

        let mut names = Vec::new();
        for repo in repos {
            if let Some(license) = license {
                if !Self::has_license(repo, license) {
                    continue;
                }
            }
            let name = access_nested(repo, &["name"])?
                .as_str()
                .ok_or_else(|| OctodirError::UnexpectedType("repository name".to_string()))?;
            names.push(name.to_string());
        }
        Ok(names)
    }

    /// Whether `repo`'s nested `license.key` equals `license`.
    ///
    /// Tolerant by policy: a missing or malformed license field means false,
    /// never an error, unlike the strict lookup it is built on.
    pub fn has_license(repo: &Value, license: &str) -> bool {
        match access_nested(repo, &["license", "key"]) {
            Ok(key) => key.as_str() == Some(license),
            Err(_) => false,
        }
    }
}
