use crate::config::SonarConfig;
use crate::error::{SessionError, SonarQubeError};
use crate::models::*;
use crate::session::{HttpResponse, HttpSession, ReqwestSession};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

pub struct SonarQubeClient<S> {
    base_url: String,
    session: S,
}

impl<S: HttpSession> SonarQubeClient<S> {
    pub fn new(base_url: impl Into<String>, session: S) -> Self {
        Self {
            base_url: base_url.into(),
            session,
        }
    }

    pub fn create(base_url: impl Into<String>, session: S) -> Self {
        Self::new(base_url, session)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    async fn _get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, SessionError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(url = %url, ?params, "GET request");

        let body = self
            .session
            .get(&url, params)
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Issues for a project, projected onto [`ISSUE_FIELDS`]. Only the first
    /// page the server returns is read.
    ///
    /// Transport and decode failures are returned as-is.
    pub async fn get_issues(
        &self,
        project_key: &str,
        branch: Option<&str>,
    ) -> Result<Vec<IssueRecord>, SessionError> {
        let mut params = vec![("componentKeys", project_key)];
        if let Some(branch) = branch.filter(|b| !b.is_empty()) {
            params.push(("branch", branch));
        }

        let response: IssueSearchResponse = self._get("/api/issues/search", &params).await?;
        let issues: Vec<IssueRecord> = response.issues.iter().map(extract_issue_fields).collect();

        debug!(project_key, count = issues.len(), "Fetched issues");
        Ok(issues)
    }

    /// The [`TRACKED_METRIC`] value for a project, or an empty map when the
    /// server reports no such metric.
    pub async fn get_metrics(&self, project_key: &str) -> Result<MetricsAggregate, SonarQubeError> {
        self._get::<MetricSearchResponse>("/api/metrics/search", &[("projectKeys", project_key)])
            .await
            .map(|response| aggregate_metrics(&response.metrics))
            .map_err(|e| {
                warn!(project_key, error = %e, "Failed to get metrics");
                SonarQubeError::MetricsRetrieval(e)
            })
    }
}

impl SonarQubeClient<ReqwestSession> {
    pub fn from_config(config: &SonarConfig) -> Result<Self, SessionError> {
        Ok(Self::new(
            config.base_url.clone(),
            ReqwestSession::new(&config.token)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_keeps_base_url() {
        let config = SonarConfig {
            base_url: "https://sonar.example.com".to_string(),
            token: "squ_abc".to_string(),
            project_key: "acme".to_string(),
            branch: None,
        };

        let client = SonarQubeClient::from_config(&config).unwrap();

        assert_eq!(client.base_url(), "https://sonar.example.com");
    }
}
