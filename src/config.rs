use crate::error::ConfigError;
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SonarConfig {
    pub base_url: String,
    pub token: String,
    pub project_key: String,
    pub branch: Option<String>,
}

impl SonarConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let required = |name: &'static str| non_empty(name).ok_or(ConfigError::Missing(name));

        Ok(Self {
            base_url: required("SONAR_BASE_URL")?.trim_end_matches('/').to_string(),
            token: required("SONAR_TOKEN")?,
            project_key: required("SONAR_PROJECT_KEY")?,
            branch: non_empty("SONAR_BRANCH"),
        })
    }
}
