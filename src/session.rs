use crate::error::SessionError;
use async_trait::async_trait;
use reqwest::header;
use serde_json::Value;

/// A pre-authenticated transport the client issues its GET requests through.
#[async_trait]
pub trait HttpSession: Send + Sync {
    type Response: HttpResponse;

    async fn get(&self, url: &str, params: &[(&str, &str)]) -> Result<Self::Response, SessionError>;
}

#[async_trait]
pub trait HttpResponse: Send + Sized {
    /// Fails on any non-2xx status.
    fn error_for_status(self) -> Result<Self, SessionError>;

    async fn json(self) -> Result<Value, SessionError>;
}

pub struct ReqwestSession {
    client: reqwest::Client,
}

impl ReqwestSession {
    pub fn new(token: &str) -> Result<Self, SessionError> {
        let mut headers = header::HeaderMap::new();

        let mut auth_value = header::HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| SessionError::Other(e.to_string()))?;
        auth_value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth_value);
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(Self {
            client: reqwest::Client::builder().default_headers(headers).build()?,
        })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn build_request(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<reqwest::Request, SessionError> {
        Ok(self.client.get(url).query(params).build()?)
    }
}

#[async_trait]
impl HttpSession for ReqwestSession {
    type Response = reqwest::Response;

    async fn get(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<Self::Response, SessionError> {
        let request = self.build_request(url, params)?;
        Ok(self.client.execute(request).await?)
    }
}

#[async_trait]
impl HttpResponse for reqwest::Response {
    fn error_for_status(self) -> Result<Self, SessionError> {
        Ok(reqwest::Response::error_for_status(self)?)
    }

    async fn json(self) -> Result<Value, SessionError> {
        Ok(reqwest::Response::json::<Value>(self).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_parameters_are_encoded_into_url() {
        let session = ReqwestSession::new("squ_token").unwrap();

        let request = session
            .build_request(
                "https://sonar.example.com/api/issues/search",
                &[("componentKeys", "my project"), ("branch", "feature/x")],
            )
            .unwrap();

        assert_eq!(
            request.url().query(),
            Some("componentKeys=my+project&branch=feature%2Fx")
        );
    }

    #[test]
    fn empty_params_leave_query_unset() {
        let session = ReqwestSession::with_client(reqwest::Client::new());

        let request = session
            .build_request("https://sonar.example.com/api/metrics/search", &[])
            .unwrap();

        assert_eq!(request.url().query(), None);
    }

    #[test]
    fn invalid_token_is_rejected() {
        assert!(matches!(
            ReqwestSession::new("bad\ntoken"),
            Err(SessionError::Other(_))
        ));
    }
}
