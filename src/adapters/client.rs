use reqwest::{Client, Response, StatusCode};
use url::Url;

use crate::adapters::http::{ErrorBody, MessageResponse};
use crate::domain::model::RosterSnapshot;
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::validate_url;

/// HTTP client for a running roster service.
#[derive(Debug, Clone)]
pub struct RosterClient {
    base_url: Url,
    client: Client,
}

impl RosterClient {
    pub fn new(base_url: &str) -> Result<Self> {
        validate_url("base_url", base_url)?;
        let base_url = Url::parse(base_url).map_err(|e| RosterError::ConfigError {
            message: format!("invalid base URL '{}': {}", base_url, e),
        })?;
        Ok(Self {
            base_url,
            client: Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RosterError::ConfigError {
                message: format!("base URL '{}' cannot take a path", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn list_activities(&self) -> Result<RosterSnapshot> {
        let url = self.endpoint(&["activities"])?;
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let response = Self::check(response, "").await?;
        Ok(response.json().await?)
    }

    /// Returns the server's confirmation message.
    pub async fn signup(&self, activity: &str, email: &str) -> Result<String> {
        let url = self.endpoint(&["activities", activity, "signup"])?;
        tracing::debug!("POST {} email={}", url, email);
        let response = self
            .client
            .post(url)
            .query(&[("email", email)])
            .send()
            .await?;
        let response = Self::check(response, activity).await?;
        let body: MessageResponse = response.json().await?;
        Ok(body.message)
    }

    /// Returns the server's confirmation message.
    pub async fn unregister(&self, activity: &str, email: &str) -> Result<String> {
        let url = self.endpoint(&["activities", activity, "unregister"])?;
        tracing::debug!("DELETE {} email={}", url, email);
        let response = self
            .client
            .delete(url)
            .query(&[("email", email)])
            .send()
            .await?;
        let response = Self::check(response, activity).await?;
        let body: MessageResponse = response.json().await?;
        Ok(body.message)
    }

    async fn check(response: Response, activity: &str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.detail)
            .unwrap_or(text);
        Err(error_from_response(status, activity, detail))
    }
}

/// Maps a non-success response back into the roster error taxonomy.
/// The email is not echoed by the server, so it is left empty.
fn error_from_response(status: StatusCode, activity: &str, detail: String) -> RosterError {
    let lowered = detail.to_lowercase();
    match status {
        StatusCode::NOT_FOUND => RosterError::NotFound {
            activity: activity.to_string(),
        },
        StatusCode::BAD_REQUEST if lowered.contains("already") => RosterError::AlreadyEnrolled {
            activity: activity.to_string(),
            email: String::new(),
        },
        StatusCode::BAD_REQUEST if lowered.contains("not signed up") => RosterError::NotEnrolled {
            activity: activity.to_string(),
            email: String::new(),
        },
        StatusCode::BAD_REQUEST if lowered.contains("full") => RosterError::CapacityExceeded {
            activity: activity.to_string(),
            max_participants: 0,
        },
        StatusCode::UNPROCESSABLE_ENTITY => RosterError::InvalidInput {
            field: "email".to_string(),
            reason: detail,
        },
        _ => RosterError::Api {
            status: status.as_u16(),
            detail,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_encodes_activity_names() {
        let client = RosterClient::new("http://127.0.0.1:8000").unwrap();
        let url = client
            .endpoint(&["activities", "Chess Club", "signup"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8000/activities/Chess%20Club/signup"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = RosterClient::new("http://localhost/school/").unwrap();
        let url = client.endpoint(&["activities"]).unwrap();
        assert_eq!(url.path(), "/school/activities");
    }

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(RosterClient::new("ftp://example.com").is_err());
        assert!(RosterClient::new("").is_err());
    }

    #[test]
    fn test_error_mapping() {
        let err = error_from_response(
            StatusCode::BAD_REQUEST,
            "Chess Club",
            "Student is not signed up for this activity".to_string(),
        );
        assert!(matches!(err, RosterError::NotEnrolled { .. }));

        let err = error_from_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Chess Club",
            "boom".to_string(),
        );
        assert!(matches!(err, RosterError::Api { status: 500, .. }));
    }
}
