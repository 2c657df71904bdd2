use crate::domain::model::{GapRequest, SkillGap};
use crate::domain::ports::{AdvisoryService, ConfigProvider};
use crate::utils::error::{AdvisorError, Result};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/analyze-skill-gap";

/// Advisory service reached over HTTP. One POST per analysis, no retries and
/// no request timeout.
#[derive(Debug, Clone)]
pub struct HttpAdvisoryClient {
    client: Client,
    endpoint: String,
}

impl HttpAdvisoryClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.advisory_endpoint())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

const GENERIC_FAILURE: &str = "Failed to analyze skill gap";

/// Message carried by a set `error` field. `null`, `false`, `0` and `""`
/// count as unset.
fn reported_error(error: &serde_json::Value) -> Option<String> {
    use serde_json::Value;

    match error {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(text) if text.trim().is_empty() => Some(GENERIC_FAILURE.to_string()),
        Value::String(text) => Some(text.clone()),
        Value::Bool(true) => Some(GENERIC_FAILURE.to_string()),
        other => Some(other.to_string()),
    }
}

/// Reads a 2xx body: a set `error` field wins, otherwise the body must be a
/// complete, in-range gap report.
fn decode_gap(body: &str) -> Result<SkillGap> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| AdvisorError::Decode {
            message: format!("response is not JSON: {}", e),
        })?;

    if let Some(message) = value.get("error").and_then(reported_error) {
        return Err(AdvisorError::ServiceReported { message });
    }

    let gap: SkillGap = serde_json::from_value(value).map_err(|e| AdvisorError::Decode {
        message: e.to_string(),
    })?;
    gap.validate().map_err(|e| AdvisorError::Decode {
        message: e.to_string(),
    })?;
    Ok(gap)
}

#[async_trait]
impl AdvisoryService for HttpAdvisoryClient {
    async fn analyze(&self, request: &GapRequest) -> Result<SkillGap> {
        tracing::debug!("Making advisory request to: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Advisory response status: {}", status);

        if !status.is_success() {
            return Err(AdvisorError::ServiceStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        decode_gap(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample::sample_profile;
    use httpmock::prelude::*;
    use serde_json::json;

    fn request() -> GapRequest {
        GapRequest {
            role: "Full Stack Developer".to_string(),
            skills: sample_profile().skills,
        }
    }

    fn gap_body() -> serde_json::Value {
        json!({
            "missingSkills": ["Docker", "AWS", "MongoDB", "GraphQL"],
            "partialSkills": [
                {"name": "Node.js", "currentLevel": 60, "requiredLevel": 80},
                {"name": "Python", "currentLevel": 50, "requiredLevel": 70}
            ],
            "recommendations": [{
                "title": "AWS Certified Developer Associate",
                "provider": "AWS",
                "duration": "3 months",
                "difficulty": "Advanced",
                "url": "https://aws.amazon.com/certification/certified-developer-associate/",
                "skillsCovered": ["AWS", "Cloud Computing", "Serverless"]
            }]
        })
    }

    #[tokio::test]
    async fn test_analyze_posts_role_and_skills() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/analyze-skill-gap")
                .json_body(json!({
                    "role": "Full Stack Developer",
                    "skills": [
                        {"name": "React", "proficiency": 80, "category": "Frontend"},
                        {"name": "TypeScript", "proficiency": 75, "category": "Programming"},
                        {"name": "Node.js", "proficiency": 60, "category": "Backend"},
                        {"name": "Python", "proficiency": 50, "category": "Programming"}
                    ]
                }));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(gap_body());
        });

        let client = HttpAdvisoryClient::new(server.url("/api/analyze-skill-gap"));
        let gap = client.analyze(&request()).await.unwrap();

        mock.assert();
        assert_eq!(gap.missing_skills.len(), 4);
        assert_eq!(gap.partial_skills[0].required_level, 80);
        assert_eq!(gap.recommendations[0].skills_covered[0], "AWS");
    }

    #[tokio::test]
    async fn test_non_success_status_ignores_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/analyze-skill-gap");
            then.status(400)
                .json_body(json!({"error": "Missing role or skills data"}));
        });

        let client = HttpAdvisoryClient::new(server.url("/api/analyze-skill-gap"));
        let err = client.analyze(&request()).await.unwrap_err();

        assert!(matches!(err, AdvisorError::ServiceStatus { status: 400 }));
    }

    #[tokio::test]
    async fn test_error_field_in_success_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/analyze-skill-gap");
            then.status(200).json_body(json!({"error": "Unknown role"}));
        });

        let client = HttpAdvisoryClient::new(server.url("/api/analyze-skill-gap"));
        let err = client.analyze(&request()).await.unwrap_err();

        match err {
            AdvisorError::ServiceReported { message } => assert_eq!(message, "Unknown role"),
            other => panic!("expected service-reported error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_fields_are_a_decode_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/analyze-skill-gap");
            then.status(200).json_body(json!({"missingSkills": ["Docker"]}));
        });

        let client = HttpAdvisoryClient::new(server.url("/api/analyze-skill-gap"));
        let err = client.analyze(&request()).await.unwrap_err();

        assert!(matches!(err, AdvisorError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_non_json_body_is_a_decode_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/analyze-skill-gap");
            then.status(200).body("<html>maintenance</html>");
        });

        let client = HttpAdvisoryClient::new(server.url("/api/analyze-skill-gap"));
        let err = client.analyze(&request()).await.unwrap_err();

        assert!(matches!(err, AdvisorError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let client = HttpAdvisoryClient::new("http://127.0.0.1:1/api/analyze-skill-gap");
        let err = client.analyze(&request()).await.unwrap_err();

        assert!(matches!(err, AdvisorError::Transport(_)));
        assert!(!err.user_friendly_message().is_empty());
    }

    #[test]
    fn test_decode_rejects_out_of_range_levels() {
        let mut body = gap_body();
        body["partialSkills"][0]["currentLevel"] = json!(150);

        let err = decode_gap(&body.to_string()).unwrap_err();
        assert!(matches!(err, AdvisorError::Decode { .. }));
    }

    #[test]
    fn test_unset_error_field_decodes_report() {
        for unset in [json!(null), json!(false), json!("")] {
            let mut body = gap_body();
            body["error"] = unset;

            let gap = decode_gap(&body.to_string()).unwrap();
            assert_eq!(gap.missing_skills.len(), 4);
        }
    }

    #[test]
    fn test_blank_error_text_gets_generic_message() {
        let err = decode_gap(r#"{"error": "   "}"#).unwrap_err();
        assert_eq!(err.user_friendly_message(), "Failed to analyze skill gap");

        let err = decode_gap(r#"{"error": true}"#).unwrap_err();
        assert_eq!(err.user_friendly_message(), "Failed to analyze skill gap");
    }

    #[test]
    fn test_structured_error_is_reported() {
        let err = decode_gap(r#"{"error": {"code": 42}}"#).unwrap_err();
        assert!(matches!(err, AdvisorError::ServiceReported { .. }));
        assert!(!err.user_friendly_message().is_empty());
    }
}
