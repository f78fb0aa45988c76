//! Jira issue creation client.

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::provider::http::{basic_headers, shared_client, status_to_error};

/// Fields collected for a new issue.
#[derive(Debug, Clone)]
pub struct IssueRequest {
    pub project_key: String,
    pub issue_type: String,
    pub summary: String,
    pub description: String,
    pub assignee_email: String,
}

/// The created issue, as reported by the server.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedIssue {
    pub key: String,
}

/// Client for the Jira REST v3 issue endpoint.
pub struct JiraClient {
    base_url: String,
    api_key: String,
}

impl JiraClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Browse URL for an issue key.
    pub fn browse_url(&self, key: &str) -> String {
        format!("{}/browse/{key}", self.base_url)
    }

    /// Create one issue. Success is exactly HTTP 201; anything else is an
    /// API error carrying the status and response body.
    pub async fn create_issue(&self, request: &IssueRequest) -> Result<CreatedIssue> {
        let url = format!("{}/rest/api/3/issue", self.base_url);
        let body = build_issue_body(request);

        debug!(project = %request.project_key, "Jira create issue");

        let resp = shared_client()
            .post(&url)
            .headers(basic_headers(&self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        if status != 201 {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let issue: CreatedIssue = resp.json().await?;
        Ok(issue)
    }
}

fn build_issue_body(request: &IssueRequest) -> serde_json::Value {
    serde_json::json!({
        "fields": {
            "project": { "key": request.project_key },
            "issuetype": { "name": request.issue_type },
            "summary": request.summary,
            "description": request.description,
            "assignee": { "emailAddress": request.assignee_email },
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> IssueRequest {
        IssueRequest {
            project_key: "PROJ".into(),
            issue_type: "Bug".into(),
            summary: "Printer on fire".into(),
            description: "Please advise".into(),
            assignee_email: "me@example.com".into(),
        }
    }

    #[test]
    fn issue_body_nests_fields_the_way_jira_expects() {
        let body = build_issue_body(&sample_request());
        assert_eq!(body["fields"]["project"]["key"], "PROJ");
        assert_eq!(body["fields"]["issuetype"]["name"], "Bug");
        assert_eq!(body["fields"]["summary"], "Printer on fire");
        assert_eq!(body["fields"]["assignee"]["emailAddress"], "me@example.com");
    }

    #[test]
    fn browse_url_joins_base_and_key() {
        let client = JiraClient::new("https://example.atlassian.net/", "secret");
        assert_eq!(
            client.browse_url("PROJ-123"),
            "https://example.atlassian.net/browse/PROJ-123"
        );
    }
}
