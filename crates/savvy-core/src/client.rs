use crate::config::CmsConfig;
use crate::document::{ContentDocument, CreatedDocument};
use crate::error::{Result, SavvyError};
use crate::query::Query;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Wire envelopes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    result: T,
}

#[derive(Debug, Deserialize)]
struct MutationResponse {
    results: Vec<CreatedDocument>,
}

// ---------------------------------------------------------------------------
// ContentClient
// ---------------------------------------------------------------------------

/// Thin wrapper over the CMS read and write HTTP APIs.
///
/// One request per call: no retry, no backoff, no caching, no
/// de-duplication of identical in-flight fetches. Failures surface as
/// typed errors and are handled (or deliberately collapsed to an empty
/// result) by the caller.
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    endpoint: String,
    dataset: String,
    token: Option<String>,
}

impl ContentClient {
    pub fn new(cms: &CmsConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: cms.endpoint(),
            dataset: cms.dataset.clone(),
            token: None,
        }
    }

    /// Attach a write token. Only the mutation path needs one.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn query_url(&self, query: &Query) -> String {
        format!(
            "{}/data/query/{}?query={}",
            self.endpoint,
            self.dataset,
            urlencoding::encode(&query.to_string())
        )
    }

    fn mutate_url(&self) -> String {
        format!("{}/data/mutate/{}", self.endpoint, self.dataset)
    }

    /// Execute a listing query and return the matching documents.
    pub async fn fetch(&self, query: &Query) -> Result<Vec<ContentDocument>> {
        let url = self.query_url(query);
        tracing::debug!(content_type = %query.content_type(), "fetching documents");
        let response = self.http.get(&url).send().await?;
        let response = check_status(response).await?;
        let body: QueryResponse<Vec<ContentDocument>> = response.json().await?;
        Ok(body.result)
    }

    /// Execute a single-document query (`by_slug`). `None` when nothing
    /// matched.
    pub async fn fetch_first(&self, query: &Query) -> Result<Option<ContentDocument>> {
        let url = self.query_url(query);
        let response = self.http.get(&url).send().await?;
        let response = check_status(response).await?;
        let body: QueryResponse<Option<ContentDocument>> = response.json().await?;
        Ok(body.result)
    }

    /// Create one document through the mutation endpoint. The CMS assigns
    /// the id, so any id on the fixture is stripped before sending.
    pub async fn create(&self, doc: &ContentDocument) -> Result<CreatedDocument> {
        let token = self.token.as_ref().ok_or(SavvyError::MissingToken)?;
        let payload = create_payload(doc)?;

        let response = self
            .http
            .post(self.mutate_url())
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await?;
        let response = check_status(response).await?;
        let body: MutationResponse = response.json().await?;
        body.results.into_iter().next().ok_or_else(|| SavvyError::Api {
            status: 200,
            body: "mutation acknowledged no documents".to_string(),
        })
    }
}

/// Mutation body for a single create. The fixture's id is dropped so the
/// CMS generates one.
fn create_payload(doc: &ContentDocument) -> Result<serde_json::Value> {
    let mut value = serde_json::to_value(doc)?;
    if let Some(map) = value.as_object_mut() {
        map.remove("_id");
    }
    Ok(serde_json::json!({ "mutations": [{ "create": value }] }))
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(SavvyError::Api {
        status: status.as_u16(),
        body: body.chars().take(500).collect(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContentType;

    fn client_for(server: &mockito::ServerGuard) -> ContentClient {
        let cms = CmsConfig {
            endpoint: Some(server.url()),
            ..Default::default()
        };
        ContentClient::new(&cms)
    }

    #[tokio::test]
    async fn fetch_parses_result_array() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/data/query/production")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"result":[
                    {"_id":"a1","_type":"labProduct","title":"Vynl","slug":{"current":"vynl"}},
                    {"_id":"a2","_type":"labProduct","title":"Trekker"}
                ]}"#,
            )
            .create_async()
            .await;

        let docs = client_for(&server)
            .fetch(&Query::new(ContentType::LabProduct))
            .await
            .unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].route_key(), "vynl");
    }

    #[tokio::test]
    async fn fetch_sends_urlencoded_query() {
        let mut server = mockito::Server::new_async().await;
        let query = Query::new(ContentType::Project).home_only(true).limit(4);
        let m = server
            .mock("GET", "/data/query/production")
            .match_query(mockito::Matcher::UrlEncoded(
                "query".into(),
                query.to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"result":[]}"#)
            .create_async()
            .await;

        let docs = client_for(&server).fetch(&query).await.unwrap();
        assert!(docs.is_empty());
        m.assert_async().await;
    }

    #[tokio::test]
    async fn fetch_first_returns_none_for_null() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/data/query/production")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"result":null}"#)
            .create_async()
            .await;

        let doc = client_for(&server)
            .fetch_first(&Query::new(ContentType::Project).by_slug("missing"))
            .await
            .unwrap();
        assert!(doc.is_none());
    }

    #[tokio::test]
    async fn non_success_status_is_an_api_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/data/query/production")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .with_body("upstream exploded")
            .create_async()
            .await;

        let err = client_for(&server)
            .fetch(&Query::new(ContentType::LabProduct))
            .await
            .unwrap_err();
        match err {
            SavvyError::Api { status, body } => {
                assert_eq!(status, 500);
                assert!(body.contains("upstream exploded"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_requires_token() {
        let server = mockito::Server::new_async().await;
        let doc = ContentDocument::new("seed-1", ContentType::LabProduct, "Vynl");
        let err = client_for(&server).create(&doc).await.unwrap_err();
        assert!(matches!(err, SavvyError::MissingToken));
    }

    #[test]
    fn create_payload_strips_id_and_keeps_type() {
        let doc = ContentDocument::new("seed-1", ContentType::LabProduct, "Vynl");
        let payload = create_payload(&doc).unwrap();
        let create = &payload["mutations"][0]["create"];
        assert!(create.get("_id").is_none());
        assert_eq!(create["_type"], "labProduct");
        assert_eq!(create["title"], "Vynl");
        assert_eq!(create["slug"]["current"], "vynl");
    }

    #[tokio::test]
    async fn create_posts_mutation_with_bearer_token() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/data/mutate/production")
            .match_header("authorization", "Bearer tok-123")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"results":[{"id":"gen-99"}]}"#)
            .create_async()
            .await;

        let doc = ContentDocument::new("seed-1", ContentType::LabProduct, "Vynl");
        let created = client_for(&server)
            .with_token("tok-123")
            .create(&doc)
            .await
            .unwrap();
        assert_eq!(created.id, "gen-99");
        m.assert_async().await;
    }
}
