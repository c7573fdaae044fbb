use crate::api::RoundApi;
use crate::error::ApiError;
use crate::model::{EntityId, Round, RoundStatus};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Serialize)]
struct StrokesBody {
    strokes: u32,
}

#[derive(Deserialize)]
struct StrokesReply {
    strokes: u32,
}

#[derive(Serialize)]
struct StatusBody {
    status: RoundStatus,
}

#[derive(Deserialize)]
struct StatusReply {
    status: RoundStatus,
}

#[derive(Deserialize)]
struct ErrorReply {
    message: Option<String>,
}

/// `RoundApi` over the scoring server's JSON REST endpoints.
#[derive(Clone, Debug)]
pub struct HttpRoundApi {
    client: Client,
    base_url: String,
}

impl HttpRoundApi {
    /// # Errors
    ///
    /// Returns `ApiError::Network` if the token is not a valid header value or
    /// the underlying client cannot be built.
    pub fn new(
        base_url: &str,
        bearer_token: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = bearer_token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| ApiError::Network(format!("invalid bearer token: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn round_url(&self, round_id: EntityId) -> String {
        format!("{}/rounds/{round_id}", self.base_url)
    }
}

/// Maps non-success statuses onto `ApiError`, pulling the server's
/// `message` field out of the body when it has one.
async fn check_status(resp: Response, what: &str) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound(what.to_string()));
    }
    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorReply>(&body)
        .ok()
        .and_then(|r| r.message)
        .unwrap_or(body);
    Err(ApiError::Status {
        code: status.as_u16(),
        message,
    })
}

#[async_trait::async_trait]
impl RoundApi for HttpRoundApi {
    async fn get_round(&self, round_id: EntityId) -> Result<Round, ApiError> {
        let url = self.round_url(round_id);
        debug!(%url, "GET round");
        let resp = self.client.get(&url).send().await?;
        let resp = check_status(resp, &format!("round {round_id}")).await?;
        let text = resp.text().await?;
        let round: Option<Round> = serde_json::from_str(&text)?;
        round.ok_or_else(|| ApiError::NotFound(format!("round {round_id}")))
    }

    async fn update_score(
        &self,
        round_id: EntityId,
        player_id: EntityId,
        hole_id: EntityId,
        strokes: u32,
    ) -> Result<u32, ApiError> {
        let url = format!(
            "{}/players/{player_id}/holes/{hole_id}/score",
            self.round_url(round_id)
        );
        debug!(%url, strokes, "PATCH score");
        let resp = self
            .client
            .patch(&url)
            .json(&StrokesBody { strokes })
            .send()
            .await?;
        let resp = check_status(
            resp,
            &format!("score for player {player_id} on hole {hole_id}"),
        )
        .await?;
        let reply: StrokesReply = serde_json::from_str(&resp.text().await?)?;
        Ok(reply.strokes)
    }

    async fn update_round_status(
        &self,
        round_id: EntityId,
        status: RoundStatus,
    ) -> Result<RoundStatus, ApiError> {
        let url = self.round_url(round_id);
        debug!(%url, ?status, "PUT round status");
        let resp = self
            .client
            .put(&url)
            .json(&StatusBody { status })
            .send()
            .await?;
        let resp = check_status(resp, &format!("round {round_id}")).await?;
        let reply: StatusReply = serde_json::from_str(&resp.text().await?)?;
        Ok(reply.status)
    }
}
