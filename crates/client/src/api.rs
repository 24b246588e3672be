//! Raw REST access to the shift planning API.
//!
//! [`ScheduleApi`] mirrors the server's endpoint table one method per
//! route; [`RestApi`] is the reqwest implementation. The caching layer in
//! [`crate::cache`] wraps any `ScheduleApi`, which is also the seam the
//! cache tests use to substitute a mock.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use shiftplan_core::types::EntityId;
use shiftplan_store::models::{
    BlockedTime, CalendarSnapshot, CreateBlockedTime, CreateShift, CreateUser, Shift, UpdateShift,
    User,
};

use crate::error::ClientError;

/// One method per REST endpoint.
#[async_trait]
pub trait ScheduleApi: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, ClientError>;
    async fn create_user(&self, input: &CreateUser) -> Result<User, ClientError>;

    async fn list_shifts(&self, user_id: EntityId) -> Result<Vec<Shift>, ClientError>;
    async fn create_shift(&self, input: &CreateShift) -> Result<Shift, ClientError>;
    async fn update_shift(&self, id: EntityId, input: &UpdateShift) -> Result<Shift, ClientError>;
    /// Soft-delete; returns the deleted row the server reports back.
    async fn delete_shift(&self, id: EntityId) -> Result<Shift, ClientError>;

    async fn list_blocked_times(&self, user_id: EntityId) -> Result<Vec<BlockedTime>, ClientError>;
    async fn create_blocked_time(
        &self,
        input: &CreateBlockedTime,
    ) -> Result<BlockedTime, ClientError>;
    async fn delete_blocked_time(&self, id: EntityId) -> Result<BlockedTime, ClientError>;

    async fn calendar(&self, user_id: EntityId) -> Result<CalendarSnapshot, ClientError>;
}

// ---------------------------------------------------------------------------
// Wire envelopes
// ---------------------------------------------------------------------------

/// Error payload the server produces for every failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    code: Option<String>,
}

/// DELETE /api/shifts/{id} response; the message field is not used here.
#[derive(Debug, Deserialize)]
struct DeletedShift {
    shift: Shift,
}

/// DELETE /api/blocked/{id} response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeletedBlockedTime {
    blocked_time: BlockedTime,
}

// ---------------------------------------------------------------------------
// Reqwest implementation
// ---------------------------------------------------------------------------

/// [`ScheduleApi`] over HTTP.
///
/// The bearer token rides along as a default header on every request, so
/// call sites never handle authentication.
#[derive(Clone)]
pub struct RestApi {
    client: reqwest::Client,
    base_url: String,
}

impl RestApi {
    /// Build a client for the server at `base_url` (scheme + host + port,
    /// no trailing path) authenticating with `token`.
    pub fn new(base_url: &str, token: &str) -> Result<Self, ClientError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Turn a response into `T`, or into the API error its body describes.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(api_error(status, &text));
        }

        Ok(serde_json::from_str(&text)?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    async fn post<S, T>(&self, path: &str, body: &S) -> Result<T, ClientError>
    where
        S: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    async fn put<S, T>(&self, path: &str, body: &S) -> Result<T, ClientError>
    where
        S: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::decode(response).await
    }
}

/// Parse a failure body into [`ClientError::Api`]. Bodies that are not the
/// usual envelope (proxy errors, panics) keep their raw text as message.
fn api_error(status: StatusCode, text: &str) -> ClientError {
    match serde_json::from_str::<ErrorBody>(text) {
        Ok(body) => ClientError::Api {
            status: status.as_u16(),
            code: body.code.unwrap_or_else(|| "UNKNOWN".to_string()),
            message: body.error,
        },
        Err(_) => ClientError::Api {
            status: status.as_u16(),
            code: "UNKNOWN".to_string(),
            message: text.to_string(),
        },
    }
}

#[async_trait]
impl ScheduleApi for RestApi {
    async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        self.get("/api/users").await
    }

    async fn create_user(&self, input: &CreateUser) -> Result<User, ClientError> {
        self.post("/api/users", input).await
    }

    async fn list_shifts(&self, user_id: EntityId) -> Result<Vec<Shift>, ClientError> {
        self.get(&format!("/api/shifts/{user_id}")).await
    }

    async fn create_shift(&self, input: &CreateShift) -> Result<Shift, ClientError> {
        self.post("/api/shifts", input).await
    }

    async fn update_shift(&self, id: EntityId, input: &UpdateShift) -> Result<Shift, ClientError> {
        self.put(&format!("/api/shifts/{id}"), input).await
    }

    async fn delete_shift(&self, id: EntityId) -> Result<Shift, ClientError> {
        let deleted: DeletedShift = self.delete(&format!("/api/shifts/{id}")).await?;
        Ok(deleted.shift)
    }

    async fn list_blocked_times(&self, user_id: EntityId) -> Result<Vec<BlockedTime>, ClientError> {
        self.get(&format!("/api/blocked/{user_id}")).await
    }

    async fn create_blocked_time(
        &self,
        input: &CreateBlockedTime,
    ) -> Result<BlockedTime, ClientError> {
        self.post("/api/blocked", input).await
    }

    async fn delete_blocked_time(&self, id: EntityId) -> Result<BlockedTime, ClientError> {
        let deleted: DeletedBlockedTime = self.delete(&format!("/api/blocked/{id}")).await?;
        Ok(deleted.blocked_time)
    }

    async fn calendar(&self, user_id: EntityId) -> Result<CalendarSnapshot, ClientError> {
        self.get(&format!("/api/calendar/{user_id}")).await
    }
}
