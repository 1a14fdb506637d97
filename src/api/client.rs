use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

use super::error::ApiError;
use super::types::{ChatReply, ChatRequest, FeedbackRequest, Reward, ServerMessage};
use crate::session::SessionId;

/// The remote side of a conversation.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// `POST /chat/`
    async fn chat(&self, session: &SessionId, user_input: &str) -> Result<ChatReply, ApiError>;

    /// `POST /feedback/`. The response body is ignored.
    async fn feedback(&self, session: &SessionId, reward: Reward) -> Result<(), ApiError>;

    /// `DELETE /clear_chat/{session_id}`; returns the server's message.
    async fn clear_history(&self, session: &SessionId) -> Result<String, ApiError>;

    /// `GET /`; returns the server's message.
    async fn health(&self) -> Result<String, ApiError>;
}

/// [`ChatBackend`] over HTTP with JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base: Url,
}

impl HttpBackend {
    pub fn new(endpoint: &str) -> Result<Self, ApiError> {
        Self::with_client(endpoint, Client::new())
    }

    /// Uses a preconfigured `reqwest` client (proxies, TLS roots, headers).
    pub fn with_client(endpoint: &str, client: Client) -> Result<Self, ApiError> {
        let mut base = Url::parse(endpoint)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self { client, base })
    }

    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base.join(path)?)
    }

    fn clear_url(&self, session: &SessionId) -> Result<Url, ApiError> {
        let mut url = self.url("clear_chat/")?;
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .push(session.as_str());
        Ok(url)
    }

    /// Sends the request and returns the body of a 2xx response.
    async fn send(&self, request: RequestBuilder, url: &Url) -> Result<String, ApiError> {
        let transport = |source| ApiError::Transport {
            url: url.to_string(),
            source,
        };

        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        let body = response.text().await.map_err(transport)?;

        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status,
                body,
            });
        }

        Ok(body)
    }
}

fn decode<T: DeserializeOwned>(url: &Url, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn chat(&self, session: &SessionId, user_input: &str) -> Result<ChatReply, ApiError> {
        let url = self.url("chat/")?;
        let body = ChatRequest {
            user_input,
            session_id: session.as_str(),
        };

        tracing::debug!(%url, %session, "sending chat message");
        let text = self.send(self.client.post(url.clone()).json(&body), &url).await?;
        decode(&url, &text)
    }

    async fn feedback(&self, session: &SessionId, reward: Reward) -> Result<(), ApiError> {
        let url = self.url("feedback/")?;
        let body = FeedbackRequest {
            session_id: session.as_str(),
            reward,
        };

        tracing::debug!(%url, %session, %reward, "sending feedback");
        self.send(self.client.post(url.clone()).json(&body), &url)
            .await
            .map(|_| ())
    }

    async fn clear_history(&self, session: &SessionId) -> Result<String, ApiError> {
        let url = self.clear_url(session)?;

        tracing::debug!(%url, "clearing server-side history");
        let text = self.send(self.client.delete(url.clone()), &url).await?;
        decode::<ServerMessage>(&url, &text).map(|m| m.message)
    }

    async fn health(&self) -> Result<String, ApiError> {
        let url = self.base.clone();

        let text = self.send(self.client.get(url.clone()), &url).await?;
        decode::<ServerMessage>(&url, &text).map(|m| m.message)
    }
}
