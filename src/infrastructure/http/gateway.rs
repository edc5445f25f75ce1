//! Reqwest implementation of the gateway traits.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::json;
use url::Url;

use crate::config::Config;
use crate::domain::entities::{LinkSummary, LinkUpdate, PageMeta};
use crate::domain::filters::FilterSet;
use crate::domain::gateways::{AnalyticsGateway, AuthGateway, LinkGateway, ProfileGateway};
use crate::domain::session::{Credentials, RegisterInput, Session};
use crate::domain::snapshot::{AnalyticsSnapshot, LinkStats};
use crate::error::{AppError, map_reqwest_error};
use crate::infrastructure::http::dto::{
    Ack, AnalyticsPayload, ApiMessage, AuthResponse, ChangePasswordRequest, Envelope,
    LinkStatsPayload, LoginRequest, RegisterRequest, ShortenRequest, UpdateLinkRequest,
    UrlListPayload, UrlStatPayload,
};

/// HTTP gateway to the shortener API.
///
/// Holds an explicit [`Session`] handed in at construction; nothing here
/// reads ambient storage. A gateway without a session can only serve the
/// login/register endpoints.
#[derive(Debug)]
pub struct HttpApiGateway {
    http: reqwest::Client,
    base_url: Url,
    session: Option<Session>,
}

impl HttpApiGateway {
    /// Builds a gateway against the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the base URL does not parse.
    pub fn new(config: &Config, session: Option<Session>) -> Result<Self, AppError> {
        let base_url = Url::parse(&config.api_url).map_err(|e| {
            AppError::bad_request(
                "Invalid API base URL",
                json!({ "url": config.api_url, "reason": e.to_string() }),
            )
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_seconds))
            .build()
            .map_err(map_reqwest_error)?;

        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        self.base_url.join(path).map_err(|e| {
            AppError::internal(
                "Failed to build request URL",
                json!({ "path": path, "reason": e.to_string() }),
            )
        })
    }

    fn session(&self) -> Result<&Session, AppError> {
        self.session.as_ref().ok_or_else(|| {
            AppError::unauthenticated(
                "Not logged in. Run `linkdash login` first.",
                json!({ "reason": "no session token" }),
            )
        })
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, AppError> {
        request.send().await.map_err(map_reqwest_error)
    }

    /// Maps non-2xx responses onto the taxonomy, surfacing the backend's
    /// `message` when the error body carries one.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AppError> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(AppError::unauthenticated(
                "Session rejected by the backend. Run `linkdash login` again.",
                json!({ "status": 401 }),
            ));
        }

        if !status.is_success() {
            let message = response
                .json::<ApiMessage>()
                .await
                .ok()
                .and_then(|m| m.message)
                .unwrap_or_else(|| format!("Request failed with status {status}"));

            return Err(AppError::fetch_failed(
                message,
                json!({ "status": status.as_u16() }),
            ));
        }

        Ok(response)
    }

    async fn read_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        let response = Self::check_status(response).await?;
        let envelope: Envelope<T> = response.json().await.map_err(map_reqwest_error)?;
        envelope.into_data()
    }

    /// Reads a write acknowledgement: any 2xx body that does not carry
    /// `status: false` counts as success.
    async fn read_ack(response: reqwest::Response) -> Result<(), AppError> {
        let response = Self::check_status(response).await?;
        let ack: Ack = response.json().await.unwrap_or_default();

        if ack.status == Some(false) {
            return Err(AppError::invalid_shape(
                ack.message
                    .unwrap_or_else(|| "Backend reported failure".to_string()),
                json!({ "status": false }),
            ));
        }
        Ok(())
    }

    /// Reads an auth response. The token sits at the top level, outside the
    /// envelope, and a rejection carries the backend's `message` directly
    /// (this is the login screen; the "log in again" hint would be circular).
    async fn read_session(response: reqwest::Response) -> Result<Session, AppError> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiMessage>()
                .await
                .ok()
                .and_then(|m| m.message)
                .unwrap_or_else(|| format!("Authentication failed with status {status}"));

            return Err(AppError::fetch_failed(
                message,
                json!({ "status": status.as_u16() }),
            ));
        }

        let body: AuthResponse = response.json().await.map_err(map_reqwest_error)?;

        if body.token.is_empty() {
            return Err(AppError::invalid_shape(
                "Auth response is missing a token",
                json!({}),
            ));
        }
        Ok(Session::new(body.token))
    }
}

#[async_trait]
impl AnalyticsGateway for HttpApiGateway {
    async fn fetch_overview(&self, filters: &FilterSet) -> Result<AnalyticsSnapshot, AppError> {
        let session = self.session()?;

        let mut url = self.endpoint("/api/analytics")?;
        let pairs = filters.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())));
        }

        tracing::debug!(url = %url, "loading analytics overview");

        let response = self
            .send(self.http.get(url).bearer_auth(session.token()))
            .await?;
        let payload: AnalyticsPayload = Self::read_envelope(response).await?;
        Ok(payload.into_snapshot())
    }

    async fn fetch_link_stats(&self, short_code: &str) -> Result<LinkStats, AppError> {
        let session = self.session()?;
        let url = self.endpoint(&format!("/api/stats/{short_code}"))?;

        let response = self
            .send(self.http.get(url).bearer_auth(session.token()))
            .await?;
        let payload: LinkStatsPayload = Self::read_envelope(response).await?;
        Ok(payload.into())
    }
}

#[async_trait]
impl LinkGateway for HttpApiGateway {
    async fn list_links(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<(Vec<LinkSummary>, PageMeta), AppError> {
        let session = self.session()?;

        let mut url = self.endpoint("/api/urls")?;
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("limit", &per_page.to_string());

        let response = self
            .send(self.http.get(url).bearer_auth(session.token()))
            .await?;
        let payload: UrlListPayload = Self::read_envelope(response).await?;

        let links = payload.urls.into_iter().map(LinkSummary::from).collect();
        Ok((links, payload.pagination.into()))
    }

    async fn create_link(&self, original_url: &str) -> Result<LinkSummary, AppError> {
        let session = self.session()?;
        let url = self.endpoint("/api/shorten")?;

        let response = self
            .send(
                self.http
                    .post(url)
                    .bearer_auth(session.token())
                    .json(&ShortenRequest { original_url }),
            )
            .await?;
        let payload: UrlStatPayload =
            Self::read_envelope(response).await?;
        Ok(payload.into())
    }

    async fn update_link(&self, id: i64, update: &LinkUpdate) -> Result<LinkSummary, AppError> {
        let session = self.session()?;
        let url = self.endpoint(&format!("/api/urls/{id}"))?;

        let response = self
            .send(
                self.http
                    .put(url)
                    .bearer_auth(session.token())
                    .json(&UpdateLinkRequest {
                        original_url: &update.original_url,
                        short_code: update.short_code.as_deref(),
                    }),
            )
            .await?;
        let payload: UrlStatPayload =
            Self::read_envelope(response).await?;
        Ok(payload.into())
    }

    async fn delete_link(&self, id: i64) -> Result<(), AppError> {
        let session = self.session()?;
        let url = self.endpoint(&format!("/api/urls/{id}"))?;

        let response = self
            .send(self.http.delete(url).bearer_auth(session.token()))
            .await?;
        Self::read_ack(response).await
    }
}

#[async_trait]
impl AuthGateway for HttpApiGateway {
    async fn login(&self, credentials: &Credentials) -> Result<Session, AppError> {
        let url = self.endpoint("/api/login")?;

        let response = self
            .send(self.http.post(url).json(&LoginRequest {
                email: &credentials.email,
                password: &credentials.password,
            }))
            .await?;
        Self::read_session(response).await
    }

    async fn register(&self, input: &RegisterInput) -> Result<Session, AppError> {
        let url = self.endpoint("/api/register")?;

        let response = self
            .send(self.http.post(url).json(&RegisterRequest {
                name: &input.name,
                username: &input.username,
                email: &input.email,
                password: &input.password,
            }))
            .await?;
        Self::read_session(response).await
    }
}

#[async_trait]
impl ProfileGateway for HttpApiGateway {
    async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let session = self.session()?;
        let url = self.endpoint("/api/change-password")?;

        let response = self
            .send(
                self.http
                    .post(url)
                    .bearer_auth(session.token())
                    .json(&ChangePasswordRequest {
                        current_password,
                        new_password,
                    }),
            )
            .await?;
        Self::read_ack(response).await
    }

    async fn delete_account(&self) -> Result<(), AppError> {
        let session = self.session()?;
        let url = self.endpoint("/api/delete-account")?;

        let response = self
            .send(self.http.delete(url).bearer_auth(session.token()))
            .await?;
        Self::read_ack(response).await
    }
}
