//! CloudPad API Client
//!
//! Async HTTP client for the CloudPad server. The session cookie is kept in
//! the client's cookie store, so calls made after `login` or `register` are
//! authenticated automatically.

use async_trait::async_trait;
use reqwest::{redirect::Policy, Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use uuid::Uuid;

use crate::client::autosave::NoteSaver;
use crate::shared::{
    AppConfig, ConfigError, Credentials, LoginResponse, MeResponse, Note, SaveNoteRequest,
    StatsResponse, SuccessResponse, UserInfo,
};

/// Client-side errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection failure, timeout, or undecodable body
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Request failed ({status}): {message}")]
    Api { status: u16, message: String },

    /// Invalid client configuration
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// HTTP status, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server rejected the request for lack of a session
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// HTTP client for one CloudPad user
#[derive(Debug, Clone)]
pub struct CloudPadClient {
    config: AppConfig,
    client: Client,
}

impl CloudPadClient {
    /// Build a client with its own cookie store
    ///
    /// Redirects are not followed, so `/logout` reports its own status.
    pub fn new(config: AppConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let client = Client::builder()
            .cookie_store(true)
            .redirect(Policy::none())
            .build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.server_url, path)
    }

    pub async fn register(&self, username: &str, password: &str) -> Result<(), ClientError> {
        let response = self
            .client
            .post(self.url("/register"))
            .json(&Credentials {
                username: username.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;
        let _: SuccessResponse = json(response).await?;
        Ok(())
    }

    /// Log in and return the user's admin flag
    pub async fn login(&self, username: &str, password: &str) -> Result<bool, ClientError> {
        let response = self
            .client
            .post(self.url("/login"))
            .json(&Credentials {
                username: username.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;
        let login: LoginResponse = json(response).await?;
        Ok(login.is_admin)
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        let response = self.client.get(self.url("/logout")).send().await?;
        if response.status().is_redirection() || response.status().is_success() {
            Ok(())
        } else {
            Err(api_error(response).await)
        }
    }

    /// Username bound to the current session
    pub async fn me(&self) -> Result<String, ClientError> {
        let response = self.client.get(self.url("/me")).send().await?;
        let me: MeResponse = json(response).await?;
        Ok(me.username)
    }

    /// The user's notes, most recently updated first
    pub async fn list_notes(&self) -> Result<Vec<Note>, ClientError> {
        let response = self.client.get(self.url("/notes")).send().await?;
        json(response).await
    }

    pub async fn create_note(&self) -> Result<Note, ClientError> {
        let response = self.client.post(self.url("/notes/new")).send().await?;
        json(response).await
    }

    pub async fn save_note(&self, note_id: Uuid, content: &str) -> Result<(), ClientError> {
        let response = self
            .client
            .post(self.url("/save"))
            .json(&SaveNoteRequest {
                note_id: Some(note_id.to_string()),
                content: content.to_string(),
            })
            .send()
            .await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(api_error(response).await)
        }
    }

    /// The most recently edited note, creating the first one if none exist
    pub async fn open_latest_note(&self) -> Result<Note, ClientError> {
        match self.list_notes().await?.into_iter().next() {
            Some(note) => Ok(note),
            None => {
                tracing::debug!("No notes yet, creating the first one");
                self.create_note().await
            }
        }
    }

    pub async fn admin_users(&self) -> Result<Vec<UserInfo>, ClientError> {
        let response = self.client.get(self.url("/admin/users")).send().await?;
        json(response).await
    }

    pub async fn admin_stats(&self) -> Result<StatsResponse, ClientError> {
        let response = self.client.get(self.url("/admin/stats")).send().await?;
        json(response).await
    }
}

#[async_trait]
impl NoteSaver for CloudPadClient {
    async fn save(&self, note_id: Uuid, content: &str) -> Result<(), ClientError> {
        self.save_note(note_id, content).await
    }
}

async fn json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(response.json::<T>().await?)
}

/// Turn a failed response into `ClientError::Api`
///
/// Prefers the `error` field of a JSON body and falls back to the raw text.
async fn api_error(response: Response) -> ClientError {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&text)
        .ok()
        .and_then(|body| body.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| {
            if text.is_empty() {
                status.to_string()
            } else {
                text
            }
        });

    ClientError::Api {
        status: status.as_u16(),
        message,
    }
}
