//! HTTP client for the portfolio admin API
//!
//! One method per endpoint. Every call is a single request: nothing is
//! retried and nothing is cancelled once sent.

use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::state::data::{
    decode_project_list, Credentials, ImageFile, NewProject, Project, ProjectDetails, ProjectId,
    ProjectRecord, ProjectUpdate, SessionToken,
};

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: SessionToken,
}

/// Body of the add/update responses; only the record is used
#[derive(Debug, Deserialize)]
struct ProjectEnvelope {
    project: ProjectRecord,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    attach_token: bool,
    token: Option<SessionToken>,
}

impl ApiClient {
    pub fn new(config: &Config) -> ApiResult<Self> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            attach_token: config.attach_token,
            token: None,
        })
    }

    /// A copy of this client carrying the current session token
    ///
    /// The token is only put on the wire when `attach_token` is configured.
    pub fn with_token(&self, token: Option<SessionToken>) -> Self {
        Self {
            token,
            ..self.clone()
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/admin/{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match (&self.token, self.attach_token) {
            (Some(token), true) => request.bearer_auth(token.as_str()),
            _ => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = self.authorize(request).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status { status, body })
    }

    async fn json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// `POST /api/admin/login`
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<SessionToken> {
        debug!("Logging in as {}", credentials.username);
        let request = self.client.post(self.url("login")).json(credentials);
        let response = self.send(request).await?;
        let body: LoginResponse = Self::json(response).await?;
        Ok(body.token)
    }

    /// `GET /api/admin/get`
    pub async fn list_projects(&self) -> ApiResult<Vec<Project>> {
        let response = self.send(self.client.get(self.url("get"))).await?;
        let records: Vec<ProjectRecord> = Self::json(response).await?;
        Ok(decode_project_list(records))
    }

    /// `POST /api/admin/add`
    ///
    /// Returns the created project when the server echoes it back.
    pub async fn create_project(&self, project: NewProject) -> ApiResult<Option<Project>> {
        let form = Form::new()
            .part("image", image_part(project.image)?)
            .text("description", project.description)
            .text("projectType", project.project_type.as_wire());

        let response = self
            .send(self.client.post(self.url("add")).multipart(form))
            .await?;

        let bytes = response.bytes().await?;
        let created = serde_json::from_slice::<ProjectEnvelope>(&bytes)
            .ok()
            .and_then(|envelope| envelope.project.into_project().ok());
        Ok(created)
    }

    /// `PUT /api/admin/update/:id`
    ///
    /// The image part is only sent when the update carries a replacement.
    /// The response may leave the image out.
    pub async fn update_project(
        &self,
        id: &ProjectId,
        update: ProjectUpdate,
    ) -> ApiResult<ProjectDetails> {
        let mut form = Form::new()
            .text("description", update.description)
            .text("projectType", update.project_type.as_wire());
        if let Some(image) = update.image {
            form = form.part("image", image_part(image)?);
        }

        let request = self
            .client
            .put(self.url(&format!("update/{}", id)))
            .multipart(form);
        let response = self.send(request).await?;
        let envelope: ProjectEnvelope = Self::json(response).await?;
        envelope.project.into_details().map_err(ApiError::InvalidRecord)
    }

    /// `DELETE /api/admin/delete/:id`
    pub async fn delete_project(&self, id: &ProjectId) -> ApiResult<()> {
        let request = self.client.delete(self.url(&format!("delete/{}", id)));
        self.send(request).await?;
        Ok(())
    }
}

fn image_part(image: ImageFile) -> ApiResult<Part> {
    let part = Part::bytes(image.image.bytes().to_vec())
        .file_name(image.file_name)
        .mime_str(image.mime)?;
    Ok(part)
}
