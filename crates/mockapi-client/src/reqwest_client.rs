//! Reqwest-based blog client
//!
//! Direct implementation of the `BlogClient` trait using reqwest.
//! Every call is a single request with no retry.

use crate::client::BlogClient;
use crate::error::ApiError;
use crate::types::{NewTask, Task, TaskId, TaskPatch};
use crate::DEFAULT_TIMEOUT_SECS;
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Direct client for a MockAPI resource collection
///
/// `base_url` is the collection URL itself, e.g.
/// `https://<project>.mockapi.io/api/v1/blogs`.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    http_client: Client,
    base_url: Url,
}

impl ReqwestClient {
    /// Create a client with the default timeout
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with a custom request timeout
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::BaseUrl(base_url.to_string()));
        }

        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// The collection URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `{base}/{id}`, tolerating a trailing slash on the base
    fn item_url(&self, id: &TaskId) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ApiError::BaseUrl(self.base_url.to_string()))?;
            segments.pop_if_empty().push(id.as_str());
        }
        Ok(url)
    }
}

#[async_trait]
impl BlogClient for ReqwestClient {
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        debug!("GET {}", self.base_url);

        let tasks: Vec<Task> = send_json(self.http_client.get(self.base_url.clone())).await?;

        debug!("Fetched {} tasks", tasks.len());
        Ok(tasks)
    }

    async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError> {
        debug!("POST {} ({})", self.base_url, task.blog_name);

        let created: Task =
            send_json(self.http_client.post(self.base_url.clone()).json(task)).await?;

        debug!("Created task {}", created.id);
        Ok(created)
    }

    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> Result<Task, ApiError> {
        let url = self.item_url(id)?;
        debug!("PUT {}", url);

        send_json(self.http_client.put(url).json(patch)).await
    }

    async fn delete_task(&self, id: &TaskId) -> Result<(), ApiError> {
        let url = self.item_url(id)?;
        debug!("DELETE {}", url);

        let response = self.http_client.delete(url).send().await?;
        success_body(response).await?;
        Ok(())
    }
}

/// Send a request and decode a successful JSON body
async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    let response = request.send().await?;
    let body = success_body(response).await?;
    Ok(serde_json::from_str(&body)?)
}

/// Read the body, turning any non-2xx status into [`ApiError::Status`]
async fn success_body(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        });
    }

    Ok(body)
}
