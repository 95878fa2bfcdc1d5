use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::models::{Envelope, NewTask, NewUser, ResourceId};
use crate::error::SeedError;

pub const USERS_PATH: &str = "/api/users";
pub const TASKS_PATH: &str = "/api/tasks";

/// Restricts `GET /api/users` to the `_id` field.
const ID_ONLY_SELECT: &str = r#"{"_id":1}"#;

const JSON: &str = "application/json";

/// Operations the seeding loop needs from the remote API.
#[allow(async_fn_in_trait)]
pub trait SeedApi {
    /// Ids of every user currently stored by the service.
    async fn list_user_ids(&self) -> Result<Vec<String>, SeedError>;

    /// Create a user and return the id the service assigned to it.
    async fn create_user(&self, user: &NewUser) -> Result<String, SeedError>;

    async fn create_task(&self, task: &NewTask) -> Result<(), SeedError>;
}

/// HTTP client for the task-tracker API.
///
/// Holds a single pooled connection to one host and issues requests one at a
/// time. Dropping the client (or calling [`ApiClient::close`]) releases the
/// connection.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Client for `https://{host}` on the default port.
    pub fn connect(host: &str) -> Result<Self, SeedError> {
        let base_url = Url::parse(&format!("https://{host}"))
            .map_err(|e| SeedError::InvalidUrl(format!("{host}: {e}")))?;
        Self::with_base_url(base_url)
    }

    /// Client for an arbitrary base url, scheme included.
    pub fn with_base_url(base_url: Url) -> Result<Self, SeedError> {
        let http = reqwest::Client::builder()
            .pool_max_idle_per_host(1)
            .build()?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Ids of every user currently stored by the service.
    pub async fn list_user_ids(&self) -> Result<Vec<String>, SeedError> {
        let mut url = self.endpoint(USERS_PATH)?;
        url.query_pairs_mut().append_pair("select", ID_ONLY_SELECT);

        debug!("GET {}", url);
        let response = self.http.get(url).header(ACCEPT, JSON).send().await?;
        let users: Vec<ResourceId> = read_envelope(USERS_PATH, response).await?;

        Ok(users.into_iter().map(|user| user.id).collect())
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<String, SeedError> {
        let response = self.post(USERS_PATH, user).await?;
        let created: ResourceId = read_envelope(USERS_PATH, response).await?;
        Ok(created.id)
    }

    pub async fn create_task(&self, task: &NewTask) -> Result<(), SeedError> {
        let response = self.post(TASKS_PATH, task).await?;
        let status = response.status();
        let body = response.text().await?;
        check_status(TASKS_PATH, status, &body)
    }

    /// Release the connection.
    pub fn close(self) {
        debug!("Closing connection to {}", self.base_url);
    }

    async fn post<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<Response, SeedError> {
        let url = self.endpoint(path)?;
        debug!("POST {}", url);

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
            .json(body)
            .send()
            .await?;
        Ok(response)
    }

    fn endpoint(&self, path: &str) -> Result<Url, SeedError> {
        self.base_url
            .join(path)
            .map_err(|e| SeedError::InvalidUrl(format!("{}{}: {}", self.base_url, path, e)))
    }
}

impl SeedApi for ApiClient {
    async fn list_user_ids(&self) -> Result<Vec<String>, SeedError> {
        ApiClient::list_user_ids(self).await
    }

    async fn create_user(&self, user: &NewUser) -> Result<String, SeedError> {
        ApiClient::create_user(self, user).await
    }

    async fn create_task(&self, task: &NewTask) -> Result<(), SeedError> {
        ApiClient::create_task(self, task).await
    }
}

async fn read_envelope<T: DeserializeOwned>(
    endpoint: &str,
    response: Response,
) -> Result<T, SeedError> {
    let status = response.status();
    let body = response.text().await?;
    check_status(endpoint, status, &body)?;

    let envelope: Envelope<T> =
        serde_json::from_str(&body).map_err(|e| SeedError::MalformedResponse {
            endpoint: endpoint.to_string(),
            reason: format!("{e}, body: {body}"),
        })?;
    Ok(envelope.data)
}

fn check_status(endpoint: &str, status: reqwest::StatusCode, body: &str) -> Result<(), SeedError> {
    if status.is_success() {
        return Ok(());
    }

    // Error responses still use the envelope; surface its message if there is one
    let message = serde_json::from_str::<Envelope<serde_json::Value>>(body)
        .ok()
        .and_then(|envelope| envelope.message)
        .unwrap_or_else(|| body.trim().to_string());

    Err(SeedError::Status {
        endpoint: endpoint.to_string(),
        status: status.as_u16(),
        message,
    })
}
