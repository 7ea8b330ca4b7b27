//! Backend REST Surface
//!
//! Frontend bindings for the task endpoints. Every request carries a JSON
//! content type; any non-2xx status is a uniform failure.

use gloo_net::http::{Request, Response};
use serde::Serialize;
use thiserror::Error;

use crate::models::Task;

/// Base path the backend is mounted under.
pub const DEFAULT_API_BASE: &str = "/api";

/// Failure of a single backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Fetch(#[from] gloo_net::Error),
    #[error("server responded with status {0}")]
    Status(u16),
}

#[derive(Serialize)]
struct NewTask<'a> {
    title: &'a str,
}

/// The REST surface the client drives. Implemented over HTTP in the
/// browser and by recording doubles in tests.
pub trait TaskBackend {
    async fn list(&self) -> Result<Vec<Task>, ApiError>;
    async fn create(&self, title: &str) -> Result<(), ApiError>;
    async fn toggle(&self, id: u32) -> Result<(), ApiError>;
    async fn delete(&self, id: u32) -> Result<(), ApiError>;
}

/// HTTP implementation bound to a fixed base path.
#[derive(Clone)]
pub struct HttpBackend {
    base: String,
}

impl HttpBackend {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

/// The create/toggle/delete responses may carry the entity or a bare ack;
/// the client only ever renders reloaded state, so the body is dropped.
fn ack(response: Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status(response.status()))
    }
}

impl TaskBackend for HttpBackend {
    async fn list(&self) -> Result<Vec<Task>, ApiError> {
        let response = Request::get(&self.url("/tasks"))
            .header("Content-Type", "application/json")
            .send()
            .await?;
        if response.ok() {
            Ok(response.json().await?)
        } else {
            Err(ApiError::Status(response.status()))
        }
    }

    async fn create(&self, title: &str) -> Result<(), ApiError> {
        let response = Request::post(&self.url("/tasks"))
            .json(&NewTask { title })?
            .send()
            .await?;
        ack(response)
    }

    async fn toggle(&self, id: u32) -> Result<(), ApiError> {
        let response = Request::patch(&self.url(&format!("/tasks/{id}/toggle")))
            .header("Content-Type", "application/json")
            .send()
            .await?;
        ack(response)
    }

    async fn delete(&self, id: u32) -> Result<(), ApiError> {
        let response = Request::delete(&self.url(&format!("/tasks/{id}")))
            .header("Content-Type", "application/json")
            .send()
            .await?;
        ack(response)
    }
}
