//! Requests against the trainer collection and what happens when they finish.
//!
//! Every operation is fire-and-forget. The [`HttpBackend`] calls back once per
//! request; the callback classifies the status and either refreshes the list,
//! alerts the user, or both alerts and writes a diagnostic. Nothing is retried
//! and concurrent requests are neither de-duplicated nor cancelled.

use std::sync::Arc;

use trainer_common::{status, Trainer, UpdateRequest};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// Alert text for a `400 Bad Request` answer.
pub const BAD_REQUEST_ALERT: &str = "There was an error: 400 Bad Request";

/// Called exactly once with the finished response.
pub type ResponseCallback = Box<dyn FnOnce(HttpResponse) + Send + 'static>;

/// Receives each successfully decoded list, in response order.
pub type ListSink = Arc<dyn Fn(Vec<Trainer>) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// One outgoing request. A present body is always JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status, or 0 when the request never completed.
    pub status: u16,
    pub body: String,
}

/// Something that can put a request on the wire.
pub trait HttpBackend: Send + Sync + 'static {
    fn send(&self, request: ApiRequest, on_done: ResponseCallback);
}

/// User-facing failure reporting.
pub trait Notifier: Send + Sync + 'static {
    /// Show a blocking message to the user.
    fn alert(&self, message: &str);
    /// Record the status of an unexpected response for whoever has the console open.
    fn diagnostic(&self, status: u16);
}

/// The four things the client can ask of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn method(self) -> Method {
        match self {
            Self::List => Method::Get,
            Self::Create => Method::Post,
            Self::Update => Method::Put,
            Self::Delete => Method::Delete,
        }
    }

    /// The one status that counts as success for this operation.
    pub fn success_status(self) -> u16 {
        match self {
            Self::List | Self::Update => status::OK,
            Self::Create => status::CREATED,
            Self::Delete => status::NO_CONTENT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    BadRequest,
    Unexpected(u16),
}

impl Outcome {
    pub fn classify(status: u16, expected: u16) -> Self {
        if status == expected {
            Self::Success
        } else if status == status::BAD_REQUEST {
            Self::BadRequest
        } else {
            Self::Unexpected(status)
        }
    }
}

/// Alert text for any status that is neither the expected one nor 400.
pub fn unexpected_alert(expected: u16) -> String {
    format!("something else other than {} was returned", status::reason(expected))
}

/// Client for the trainer collection.
///
/// Cloning is cheap; clones share the backend, notifier and list sink.
#[derive(Clone)]
pub struct TrainerApi {
    base_path: Arc<str>,
    backend: Arc<dyn HttpBackend>,
    notifier: Arc<dyn Notifier>,
    on_list: ListSink,
}

impl TrainerApi {
    pub fn new(
        config: &ClientConfig,
        backend: Arc<dyn HttpBackend>,
        notifier: Arc<dyn Notifier>,
        on_list: ListSink,
    ) -> Self {
        Self {
            base_path: Arc::from(config.base_path.as_str()),
            backend,
            notifier,
            on_list,
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    /// Fetch the whole collection and hand it to the list sink.
    pub fn list(&self) {
        self.send(Operation::List, None);
    }

    pub fn create(&self, trainer: &Trainer) -> Result<()> {
        let body = serde_json::to_string(trainer).map_err(ClientError::Encode)?;
        self.send(Operation::Create, Some(body));
        Ok(())
    }

    pub fn update(&self, request: &UpdateRequest) -> Result<()> {
        let body = serde_json::to_string(request).map_err(ClientError::Encode)?;
        self.send(Operation::Update, Some(body));
        Ok(())
    }

    /// Delete the record equal to `trainer`. The server matches on all fields.
    pub fn delete(&self, trainer: &Trainer) -> Result<()> {
        let body = serde_json::to_string(trainer).map_err(ClientError::Encode)?;
        self.send(Operation::Delete, Some(body));
        Ok(())
    }

    fn send(&self, operation: Operation, body: Option<String>) {
        let request = ApiRequest {
            method: operation.method(),
            path: self.base_path.to_string(),
            body,
        };
        log::debug!("[TrainerApi] {} {}", request.method.as_str(), request.path);

        let api = self.clone();
        self.backend
            .send(request, Box::new(move |response: HttpResponse| api.settle(operation, response)));
    }

    fn settle(&self, operation: Operation, response: HttpResponse) {
        let expected = operation.success_status();
        log::debug!(
            "[TrainerApi] {:?} finished with status {}",
            operation,
            response.status
        );

        match Outcome::classify(response.status, expected) {
            Outcome::Success => match operation {
                Operation::List => self.publish(&response.body),
                _ => self.list(),
            },
            Outcome::BadRequest => self.notifier.alert(BAD_REQUEST_ALERT),
            Outcome::Unexpected(status) => {
                self.notifier.alert(&unexpected_alert(expected));
                self.notifier.diagnostic(status);
            }
        }
    }

    /// An empty collection may arrive as `null` rather than `[]`.
    fn publish(&self, body: &str) {
        match serde_json::from_str::<Option<Vec<Trainer>>>(body) {
            Ok(trainers) => {
                let trainers = trainers.unwrap_or_default();
                log::debug!("[TrainerApi] listed {} trainers", trainers.len());
                (self.on_list)(trainers);
            }
            Err(err) => {
                let err = ClientError::Decode(err);
                log::error!("[TrainerApi] {err}");
                self.notifier.alert(&err.to_string());
            }
        }
    }
}
