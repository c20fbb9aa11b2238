// ============================================================================
// vlib-core/src/service/rest.rs
// ============================================================================
//
// REST IMPLEMENTATION: LibraryService over the content library REST API
//
// Talks to the `/rest/com/vmware/content` endpoints with a blocking reqwest
// client. Every response body is wrapped in a `{"value": ...}` envelope;
// error bodies carry a list of messages whose `default_message` is surfaced
// in `CoreError::Api`.
//
// Each request runs on a worker thread while the caller polls the
// OperationContext, so a cancel or an expired deadline ends the wait without
// waiting for the server. A request is bounded by the smaller of the
// configured timeout and the time left on the context.
//
// KEY COMPONENTS:
// - RestLibraryService: authenticated client bound to one server
// - Session bootstrap: reuse a session id or log in with basic auth
//
// AI-ASSISTANT-INFO: REST-backed content library service

// ---- Internal crate imports ----
use super::LibraryService;
use crate::config::ClientConfig;
use crate::context::OperationContext;
use crate::error::{CoreError, CoreResult};
use crate::model::{Item, ItemCopySpec, ItemFile, Library};

// ---- External crate imports ----
use log::{debug, trace};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// ---- Standard library imports ----
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

/// Header carrying the session id on every authenticated request.
pub const SESSION_HEADER: &str = "vmware-api-session-id";

const SESSION_PATH: &str = "/rest/com/vmware/cis/session";
const LIBRARY_PATH: &str = "/rest/com/vmware/content/library";
const ITEM_PATH: &str = "/rest/com/vmware/content/library/item";
const FILE_PATH: &str = "/rest/com/vmware/content/library/item/file";

/// How often a waiting caller re-checks its context.
const CONTEXT_POLL_INTERVAL: Duration = Duration::from_millis(25);

#[derive(Deserialize)]
struct Envelope<T> {
    value: T,
}

#[derive(Serialize)]
struct CopyRequest<'a> {
    destination_create_spec: &'a ItemCopySpec,
}

/// LibraryService backed by the content library REST API.
#[derive(Debug, Clone)]
pub struct RestLibraryService {
    client: Client,
    base_url: Url,
    session_id: String,
    timeout: Duration,
}

impl RestLibraryService {
    /// Builds the HTTP client and establishes a session.
    ///
    /// A configured `session_id` is used as-is; otherwise the username and
    /// password are exchanged for a new session.
    pub fn connect(config: &ClientConfig, ctx: &OperationContext) -> CoreResult<Self> {
        config.validate()?;
        let base_url = Url::parse(&config.url)
            .map_err(|e| CoreError::Config(format!("Invalid server URL '{}': {}", config.url, e)))?;

        let client = Client::builder()
            .danger_accept_invalid_certs(config.insecure)
            .timeout(config.timeout)
            .build()?;

        let session_id = match (&config.session_id, &config.username, &config.password) {
            (Some(session_id), _, _) => session_id.clone(),
            (None, Some(username), Some(password)) => {
                login(&client, &base_url, ctx, config.timeout, username, password)?
            }
            _ => {
                return Err(CoreError::Session(
                    "no credentials: supply a session id or a username and password".to_string(),
                ));
            }
        };

        Ok(Self {
            client,
            base_url,
            session_id,
            timeout: config.timeout,
        })
    }

    /// Id of the session used by this service.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    fn endpoint(&self, path: &str) -> CoreResult<Url> {
        endpoint(&self.base_url, path)
    }

    fn send<T: DeserializeOwned>(
        &self,
        ctx: &OperationContext,
        request: RequestBuilder,
    ) -> CoreResult<T> {
        let request = request.header(SESSION_HEADER, &self.session_id);
        execute(ctx, request, self.timeout)
    }

    fn get_library(&self, ctx: &OperationContext, id: &str) -> CoreResult<Library> {
        let url = self.endpoint(&format!("{}/id:{}", LIBRARY_PATH, id))?;
        self.send(ctx, self.client.get(url))
    }

    fn get_item(&self, ctx: &OperationContext, id: &str) -> CoreResult<Item> {
        let url = self.endpoint(&format!("{}/id:{}", ITEM_PATH, id))?;
        self.send(ctx, self.client.get(url))
    }
}

impl LibraryService for RestLibraryService {
    fn list_libraries(&self, ctx: &OperationContext) -> CoreResult<Vec<Library>> {
        let ids: Vec<String> = self.send(ctx, self.client.get(self.endpoint(LIBRARY_PATH)?))?;
        debug!("Server reports {} libraries", ids.len());
        ids.iter().map(|id| self.get_library(ctx, id)).collect()
    }

    fn list_items(&self, ctx: &OperationContext, library_id: &str) -> CoreResult<Vec<Item>> {
        let request = self
            .client
            .get(self.endpoint(ITEM_PATH)?)
            .query(&[("library_id", library_id)]);
        let ids: Vec<String> = self.send(ctx, request)?;
        debug!("Library {} has {} items", library_id, ids.len());
        ids.iter().map(|id| self.get_item(ctx, id)).collect()
    }

    fn list_files(&self, ctx: &OperationContext, item_id: &str) -> CoreResult<Vec<ItemFile>> {
        let request = self
            .client
            .get(self.endpoint(FILE_PATH)?)
            .query(&[("library_item_id", item_id)]);
        self.send(ctx, request)
    }

    fn copy_item(
        &self,
        ctx: &OperationContext,
        source: &Item,
        spec: &ItemCopySpec,
    ) -> CoreResult<String> {
        let url = self.endpoint(&format!("{}/id:{}?~action=copy", ITEM_PATH, source.id))?;
        let body = CopyRequest {
            destination_create_spec: spec,
        };
        self.send(ctx, self.client.post(url).json(&body))
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn endpoint(base_url: &Url, path: &str) -> CoreResult<Url> {
    base_url
        .join(path)
        .map_err(|e| CoreError::InvalidPath(format!("cannot build URL for '{}': {}", path, e)))
}

fn login(
    client: &Client,
    base_url: &Url,
    ctx: &OperationContext,
    timeout: Duration,
    username: &str,
    password: &str,
) -> CoreResult<String> {
    debug!("Creating session for {} at {}", username, base_url);
    let request = client
        .post(endpoint(base_url, SESSION_PATH)?)
        .basic_auth(username, Some(password));
    execute(ctx, request, timeout).map_err(|e| match e {
        CoreError::Api { status: 401, message } => {
            CoreError::Session(format!("login failed for {}: {}", username, message))
        }
        other => other,
    })
}

/// Sends `request` under `ctx` and unwraps the `value` envelope.
///
/// The request is bounded by `timeout` or by the context deadline, whichever
/// is sooner. Cancelling the context returns `CoreError::Cancelled` while the
/// request is still in flight; the worker thread is left to finish on its own.
fn execute<T: DeserializeOwned>(
    ctx: &OperationContext,
    request: RequestBuilder,
    timeout: Duration,
) -> CoreResult<T> {
    ctx.check()?;
    let timeout = ctx
        .remaining()
        .map_or(timeout, |remaining| remaining.min(timeout));
    let request = request.timeout(timeout);

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let outcome = request.send().and_then(|response| {
            let status = response.status();
            response.text().map(|body| (status, body))
        });
        // The receiver is gone once the caller gave up on this request.
        let _ = tx.send(outcome);
    });

    let outcome = loop {
        match rx.recv_timeout(CONTEXT_POLL_INTERVAL) {
            Ok(outcome) => break outcome,
            Err(RecvTimeoutError::Timeout) => ctx.check()?,
            Err(RecvTimeoutError::Disconnected) => {
                return Err(CoreError::OperationFailed(
                    "HTTP worker exited without a response".to_string(),
                ));
            }
        }
    };

    let (status, body) = outcome.map_err(|e| {
        if e.is_timeout() {
            match ctx.check() {
                Err(ctx_err) => ctx_err,
                Ok(()) => CoreError::Http(e),
            }
        } else {
            CoreError::Http(e)
        }
    })?;
    decode(status, &body)
}

fn decode<T: DeserializeOwned>(status: StatusCode, body: &str) -> CoreResult<T> {
    trace!("Response {}: {}", status, body);

    if !status.is_success() {
        let message = api_error_message(body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unexpected response")
                .to_string()
        });
        return Err(CoreError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let envelope: Envelope<T> = serde_json::from_str(body)?;
    Ok(envelope.value)
}

/// Extracts the first `default_message` from a REST error body.
///
/// Accepts both `{"value": {"messages": [...]}}` and `{"messages": [...]}`.
fn api_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let messages = value
        .get("value")
        .and_then(|inner| inner.get("messages"))
        .or_else(|| value.get("messages"))?;
    messages
        .as_array()?
        .iter()
        .filter_map(|message| message.get("default_message")?.as_str())
        .next()
        .map(str::to_string)
}
