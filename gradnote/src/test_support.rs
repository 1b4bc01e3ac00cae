//! In-memory transport and navigator used by the unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpClient, HttpRequest, HttpResponse, MemoryTokens, Navigator, Transport};

/// Replays queued responses and records every request it receives.
#[derive(Clone, Default)]
pub struct FakeTransport {
    responses: Rc<RefCell<VecDeque<Result<HttpResponse, ApiError>>>>,
    requests: Rc<RefCell<Vec<HttpRequest>>>,
}

impl FakeTransport {
    pub fn respond_json(&self, status: u16, body: serde_json::Value) {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.to_string().into_bytes(),
        }));
    }

    pub fn respond_empty(&self, status: u16) {
        self.responses
            .borrow_mut()
            .push_back(Ok(HttpResponse { status, body: Vec::new() }));
    }

    pub fn fail(&self, message: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(ApiError::Network(message.to_owned())));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests.borrow().last().cloned().expect("no request was sent")
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no response queued".to_owned())))
    }
}

/// Records redirect targets.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    visits: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.visits.borrow_mut().push(path.to_owned());
    }
}

pub type TestClient = HttpClient<FakeTransport, MemoryTokens, RecordingNavigator>;

/// Client plus handles to its fakes.
pub struct Harness {
    pub client: TestClient,
    pub transport: FakeTransport,
    pub tokens: MemoryTokens,
    pub navigator: RecordingNavigator,
}

pub fn harness() -> Harness {
    harness_with_tokens(MemoryTokens::default())
}

pub fn harness_with_token(token: &str) -> Harness {
    harness_with_tokens(MemoryTokens::with_token(token))
}

fn harness_with_tokens(tokens: MemoryTokens) -> Harness {
    let transport = FakeTransport::default();
    let navigator = RecordingNavigator::default();
    let client = HttpClient::new(
        ClientConfig::default(),
        transport.clone(),
        tokens.clone(),
        navigator.clone(),
    );
    Harness { client, transport, tokens, navigator }
}

pub fn user_json(id: i64, username: &str) -> serde_json::Value {
    serde_json::json!({ "id": id, "username": username, "email": format!("{username}@example.com") })
}

pub fn question_json(id: i64, content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "user_id": 1,
        "content": content,
        "created_at": "2024-05-01T08:00:00"
    })
}
