//! In-memory stand-ins for the browser collaborators.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

use async_trait::async_trait;

use crate::{
    actions::Notifier,
    api::{ApiRequest, ApiResponse, Method, Transport},
    error::{HistoryError, Result},
    history::{HistoryBackend, HistoryEntry},
    session::KeyValueStore,
};

#[derive(Clone, Default)]
pub struct MockTransport {
    routes: Rc<RefCell<HashMap<(Method, String), ApiResponse>>>,
    requests: Rc<RefCell<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn respond(&self, method: Method, path: &str, status: u16, body: &str) {
        self.respond_with(
            method,
            path,
            ApiResponse {
                status,
                status_text: String::new(),
                body: body.to_string(),
            },
        );
    }

    pub fn respond_with(&self, method: Method, path: &str, response: ApiResponse) {
        self.routes
            .borrow_mut()
            .insert((method, path.to_string()), response);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|request| format!("{} {}", request.method.as_str(), request.path))
            .collect()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let key = (request.method, request.path.clone());
        self.requests.borrow_mut().push(request);
        Ok(self
            .routes
            .borrow()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| ApiResponse {
                status: 404,
                status_text: "Not Found".to_string(),
                body: r#"{"detail":"Not Found"}"#.to_string(),
            }))
    }
}

#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    messages: Rc<RefCell<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// Browser-like session history: pushing drops forward entries.
#[derive(Clone, Default)]
pub struct MemoryHistory {
    entries: Rc<RefCell<Vec<HistoryEntry>>>,
    index: Rc<Cell<usize>>,
}

impl MemoryHistory {
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn back(&self) -> Option<HistoryEntry> {
        let index = self.index.get();
        if index == 0 {
            return None;
        }
        self.index.set(index - 1);
        self.entries.borrow().get(index - 1).cloned()
    }
}

impl HistoryBackend for MemoryHistory {
    fn current(&self) -> Option<HistoryEntry> {
        let entries = self.entries.borrow();
        if entries.is_empty() {
            return None;
        }
        entries.get(self.index.get()).cloned()
    }

    fn push(&self, entry: &HistoryEntry) -> std::result::Result<(), HistoryError> {
        let mut entries = self.entries.borrow_mut();
        if !entries.is_empty() {
            entries.truncate(self.index.get() + 1);
        }
        entries.push(entry.clone());
        self.index.set(entries.len() - 1);
        Ok(())
    }
}
