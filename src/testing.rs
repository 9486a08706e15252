//! Test doubles shared by unit tests across modules.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::net::error::ApiError;
use crate::net::transport::{ApiRequest, ApiResponse, Transport};
use crate::util::storage::{KeyValueStorage, StorageError};

#[derive(Clone, Debug)]
enum Script {
    Reply(Result<ApiResponse, ApiError>),
    /// The request is recorded but never answered.
    Hang,
}

/// Transport answering by endpoint path and recording every request.
///
/// Unscripted endpoints fail with a transport error.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: Mutex<HashMap<String, Script>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn respond(&self, path: &str, status: u16, body: serde_json::Value) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.to_owned(), Script::Reply(Ok(ApiResponse { status, body })));
    }

    pub fn fail(&self, path: &str, reason: &str) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.to_owned(), Script::Reply(Err(ApiError::Transport(reason.to_owned()))));
    }

    pub fn hang(&self, path: &str) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.to_owned(), Script::Hang);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn requests_to(&self, path: &str) -> Vec<ApiRequest> {
        self.requests().into_iter().filter(|r| r.url.ends_with(path)).collect()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let scripted = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|(path, _)| request.url.ends_with(path.as_str()))
            .map(|(_, script)| script.clone());
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).push(request);
        match scripted {
            Some(Script::Reply(result)) => result,
            Some(Script::Hang) => std::future::pending().await,
            None => Err(ApiError::Transport("unscripted endpoint".to_owned())),
        }
    }
}

/// Storage that reads like an empty store and rejects every write.
#[derive(Debug, Default)]
pub struct ReadOnlyStorage;

impl KeyValueStorage for ReadOnlyStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("QuotaExceededError".to_owned()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("SecurityError".to_owned()))
    }
}
