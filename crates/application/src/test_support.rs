//! Scripted transport for fixture and driver tests.

#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::time::Duration;

use saga_domain::{ApiCall, ApiResponse};

use crate::ports::{ApiClientError, StoryApi};

/// In-memory transport replaying queued results in order.
///
/// Records every call's method, path, and token so tests can assert on the
/// exact request sequence. Exhausting the script yields a sentinel 599
/// response rather than a panic, so a miscounted script shows up as a
/// scenario failure in the report under test.
pub struct ScriptedApi {
    script: Mutex<VecDeque<Result<ApiResponse, ApiClientError>>>,
    calls: Mutex<Vec<String>>,
    tokens: Mutex<Vec<Option<String>>>,
}

impl ScriptedApi {
    pub fn new(script: Vec<Result<ApiResponse, ApiClientError>>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
            tokens: Mutex::new(Vec::new()),
        }
    }

    pub fn ok(responses: Vec<ApiResponse>) -> Self {
        Self::new(responses.into_iter().map(Ok).collect())
    }

    /// The "METHOD path" of every call seen so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// The token passed with every call seen so far, in order.
    pub fn tokens(&self) -> Vec<Option<String>> {
        self.tokens.lock().unwrap().clone()
    }
}

impl StoryApi for ScriptedApi {
    fn send<'a>(
        &'a self,
        call: &'a ApiCall,
        token: Option<&'a str>,
    ) -> Pin<Box<dyn Future<Output = Result<ApiResponse, ApiClientError>> + Send + 'a>> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{} {}", call.method, call.path));
        self.tokens.lock().unwrap().push(token.map(ToOwned::to_owned));

        let next = self.script.lock().unwrap().pop_front().unwrap_or_else(|| {
            Ok(ApiResponse::new(599, "script exhausted", Duration::ZERO))
        });
        Box::pin(async move { next })
    }
}
