//! Fakes shared by the service tests.

use std::{
    collections::VecDeque,
    sync::{
        Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use bytes::Bytes;

use crate::{
    domain::{
        authentication::value_objects::Identity,
        common::{entities::app_errors::CoreError, services::Service},
        llm::{
            errors::AiGatewayError,
            ports::{ImagePayload, LLMClient},
        },
        storage::ports::ObjectStoragePort,
    },
    infrastructure::object_storage::InMemoryObjectStorage,
};

pub(crate) type TestService = Service<TestObjectStorage, ScriptedLLMClient>;

/// In-memory storage that can be told to fail and counts writes.
#[derive(Default)]
pub(crate) struct TestObjectStorage {
    inner: InMemoryObjectStorage,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl TestObjectStorage {
    pub(crate) fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub(crate) fn raw(&self, key: &str) -> Option<Vec<u8>> {
        futures::executor::block_on(self.inner.get_object(key))
            .ok()
            .flatten()
            .map(|bytes| bytes.to_vec())
    }

    pub(crate) fn json(&self, key: &str) -> Option<serde_json::Value> {
        self.raw(key)
            .and_then(|raw| serde_json::from_slice(&raw).ok())
    }

    pub(crate) fn put_raw(&self, key: &str, content: Vec<u8>) {
        futures::executor::block_on(self.inner.put_object(
            key,
            Bytes::from(content),
            "application/json",
        ))
        .expect("in-memory write");
    }

    pub(crate) fn put_json(&self, key: &str, value: serde_json::Value) {
        self.put_raw(key, serde_json::to_vec(&value).expect("serializable"));
    }
}

impl ObjectStoragePort for TestObjectStorage {
    fn bucket_name(&self) -> String {
        "diet-app-data-test".to_string()
    }

    async fn ensure_bucket(&self) {}

    async fn bucket_exists(&self) -> Result<bool, CoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(CoreError::ObjectStorageError("bucket unreachable".to_string()));
        }
        Ok(true)
    }

    async fn get_object(&self, object_key: &str) -> Result<Option<Bytes>, CoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(CoreError::ObjectStorageError(format!(
                "read of {object_key} failed"
            )));
        }
        self.inner.get_object(object_key).await
    }

    async fn object_exists(&self, object_key: &str) -> Result<bool, CoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(CoreError::ObjectStorageError(format!(
                "exists check of {object_key} failed"
            )));
        }
        self.inner.object_exists(object_key).await
    }

    async fn put_object(
        &self,
        object_key: &str,
        payload: Bytes,
        content_type: &str,
    ) -> Result<(), CoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CoreError::ObjectStorageError(format!(
                "write of {object_key} failed"
            )));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.put_object(object_key, payload, content_type).await
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedCall {
    pub prompt: String,
    pub image_count: usize,
}

/// LLM client replaying queued answers in order.
#[derive(Default)]
pub(crate) struct ScriptedLLMClient {
    responses: Mutex<VecDeque<Result<String, AiGatewayError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedLLMClient {
    pub(crate) fn respond(&self, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(response.into()));
    }

    pub(crate) fn fail(&self, error: AiGatewayError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl LLMClient for ScriptedLLMClient {
    async fn generate(
        &self,
        prompt: String,
        images: Vec<ImagePayload>,
        _response_schema: serde_json::Value,
    ) -> Result<String, AiGatewayError> {
        self.calls.lock().unwrap().push(RecordedCall {
            prompt,
            image_count: images.len(),
        });

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AiGatewayError::Request("no scripted response".to_string())))
    }
}

pub(crate) fn test_service() -> TestService {
    Service::new(TestObjectStorage::default(), ScriptedLLMClient::default())
}

pub(crate) fn identity(email: &str) -> Identity {
    Identity::from_email(Some(email)).unwrap()
}

pub(crate) fn image() -> ImagePayload {
    ImagePayload::new(Some("image/png"), Bytes::from_static(b"\x89PNG"))
}
