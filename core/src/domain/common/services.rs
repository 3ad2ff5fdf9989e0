use std::sync::Arc;

use crate::domain::{
    common::locks::KeyedLocks, llm::ports::LLMClient, storage::ports::ObjectStoragePort,
};

/// Application service: every feature port is implemented on this type.
pub struct Service<OS, LLM>
where
    OS: ObjectStoragePort,
    LLM: LLMClient,
{
    pub(crate) object_storage: Arc<OS>,
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) locks: KeyedLocks,
}

impl<OS, LLM> Service<OS, LLM>
where
    OS: ObjectStoragePort,
    LLM: LLMClient,
{
    pub fn new(object_storage: OS, llm_client: LLM) -> Self {
        Self {
            object_storage: Arc::new(object_storage),
            llm_client: Arc::new(llm_client),
            locks: KeyedLocks::new(),
        }
    }
}

impl<OS, LLM> Clone for Service<OS, LLM>
where
    OS: ObjectStoragePort,
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            object_storage: Arc::clone(&self.object_storage),
            llm_client: Arc::clone(&self.llm_client),
            locks: self.locks.clone(),
        }
    }
}
