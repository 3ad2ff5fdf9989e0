use std::future::Future;

use serde::{Serialize, de::DeserializeOwned};

use crate::domain::{
    common::entities::app_errors::CoreError,
    document::{entities::DocumentName, value_objects::DocumentLoad},
    household::entities::HouseholdId,
};

/// Household-scoped JSON documents stored as `{household_id}/{name}.json`.
pub trait DocumentService: Send + Sync {
    /// Read a document, telling "never written" apart from a failed read
    fn load_document<T>(
        &self,
        household_id: &HouseholdId,
        name: DocumentName,
    ) -> impl Future<Output = Result<DocumentLoad<T>, CoreError>> + Send
    where
        T: DeserializeOwned + Send;

    /// Read a document, falling back to `default` when it is absent or cannot
    /// be read. Failures are only logged.
    fn load_document_or_default<T>(
        &self,
        household_id: &HouseholdId,
        name: DocumentName,
        default: T,
    ) -> impl Future<Output = T> + Send
    where
        T: DeserializeOwned + Send;

    /// Write a document, replacing whatever was stored
    fn save_document<T>(
        &self,
        household_id: &HouseholdId,
        name: DocumentName,
        value: &T,
    ) -> impl Future<Output = Result<(), CoreError>> + Send
    where
        T: Serialize + Sync;
}
