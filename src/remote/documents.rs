//! Document storage collaborator.

use std::sync::Mutex;

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::remote::errors::RemoteSyncError;

/// Remote document storage, addressed by `(collection, key)`.
///
/// The contract mirrors what the storefront actually needs from a
/// document-oriented BaaS: whole-document get/set with an optional merge,
/// partial updates, and array membership primitives for wishlist and
/// order-history fields.
#[automock]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetches a document, or `None` if it does not exist.
    async fn get_document(
        &self,
        collection: &str,
        key: &str,
    ) -> Result<Option<Value>, RemoteSyncError>;

    /// Writes a document. With `merge`, top-level fields of `data` are
    /// merged into an existing document instead of replacing it.
    async fn set_document(
        &self,
        collection: &str,
        key: &str,
        data: Value,
        merge: bool,
    ) -> Result<(), RemoteSyncError>;

    /// Merges the given top-level fields into an existing document.
    async fn update_document(
        &self,
        collection: &str,
        key: &str,
        patch: Value,
    ) -> Result<(), RemoteSyncError>;

    /// Appends values to an array field, skipping values already present.
    /// Creates the document and field as needed.
    async fn array_union(
        &self,
        collection: &str,
        key: &str,
        field: &str,
        values: Vec<Value>,
    ) -> Result<(), RemoteSyncError>;

    /// Removes all occurrences of the given values from an array field.
    async fn array_remove(
        &self,
        collection: &str,
        key: &str,
        field: &str,
        values: Vec<Value>,
    ) -> Result<(), RemoteSyncError>;
}

type Collection = FxHashMap<String, Value>;

/// In-memory [`DocumentStore`] for headless runs and tests.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: Mutex<FxHashMap<String, Collection>>,
}

impl MemoryDocumentStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, FxHashMap<String, Collection>>, RemoteSyncError> {
        self.collections
            .lock()
            .map_err(|_| RemoteSyncError::Unavailable)
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn get_document(
        &self,
        collection: &str,
        key: &str,
    ) -> Result<Option<Value>, RemoteSyncError> {
        let collections = self.lock()?;

        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(key))
            .cloned())
    }

    async fn set_document(
        &self,
        collection: &str,
        key: &str,
        data: Value,
        merge: bool,
    ) -> Result<(), RemoteSyncError> {
        let mut collections = self.lock()?;
        let docs = collections.entry(collection.to_owned()).or_default();

        if merge {
            if let Some(existing) = docs.get_mut(key) {
                merge_fields(existing, data);
                return Ok(());
            }
        }

        docs.insert(key.to_owned(), data);

        Ok(())
    }

    async fn update_document(
        &self,
        collection: &str,
        key: &str,
        patch: Value,
    ) -> Result<(), RemoteSyncError> {
        let mut collections = self.lock()?;

        let existing = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(key))
            .ok_or_else(|| RemoteSyncError::Rejected(format!("no document {collection}/{key}")))?;

        merge_fields(existing, patch);

        Ok(())
    }

    async fn array_union(
        &self,
        collection: &str,
        key: &str,
        field: &str,
        values: Vec<Value>,
    ) -> Result<(), RemoteSyncError> {
        let mut collections = self.lock()?;
        let docs = collections.entry(collection.to_owned()).or_default();
        let doc = docs
            .entry(key.to_owned())
            .or_insert_with(|| Value::Object(serde_json::Map::new()));

        let array = array_field(doc, collection, key, field)?;

        for value in values {
            if !array.contains(&value) {
                array.push(value);
            }
        }

        Ok(())
    }

    async fn array_remove(
        &self,
        collection: &str,
        key: &str,
        field: &str,
        values: Vec<Value>,
    ) -> Result<(), RemoteSyncError> {
        let mut collections = self.lock()?;

        let Some(doc) = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(key))
        else {
            return Ok(());
        };

        let array = array_field(doc, collection, key, field)?;
        array.retain(|existing| !values.contains(existing));

        Ok(())
    }
}

/// Merges the top-level fields of `patch` into `target`.
fn merge_fields(target: &mut Value, patch: Value) {
    match (target, patch) {
        (Value::Object(existing), Value::Object(incoming)) => {
            for (field, value) in incoming {
                existing.insert(field, value);
            }
        }
        (target, patch) => *target = patch,
    }
}

/// Resolves `field` on `doc` as an array, creating it when absent.
fn array_field<'doc>(
    doc: &'doc mut Value,
    collection: &str,
    key: &str,
    field: &str,
) -> Result<&'doc mut Vec<Value>, RemoteSyncError> {
    let Value::Object(fields) = doc else {
        return Err(RemoteSyncError::Rejected(format!(
            "document {collection}/{key} is not an object"
        )));
    };

    match fields
        .entry(field.to_owned())
        .or_insert_with(|| Value::Array(Vec::new()))
    {
        Value::Array(array) => Ok(array),
        _ => Err(RemoteSyncError::Rejected(format!(
            "field {field} of {collection}/{key} is not an array"
        ))),
    }
}
