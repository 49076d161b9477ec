//! Per-collection handlers
//!
//! Every handler serializes its whole body before choosing a status, so a
//! serialization failure can only ever surface as an internal failure.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::protocol::Response;
use crate::resource::Resource;
use crate::store::Store;
use super::error::{DispatchError, DispatchResult};

/// Store operations reachable from the route table, erased over record type
pub trait CollectionHandler: Send + Sync {
    /// Collection path segment (e.g. `users`)
    fn name(&self) -> &str;

    /// Every record, as a JSON array
    fn list(&self) -> DispatchResult<Response>;

    /// One record by captured id
    fn get(&self, id: Option<&str>) -> DispatchResult<Response>;

    /// Decode, insert and echo a record
    fn create(&self, body: &[u8]) -> DispatchResult<Response>;
}

/// Handler binding a collection name to its store
pub struct CollectionEndpoint<R: Resource> {
    name: String,
    store: Arc<Store<R>>,
}

impl<R: Resource> CollectionEndpoint<R> {
    pub fn new(name: impl Into<String>, store: Arc<Store<R>>) -> Self {
        Self {
            name: name.into(),
            store,
        }
    }
}

impl<R: Resource> CollectionHandler for CollectionEndpoint<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn list(&self) -> DispatchResult<Response> {
        // Lock is released before serialization
        let records = self.store.list();
        serialize(&records).map(Response::ok)
    }

    fn get(&self, id: Option<&str>) -> DispatchResult<Response> {
        let id = id.ok_or_else(DispatchError::no_route)?;

        match self.store.get(id) {
            Some(record) => serialize(&record).map(Response::ok),
            None => Err(DispatchError::NotFound(format!("{} not found", R::KIND))),
        }
    }

    fn create(&self, body: &[u8]) -> DispatchResult<Response> {
        let record = decode_record::<R>(body)?;
        let stored = self
            .store
            .insert(record)
            .map_err(|e| DispatchError::Internal(format!("insert {}: {}", R::KIND, e)))?;
        serialize(&stored).map(Response::ok)
    }
}

/// Decode a request body into a record
///
/// Only the first JSON value in the body is read; anything after it is
/// ignored. That value must be an object. Keys are matched to the record's
/// wire fields case-insensitively, so `{"ID":"1"}` fills `id`.
fn decode_record<R: Resource>(body: &[u8]) -> DispatchResult<R> {
    let decode_err = |e: String| DispatchError::Internal(format!("decode {}: {}", R::KIND, e));

    let value = serde_json::Deserializer::from_slice(body)
        .into_iter::<Value>()
        .next()
        .ok_or_else(|| decode_err("empty body".to_string()))?
        .map_err(|e| decode_err(e.to_string()))?;

    let Value::Object(object) = value else {
        return Err(decode_err("body is not a JSON object".to_string()));
    };

    let object: Map<String, Value> = object
        .into_iter()
        .map(|(key, value)| (canonical_key::<R>(key), value))
        .collect();

    serde_json::from_value(Value::Object(object)).map_err(|e| decode_err(e.to_string()))
}

/// The wire field `key` names, ignoring ASCII case; unknown keys pass through
fn canonical_key<R: Resource>(key: String) -> String {
    R::FIELDS
        .iter()
        .find(|field| field.eq_ignore_ascii_case(&key))
        .map_or(key, |field| field.to_string())
}

fn serialize<T: Serialize + ?Sized>(value: &T) -> DispatchResult<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| DispatchError::Internal(format!("serialize: {}", e)))
}
