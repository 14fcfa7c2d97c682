//! BSON <-> JSON conversion for the HTTP boundary.
//!
//! Outgoing documents render `ObjectId` as its hex string (what the web client
//! puts back into URLs); every other value uses relaxed extended JSON, so
//! numbers stay plain numbers.

use crate::utils::error::{AppError, AppResult};
use mongodb::bson::{oid::ObjectId, Bson, Document};
use serde_json::Value;

pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

pub fn document_to_json(doc: Document) -> Value {
    Value::Object(doc.into_iter().map(|(key, value)| (key, bson_to_json(value))).collect())
}

/// Accepts any JSON object as a document; anything else is a client error.
pub fn json_to_document(value: &Value) -> AppResult<Document> {
    if !value.is_object() {
        return Err(AppError::InvalidRequest("body must be a JSON object".to_string()));
    }
    mongodb::bson::to_document(value).map_err(|e| AppError::InvalidRequest(e.to_string()))
}

pub fn parse_object_id(raw: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(raw).map_err(|_| AppError::InvalidId(raw.to_string()))
}
