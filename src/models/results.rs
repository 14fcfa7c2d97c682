use crate::utils::json::bson_to_json;
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use serde::Serialize;
use serde_json::Value;

/// Write acknowledgements, shaped like the document driver's own result objects.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertResponse {
    pub acknowledged: bool,
    #[schema(value_type = String)]
    pub inserted_id: Value,
}

impl From<InsertOneResult> for InsertResponse {
    fn from(result: InsertOneResult) -> Self {
        Self {
            acknowledged: true,
            inserted_id: bson_to_json(result.inserted_id),
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    #[schema(value_type = Option<String>)]
    pub upserted_id: Option<Value>,
    pub upserted_count: u64,
}

impl From<UpdateResult> for UpdateResponse {
    fn from(result: UpdateResult) -> Self {
        let upserted_count = u64::from(result.upserted_id.is_some());
        Self {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result.upserted_id.map(bson_to_json),
            upserted_count,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl From<DeleteResult> for DeleteResponse {
    fn from(result: DeleteResult) -> Self {
        Self {
            acknowledged: true,
            deleted_count: result.deleted_count,
        }
    }
}
