use crate::{
    database::{MongoDB, USERS},
    models::InsertResponse,
    utils::{json_to_document, AppResult},
};
use mongodb::bson::Document;
use serde_json::Value;

/// POST /newUser - stores whatever the client sent, no duplicate check.
pub async fn create_user(db: &MongoDB, body: &Value) -> AppResult<InsertResponse> {
    let user = json_to_document(body)?;
    let result = db.collection::<Document>(USERS).await?.insert_one(user).await?;
    Ok(result.into())
}
