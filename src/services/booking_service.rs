use crate::{
    database::{MongoDB, BOOKINGS},
    models::{BookingExists, DeleteResponse, InsertResponse},
    utils::{json_to_document, parse_object_id, AppResult},
};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use serde_json::Value;

pub fn by_user_filter(user_email: &str) -> Document {
    doc! { "userEmail": user_email }
}

pub fn booking_pair_filter(user_email: &str, tutor_id: &str) -> Document {
    doc! { "userEmail": user_email, "tutorId": tutor_id }
}

pub fn owned_booking_filter(id: ObjectId, user_email: &str) -> Document {
    doc! { "_id": id, "userEmail": user_email }
}

pub async fn create_booking(db: &MongoDB, body: &Value) -> AppResult<InsertResponse> {
    let booking = json_to_document(body)?;
    let result = db.collection::<Document>(BOOKINGS).await?.insert_one(booking).await?;
    Ok(result.into())
}

pub async fn bookings_for_user(db: &MongoDB, user_email: &str) -> AppResult<Vec<Document>> {
    let cursor = db
        .collection::<Document>(BOOKINGS)
        .await?
        .find(by_user_filter(user_email))
        .await?;
    Ok(cursor.try_collect().await?)
}

/// `tutorId` is stored as the client sent it (a hex string), so it is matched as text.
pub async fn booking_exists(db: &MongoDB, user_email: &str, tutor_id: &str) -> AppResult<BookingExists> {
    let found = db
        .collection::<Document>(BOOKINGS)
        .await?
        .find_one(booking_pair_filter(user_email, tutor_id))
        .await?;
    Ok(BookingExists { exists: found.is_some() })
}

/// Deletes only when the booking belongs to `user_email`; otherwise a no-op.
pub async fn delete_booking(db: &MongoDB, id: &str, user_email: &str) -> AppResult<DeleteResponse> {
    let id = parse_object_id(id)?;
    let result = db
        .collection::<Document>(BOOKINGS)
        .await?
        .delete_one(owned_booking_filter(id, user_email))
        .await?;
    Ok(result.into())
}
