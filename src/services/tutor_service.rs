use crate::{
    database::{MongoDB, TUTORS},
    models::{DeleteResponse, InsertResponse, TutorPageQuery, UpdateResponse, UpdateTutorRequest},
    utils::{json_to_document, parse_object_id, AppResult},
};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use serde_json::Value;

/// skip/limit for one page of tutors.
///
/// Numbers are read from their leading integer digits (`"2.5"` is 2,
/// `"10px"` is 10); absent or digit-less values count as 0. The skip is clamped at 0 (the
/// driver takes it unsigned); a limit of 0 means "no limit".
pub fn page_window(page: Option<&str>, size: Option<&str>) -> (u64, i64) {
    let page = parse_int(page);
    let size = parse_int(size);
    let skip = page.saturating_mul(size).max(0) as u64;
    (skip, size)
}

fn parse_int(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else { return 0 };
    let text = raw.trim_start();
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    match unsigned[..end].parse::<i64>() {
        Ok(n) if negative => -n,
        Ok(n) => n,
        // out of range saturates; no digits at all is 0
        Err(_) if end > 0 => if negative { i64::MIN } else { i64::MAX },
        Err(_) => 0,
    }
}

/// Case-insensitive substring match on `language`. The search text is escaped,
/// so it is matched literally rather than as a pattern.
pub fn search_filter(search: Option<&str>) -> Document {
    match search.filter(|s| !s.is_empty()) {
        Some(text) => doc! {
            "language": { "$regex": regex::escape(text), "$options": "i" }
        },
        None => doc! {},
    }
}

/// Absent query values match documents where the field is null or missing.
pub fn field_equals(field: &str, value: Option<&str>) -> Document {
    let mut filter = Document::new();
    filter.insert(field, value.map(Bson::from).unwrap_or(Bson::Null));
    filter
}

/// `$set` for the seven editable listing fields. Missing `new*` values are written as null.
pub fn listing_update(request: &UpdateTutorRequest) -> Document {
    let value = |v: &Option<Bson>| v.clone().unwrap_or(Bson::Null);

    doc! {
        "$set": {
            "name": value(&request.new_name),
            "email": value(&request.new_email),
            "image": value(&request.new_image),
            "price": value(&request.new_price),
            "review": value(&request.new_review),
            "language": value(&request.new_language),
            "description": value(&request.new_description),
        }
    }
}

pub async fn create_tutor(db: &MongoDB, body: &Value) -> AppResult<InsertResponse> {
    let tutor = json_to_document(body)?;
    let result = db.collection::<Document>(TUTORS).await?.insert_one(tutor).await?;
    Ok(result.into())
}

pub async fn list_tutors(db: &MongoDB, query: &TutorPageQuery) -> AppResult<Vec<Document>> {
    let (skip, limit) = page_window(query.page.as_deref(), query.size.as_deref());
    let filter = search_filter(query.search.as_deref());

    log::debug!("tutors page: filter={} skip={} limit={}", filter, skip, limit);

    let cursor = db
        .collection::<Document>(TUTORS)
        .await?
        .find(filter)
        .skip(skip)
        .limit(limit)
        .await?;
    Ok(cursor.try_collect().await?)
}

pub async fn tutors_by_category(db: &MongoDB, category: Option<&str>) -> AppResult<Vec<Document>> {
    find_all(db, field_equals("language", category)).await
}

pub async fn tutors_by_owner(db: &MongoDB, email: Option<&str>) -> AppResult<Vec<Document>> {
    find_all(db, field_equals("email", email)).await
}

pub async fn tutor_images(db: &MongoDB) -> AppResult<Vec<Document>> {
    let cursor = db
        .collection::<Document>(TUTORS)
        .await?
        .find(doc! {})
        .projection(doc! { "image": 1, "_id": 0 })
        .await?;
    Ok(cursor.try_collect().await?)
}

/// Overwrites the editable fields of one listing, inserting it if the id is unknown.
pub async fn update_tutor(db: &MongoDB, request: &UpdateTutorRequest) -> AppResult<UpdateResponse> {
    let id = parse_object_id(&request.id)?;
    let result = db
        .collection::<Document>(TUTORS)
        .await?
        .update_one(doc! { "_id": id }, listing_update(request))
        .upsert(true)
        .await?;
    Ok(result.into())
}

pub async fn delete_tutor(db: &MongoDB, id: &str) -> AppResult<DeleteResponse> {
    let id = parse_object_id(id)?;
    let result = db
        .collection::<Document>(TUTORS)
        .await?
        .delete_one(doc! { "_id": id })
        .await?;
    Ok(result.into())
}

pub async fn tutor_details(db: &MongoDB, id: &str) -> AppResult<Option<Document>> {
    let id = parse_object_id(id)?;
    Ok(db
        .collection::<Document>(TUTORS)
        .await?
        .find_one(doc! { "_id": id })
        .await?)
}

async fn find_all(db: &MongoDB, filter: Document) -> AppResult<Vec<Document>> {
    let cursor = db.collection::<Document>(TUTORS).await?.find(filter).await?;
    Ok(cursor.try_collect().await?)
}
