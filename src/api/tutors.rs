use crate::{
    database::MongoDB,
    models::{CategoryQuery, DeleteResponse, InsertResponse, OwnerQuery, TutorPageQuery, UpdateResponse, UpdateTutorRequest},
    services::tutor_service,
    utils::{document_to_json, AppResult},
};
use actix_web::{web, HttpResponse};
use mongodb::bson::Document;
use serde_json::Value;

fn json_list(docs: Vec<Document>) -> HttpResponse {
    let body: Vec<Value> = docs.into_iter().map(document_to_json).collect();
    HttpResponse::Ok().json(body)
}

#[utoipa::path(
    post,
    path = "/addTutorial",
    tag = "Tutors",
    responses(
        (status = 200, description = "Listing stored", body = InsertResponse),
        (status = 400, description = "Body is not a JSON object")
    )
)]
pub async fn create_tutor(db: web::Data<MongoDB>, body: web::Json<Value>) -> AppResult<HttpResponse> {
    log::info!("📚 POST /addTutorial");

    let result = tutor_service::create_tutor(&db, &body).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/tutors",
    tag = "Tutors",
    params(TutorPageQuery),
    responses(
        (status = 200, description = "One page of tutors, optionally filtered by language substring")
    )
)]
pub async fn list_tutors(db: web::Data<MongoDB>, query: web::Query<TutorPageQuery>) -> AppResult<HttpResponse> {
    log::info!(
        "📚 GET /tutors page={:?} size={:?} search={:?}",
        query.page,
        query.size,
        query.search
    );

    let tutors = tutor_service::list_tutors(&db, &query).await?;
    Ok(json_list(tutors))
}

#[utoipa::path(
    get,
    path = "/category",
    tag = "Tutors",
    params(CategoryQuery),
    responses(
        (status = 200, description = "Tutors whose language equals the category")
    )
)]
pub async fn tutors_by_category(db: web::Data<MongoDB>, query: web::Query<CategoryQuery>) -> AppResult<HttpResponse> {
    log::info!("📚 GET /category category={:?}", query.category);

    let tutors = tutor_service::tutors_by_category(&db, query.category.as_deref()).await?;
    Ok(json_list(tutors))
}

#[utoipa::path(
    get,
    path = "/myTutorials",
    tag = "Tutors",
    params(OwnerQuery),
    responses(
        (status = 200, description = "Listings created by the given email")
    )
)]
pub async fn my_tutorials(db: web::Data<MongoDB>, query: web::Query<OwnerQuery>) -> AppResult<HttpResponse> {
    log::info!("📚 GET /myTutorials email={:?}", query.email);

    let tutors = tutor_service::tutors_by_owner(&db, query.email.as_deref()).await?;
    Ok(json_list(tutors))
}

#[utoipa::path(
    get,
    path = "/tutors-images",
    tag = "Tutors",
    responses(
        (status = 200, description = "Every listing reduced to its image field")
    )
)]
pub async fn tutor_images(db: web::Data<MongoDB>) -> AppResult<HttpResponse> {
    log::info!("🖼️  GET /tutors-images");

    let images = tutor_service::tutor_images(&db).await?;
    Ok(json_list(images))
}

#[utoipa::path(
    put,
    path = "/myTutorials",
    tag = "Tutors",
    responses(
        (status = 200, description = "Update result; inserts the listing if the id is unknown", body = UpdateResponse),
        (status = 400, description = "Malformed id or body")
    )
)]
pub async fn update_tutor(db: web::Data<MongoDB>, body: web::Json<UpdateTutorRequest>) -> AppResult<HttpResponse> {
    log::info!("✏️  PUT /myTutorials id={}", body.id);

    let result = tutor_service::update_tutor(&db, &body).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    delete,
    path = "/myTutorials/{id}",
    tag = "Tutors",
    params(("id" = String, Path, description = "Listing id")),
    responses(
        (status = 200, description = "Delete result", body = DeleteResponse),
        (status = 400, description = "Malformed id")
    )
)]
pub async fn delete_tutor(db: web::Data<MongoDB>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    log::info!("🗑️  DELETE /myTutorials/{}", id);

    let result = tutor_service::delete_tutor(&db, &id).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/tutorDetails/{tutorId}",
    tag = "Tutors",
    params(("tutorId" = String, Path, description = "Listing id")),
    responses(
        (status = 200, description = "The listing, or null when absent"),
        (status = 400, description = "Malformed id")
    )
)]
pub async fn tutor_details(db: web::Data<MongoDB>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    log::info!("📚 GET /tutorDetails/{}", id);

    let tutor = tutor_service::tutor_details(&db, &id).await?;
    let body = tutor.map(document_to_json).unwrap_or(Value::Null);
    Ok(HttpResponse::Ok().json(body))
}
