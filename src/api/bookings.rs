use crate::{
    database::MongoDB,
    models::{BookingExists, DeleteResponse, InsertResponse},
    services::booking_service,
    utils::{document_to_json, AppResult},
};
use actix_web::{web, HttpResponse};
use serde_json::Value;

#[utoipa::path(
    post,
    path = "/bookTutorial",
    tag = "Bookings",
    responses(
        (status = 200, description = "Booking stored", body = InsertResponse),
        (status = 400, description = "Body is not a JSON object")
    )
)]
pub async fn create_booking(db: web::Data<MongoDB>, body: web::Json<Value>) -> AppResult<HttpResponse> {
    log::info!("📅 POST /bookTutorial");

    let result = booking_service::create_booking(&db, &body).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/bookedTutorials/{email}",
    tag = "Bookings",
    params(("email" = String, Path, description = "Booking owner")),
    responses(
        (status = 200, description = "All bookings of the user")
    )
)]
pub async fn bookings_for_user(db: web::Data<MongoDB>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let email = path.into_inner();
    log::info!("📅 GET /bookedTutorials/{}", email);

    let bookings = booking_service::bookings_for_user(&db, &email).await?;
    let body: Vec<Value> = bookings.into_iter().map(document_to_json).collect();
    Ok(HttpResponse::Ok().json(body))
}

#[utoipa::path(
    get,
    path = "/bookTutorial/{userEmail}&{id}",
    tag = "Bookings",
    params(
        ("userEmail" = String, Path, description = "Booking owner"),
        ("id" = String, Path, description = "Tutor id as stored in the booking")
    ),
    responses(
        (status = 200, description = "Whether the user already booked this tutor", body = BookingExists)
    )
)]
pub async fn booking_exists(db: web::Data<MongoDB>, path: web::Path<(String, String)>) -> AppResult<HttpResponse> {
    let (user_email, tutor_id) = path.into_inner();
    log::info!("📅 GET /bookTutorial/{}&{}", user_email, tutor_id);

    let result = booking_service::booking_exists(&db, &user_email, &tutor_id).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    delete,
    path = "/delete-bookTutorial/{userEmail}&{id}",
    tag = "Bookings",
    params(
        ("userEmail" = String, Path, description = "Booking owner"),
        ("id" = String, Path, description = "Booking id")
    ),
    responses(
        (status = 200, description = "Delete result; deletedCount is 0 when nothing matched", body = DeleteResponse),
        (status = 400, description = "Malformed booking id")
    )
)]
pub async fn delete_booking(db: web::Data<MongoDB>, path: web::Path<(String, String)>) -> AppResult<HttpResponse> {
    let (user_email, id) = path.into_inner();
    log::info!("🗑️  DELETE /delete-bookTutorial/{}&{}", user_email, id);

    let result = booking_service::delete_booking(&db, &id, &user_email).await?;
    Ok(HttpResponse::Ok().json(result))
}
