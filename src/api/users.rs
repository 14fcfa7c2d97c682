use crate::{database::MongoDB, models::InsertResponse, services::user_service, utils::AppResult};
use actix_web::{web, HttpResponse};
use serde_json::Value;

#[utoipa::path(
    post,
    path = "/newUser",
    tag = "Users",
    responses(
        (status = 200, description = "User stored", body = InsertResponse),
        (status = 400, description = "Body is not a JSON object")
    )
)]
pub async fn create_user(db: web::Data<MongoDB>, body: web::Json<Value>) -> AppResult<HttpResponse> {
    log::info!("👤 POST /newUser");

    let result = user_service::create_user(&db, &body).await?;
    Ok(HttpResponse::Ok().json(result))
}
