use crate::{
    database::MongoDB,
    models::{CountsSummary, LanguageCount},
    services::stats_service,
    utils::AppResult,
};
use actix_web::{web, HttpResponse};

#[utoipa::path(
    get,
    path = "/countUser&Tutorials",
    tag = "Stats",
    responses(
        (status = 200, description = "User count, tutor count and review total", body = CountsSummary)
    )
)]
pub async fn counts_summary(db: web::Data<MongoDB>) -> AppResult<HttpResponse> {
    log::info!("📊 GET /countUser&Tutorials");

    let summary = stats_service::counts_summary(&db).await?;
    Ok(HttpResponse::Ok().json(summary))
}

/// Failures here answer with a plain-text 500; the web client relies on that shape.
#[utoipa::path(
    get,
    path = "/category/numberOfTutors",
    tag = "Stats",
    responses(
        (status = 200, description = "Tutor count per language, unordered", body = [LanguageCount]),
        (status = 500, description = "Aggregation failed", body = String, content_type = "text/plain")
    )
)]
pub async fn tutors_per_language(db: web::Data<MongoDB>) -> HttpResponse {
    log::info!("📊 GET /category/numberOfTutors");

    match stats_service::tutors_per_language(&db).await {
        Ok(groups) => {
            log::info!("✅ {} language groups", groups.len());
            HttpResponse::Ok().json(groups)
        }
        Err(e) => {
            log::error!("❌ Error fetching language counts: {}", e);
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body("Server Error")
        }
    }
}
