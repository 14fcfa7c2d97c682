use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LingoLink API",
        version = "1.0.0",
        description = "Backend for the LingoLink tutor marketplace.\n\n**Collections:** users, tutors, bookings.\n\nRoute shapes (including the `&` separators) are kept exactly as the web client calls them."
    ),
    paths(
        // Health
        crate::api::health::index,
        crate::api::health::health_check,

        // Users
        crate::api::users::create_user,

        // Tutors
        crate::api::tutors::create_tutor,
        crate::api::tutors::list_tutors,
        crate::api::tutors::tutors_by_category,
        crate::api::tutors::my_tutorials,
        crate::api::tutors::tutor_images,
        crate::api::tutors::update_tutor,
        crate::api::tutors::delete_tutor,
        crate::api::tutors::tutor_details,

        // Bookings
        crate::api::bookings::create_booking,
        crate::api::bookings::bookings_for_user,
        crate::api::bookings::booking_exists,
        crate::api::bookings::delete_booking,

        // Stats
        crate::api::stats::counts_summary,
        crate::api::stats::tutors_per_language,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::models::InsertResponse,
            crate::models::UpdateResponse,
            crate::models::DeleteResponse,
            crate::models::BookingExists,
            crate::models::CountsSummary,
            crate::models::LanguageCount,
        )
    ),
    tags(
        (name = "Health", description = "Liveness text and store reachability."),
        (name = "Users", description = "User sign-up records."),
        (name = "Tutors", description = "Tutor listings: create, browse, search, edit, delete."),
        (name = "Bookings", description = "Tutor bookings per user."),
        (name = "Stats", description = "Counts and per-language aggregates."),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/",
            "/newUser",
            "/addTutorial",
            "/bookTutorial",
            "/bookedTutorials/{email}",
            "/bookTutorial/{userEmail}&{id}",
            "/delete-bookTutorial/{userEmail}&{id}",
            "/countUser&Tutorials",
            "/tutors",
            "/category",
            "/myTutorials",
            "/tutors-images",
            "/myTutorials/{id}",
            "/tutorDetails/{tutorId}",
            "/category/numberOfTutors",
        ] {
            assert!(paths.contains_key(path), "missing {}", path);
        }
    }
}
