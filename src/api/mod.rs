pub mod bookings;
pub mod health;
pub mod stats;
pub mod swagger;
pub mod tutors;
pub mod users;

use crate::utils::AppError;
use actix_web::web;

/// Route table. Paths (including the `&`-joined segments) match what the web client calls.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Unreadable bodies get the same JSON error shape as every other failure.
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| AppError::InvalidRequest(err.to_string()).into());

    cfg.app_data(json_config)
        // Health
        .route("/", web::get().to(health::index))
        .route("/health", web::get().to(health::health_check))
        // Users
        .route("/newUser", web::post().to(users::create_user))
        // Bookings
        .route("/bookTutorial", web::post().to(bookings::create_booking))
        .route("/bookedTutorials/{email}", web::get().to(bookings::bookings_for_user))
        .route(
            "/bookTutorial/{user_email:[^/&]+}&{id}",
            web::get().to(bookings::booking_exists),
        )
        .route(
            "/delete-bookTutorial/{user_email:[^/&]+}&{id}",
            web::delete().to(bookings::delete_booking),
        )
        // Stats
        .route("/countUser&Tutorials", web::get().to(stats::counts_summary))
        .route("/category/numberOfTutors", web::get().to(stats::tutors_per_language))
        // Tutors
        .route("/addTutorial", web::post().to(tutors::create_tutor))
        .route("/tutors", web::get().to(tutors::list_tutors))
        .route("/tutors-images", web::get().to(tutors::tutor_images))
        .route("/category", web::get().to(tutors::tutors_by_category))
        .route("/myTutorials", web::get().to(tutors::my_tutorials))
        .route("/myTutorials", web::put().to(tutors::update_tutor))
        .route("/myTutorials/{id}", web::delete().to(tutors::delete_tutor))
        .route("/tutorDetails/{tutor_id}", web::get().to(tutors::tutor_details));
}


#[cfg(test)]
mod store_tests {
    use super::*;
    use crate::database::MongoDB;
    use actix_web::{test, App};
    use mongodb::bson::oid::ObjectId;
    use serde_json::{json, Value};

    /// Fresh database per test so runs never see each other's documents.
    fn live_db() -> web::Data<MongoDB> {
        dotenv::dotenv().ok();
        let uri = std::env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let name = format!("lingo_test_{}", ObjectId::new().to_hex());
        web::Data::new(MongoDB::new(&uri, &name))
    }

    #[actix_web::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_pagination_search_and_language_counts() {
        let db = live_db();
        let app = test::init_service(App::new().app_data(db.clone()).configure(configure)).await;

        for (name, language, review) in [
            ("Ana", "Spanish", 4),
            ("Bruno", "Spanish", 5),
            ("Chloe", "French", 3),
            ("Dmitri", "Russian", 4),
            ("Emi", "Japanese", 5),
        ] {
            let req = test::TestRequest::post()
                .uri("/addTutorial")
                .set_json(json!({ "name": name, "language": language, "review": review, "email": "owner@lingo.link" }))
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body["acknowledged"], true);
            assert!(body["insertedId"].as_str().is_some());
        }

        let first: Vec<Value> =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/tutors?page=0&size=2").to_request()).await;
        assert_eq!(first.len(), 2);

        let last: Vec<Value> =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/tutors?page=2&size=2").to_request()).await;
        assert_eq!(last.len(), 1);
        assert_eq!(last[0]["name"], "Emi");

        let found: Vec<Value> = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/tutors?page=0&size=10&search=SPAN").to_request(),
        )
        .await;
        assert_eq!(found.len(), 2);

        let exact: Vec<Value> =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/category?category=French").to_request()).await;
        assert_eq!(exact.len(), 1);

        let mut groups: Vec<Value> =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/category/numberOfTutors").to_request()).await;
        groups.sort_by_key(|g| g["language"].as_str().unwrap_or_default().to_string());
        assert_eq!(groups.len(), 4);
        assert_eq!(groups[0], json!({ "language": "French", "count": 1 }));
        assert_eq!(groups[3], json!({ "language": "Spanish", "count": 2 }));

        let summary: Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/countUser&Tutorials").to_request()).await;
        assert_eq!(summary["numberOfTutorials"], 5);
        assert_eq!(summary["total"], 21);

        db.database().await.unwrap().drop().await.unwrap();
    }

    #[actix_web::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_counts_on_empty_store() {
        let db = live_db();
        let app = test::init_service(App::new().app_data(db.clone()).configure(configure)).await;

        let summary: Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/countUser&Tutorials").to_request()).await;
        assert_eq!(summary, json!({ "numberOfUsers": 0, "numberOfTutorials": 0, "total": 0 }));

        db.database().await.unwrap().drop().await.unwrap();
    }

    #[actix_web::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_update_upserts_then_overwrites_only_listing_fields() {
        let db = live_db();
        let app = test::init_service(App::new().app_data(db.clone()).configure(configure)).await;
        let id = ObjectId::new().to_hex();

        let update = json!({ "id": id, "newName": "Ana", "newLanguage": "Spanish", "newPrice": 20 });
        let created: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::put().uri("/myTutorials").set_json(&update).to_request(),
        )
        .await;
        assert_eq!(created["upsertedCount"], 1);
        assert_eq!(created["upsertedId"], id);

        db.collection::<mongodb::bson::Document>(crate::database::TUTORS)
            .await
            .unwrap()
            .update_one(
                mongodb::bson::doc! { "_id": ObjectId::parse_str(&id).unwrap() },
                mongodb::bson::doc! { "$set": { "featured": true } },
            )
            .await
            .unwrap();

        let update = json!({ "id": id, "newName": "Ana María", "newLanguage": "Spanish", "newPrice": 25 });
        let updated: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::put().uri("/myTutorials").set_json(&update).to_request(),
        )
        .await;
        assert_eq!(updated["matchedCount"], 1);
        assert_eq!(updated["upsertedCount"], 0);

        let details: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri(&format!("/tutorDetails/{}", id)).to_request(),
        )
        .await;
        assert_eq!(details["_id"], id);
        assert_eq!(details["name"], "Ana María");
        assert_eq!(details["price"], 25);
        assert_eq!(details["featured"], true);

        let deleted: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::delete().uri(&format!("/myTutorials/{}", id)).to_request(),
        )
        .await;
        assert_eq!(deleted["deletedCount"], 1);

        let gone: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri(&format!("/tutorDetails/{}", id)).to_request(),
        )
        .await;
        assert!(gone.is_null());

        db.database().await.unwrap().drop().await.unwrap();
    }

    #[actix_web::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_booking_lifecycle() {
        let db = live_db();
        let app = test::init_service(App::new().app_data(db.clone()).configure(configure)).await;
        let tutor_id = ObjectId::new().to_hex();

        let check_uri = format!("/bookTutorial/ana@lingo.link&{}", tutor_id);
        let before: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri(&check_uri).to_request()).await;
        assert_eq!(before, json!({ "exists": false }));

        let created: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::post()
                .uri("/bookTutorial")
                .set_json(json!({ "userEmail": "ana@lingo.link", "tutorId": tutor_id }))
                .to_request(),
        )
        .await;
        let booking_id = created["insertedId"].as_str().unwrap().to_string();

        let after: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri(&check_uri).to_request()).await;
        assert_eq!(after, json!({ "exists": true }));

        let mine: Vec<Value> = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/bookedTutorials/ana@lingo.link").to_request(),
        )
        .await;
        assert_eq!(mine.len(), 1);

        let not_owner: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::delete()
                .uri(&format!("/delete-bookTutorial/bruno@lingo.link&{}", booking_id))
                .to_request(),
        )
        .await;
        assert_eq!(not_owner["deletedCount"], 0);

        let owner: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::delete()
                .uri(&format!("/delete-bookTutorial/ana@lingo.link&{}", booking_id))
                .to_request(),
        )
        .await;
        assert_eq!(owner["deletedCount"], 1);

        db.database().await.unwrap().drop().await.unwrap();
    }
}
