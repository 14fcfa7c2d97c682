use crate::{
    database::{MongoDB, TUTORS, USERS},
    models::{CountsSummary, LanguageCount},
    utils::{bson_to_json, AppError, AppResult},
};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use serde_json::Value;

/// Single group over the whole collection summing `review`.
pub fn review_total_pipeline() -> Vec<Document> {
    vec![doc! {
        "$group": { "_id": null, "totalReview": { "$sum": "$review" } }
    }]
}

pub fn language_count_pipeline() -> Vec<Document> {
    vec![
        doc! { "$group": { "_id": "$language", "count": { "$sum": 1 } } },
        doc! { "$project": { "language": "$_id", "count": 1, "_id": 0 } },
    ]
}

/// An empty collection yields no group at all; that reads as 0.
pub fn review_total(groups: Vec<Document>) -> Value {
    groups
        .into_iter()
        .next()
        .and_then(|mut group| group.remove("totalReview"))
        .map(bson_to_json)
        .filter(|total| !total.is_null())
        .unwrap_or_else(|| Value::from(0))
}

/// The three reads are independent and may observe concurrent writes differently.
pub async fn counts_summary(db: &MongoDB) -> AppResult<CountsSummary> {
    let users = db.collection::<Document>(USERS).await?;
    let tutors = db.collection::<Document>(TUTORS).await?;

    let user_count = async { users.estimated_document_count().await };
    let tutor_count = async { tutors.estimated_document_count().await };
    let reviews = async {
        let cursor = tutors.aggregate(review_total_pipeline()).await?;
        cursor.try_collect::<Vec<Document>>().await
    };

    let (number_of_users, number_of_tutorials, groups) = futures::try_join!(user_count, tutor_count, reviews)?;

    Ok(CountsSummary {
        number_of_users,
        number_of_tutorials,
        total: review_total(groups),
    })
}

pub async fn tutors_per_language(db: &MongoDB) -> AppResult<Vec<LanguageCount>> {
    let cursor = db
        .collection::<Document>(TUTORS)
        .await?
        .aggregate(language_count_pipeline())
        .await?;
    let groups: Vec<Document> = cursor.try_collect().await?;

    groups.into_iter().map(language_count).collect()
}

/// Reads one `{language, count}` group. Any `language` value is accepted.
pub fn language_count(mut group: Document) -> AppResult<LanguageCount> {
    let count = match group.get("count") {
        Some(Bson::Int32(n)) => i64::from(*n),
        Some(Bson::Int64(n)) => *n,
        Some(Bson::Double(n)) => *n as i64,
        other => {
            return Err(AppError::Serialization(format!("unexpected group count: {:?}", other)));
        }
    };
    let language = group.remove("language").map(bson_to_json).unwrap_or(Value::Null);

    Ok(LanguageCount { language, count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_review_total_defaults_to_zero() {
        assert_eq!(review_total(vec![]), json!(0));
        assert_eq!(review_total(vec![doc! { "_id": Bson::Null, "totalReview": Bson::Null }]), json!(0));
    }

    #[test]
    fn test_review_total_keeps_number_type() {
        assert_eq!(review_total(vec![doc! { "_id": Bson::Null, "totalReview": 42_i32 }]), json!(42));
        assert_eq!(review_total(vec![doc! { "_id": Bson::Null, "totalReview": 17.5 }]), json!(17.5));
    }

    #[test]
    fn test_pipelines() {
        let total = review_total_pipeline();
        assert_eq!(total.len(), 1);
        let group = total[0].get_document("$group").unwrap();
        assert_eq!(group.get("_id"), Some(&Bson::Null));

        let per_language = language_count_pipeline();
        assert_eq!(per_language.len(), 2);
        assert_eq!(
            per_language[1],
            doc! { "$project": { "language": "$_id", "count": 1, "_id": 0 } }
        );
    }

    #[test]
    fn test_language_count_from_group() {
        let parsed = language_count(doc! { "count": 2_i32, "language": "Spanish" }).unwrap();
        assert_eq!(parsed, LanguageCount { language: json!("Spanish"), count: 2 });

        let missing = language_count(doc! { "count": 1_i32 }).unwrap();
        assert_eq!(missing.language, Value::Null);
    }

    #[test]
    fn test_language_count_keeps_non_string_languages() {
        let groups = vec![
            doc! { "count": 2_i32, "language": "Spanish" },
            doc! { "count": 1_i32, "language": 5_i32 },
            doc! { "count": 3_i64, "language": ["French", "German"] },
            doc! { "count": 1_i32, "language": { "name": "Hindi" } },
        ];

        let counts: Vec<LanguageCount> = groups.into_iter().map(|g| language_count(g).unwrap()).collect();

        assert_eq!(counts.len(), 4);
        assert_eq!(counts.iter().map(|c| c.count).sum::<i64>(), 7);
        assert_eq!(counts[1].language, json!(5));
        assert_eq!(counts[2].language, json!(["French", "German"]));
        assert_eq!(counts[3].language, json!({ "name": "Hindi" }));
    }

    #[test]
    fn test_language_count_rejects_missing_count() {
        assert!(matches!(
            language_count(doc! { "language": "Spanish" }),
            Err(AppError::Serialization(_))
        ));
    }
}
