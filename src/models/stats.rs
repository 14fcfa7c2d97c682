use serde::Serialize;
use serde_json::Value;

/// `GET /countUser&Tutorials`
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountsSummary {
    pub number_of_users: u64,
    pub number_of_tutorials: u64,
    /// Sum of every tutor's `review`; 0 when there are no tutors.
    #[schema(value_type = f64)]
    pub total: Value,
}

/// One group of `GET /category/numberOfTutors`.
///
/// `language` is whatever the listings stored (usually a string, null when
/// the field is missing), so it stays an untyped JSON value.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct LanguageCount {
    #[schema(value_type = Option<String>)]
    pub language: Value,
    pub count: i64,
}
