use mongodb::bson::Bson;
use serde::Deserialize;

/// Body of `PUT /myTutorials`. The `new*` names are the web client's wire contract.
///
/// Values are stored as sent; listings have no enforced field types.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTutorRequest {
    pub id: String,
    #[schema(value_type = Option<Object>)]
    pub new_name: Option<Bson>,
    #[schema(value_type = Option<Object>)]
    pub new_email: Option<Bson>,
    #[schema(value_type = Option<Object>)]
    pub new_image: Option<Bson>,
    #[schema(value_type = Option<Object>)]
    pub new_price: Option<Bson>,
    #[schema(value_type = Option<Object>)]
    pub new_review: Option<Bson>,
    #[schema(value_type = Option<Object>)]
    pub new_language: Option<Bson>,
    #[schema(value_type = Option<Object>)]
    pub new_description: Option<Bson>,
}

/// Query of `GET /tutors`. Numbers are kept raw so a bad value never rejects the request.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TutorPageQuery {
    pub page: Option<String>,
    pub size: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OwnerQuery {
    pub email: Option<String>,
}
