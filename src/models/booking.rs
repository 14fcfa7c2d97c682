use serde::Serialize;

/// Response of the booking existence check.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct BookingExists {
    pub exists: bool,
}
