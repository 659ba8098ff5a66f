use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Write acknowledgement in the shape the original document store produced;
/// the client checks `acknowledged` rather than the HTTP status.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertResultDto {
    pub acknowledged: bool,
    pub inserted_id: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResultDto {
    pub acknowledged: bool,
    pub modified_count: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResultDto {
    pub acknowledged: bool,
    pub deleted_count: u64,
}
