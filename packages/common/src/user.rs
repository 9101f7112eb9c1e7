use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A platform account as listed on the stats dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlatformUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub individual_points: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
