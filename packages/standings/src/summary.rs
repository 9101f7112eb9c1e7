use common::PlatformUser;
use serde::Serialize;

/// Platform-wide counts shown on the stats dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSummary {
    pub total_users: usize,
    pub total_groups: u64,
    pub total_contests: u64,
    /// Users by descending individual points; ties keep input order.
    pub users_array: Vec<PlatformUser>,
}

pub fn summarize(
    users: &[PlatformUser],
    total_groups: u64,
    total_contests: u64,
) -> PlatformSummary {
    let mut users_array = users.to_vec();
    users_array.sort_by(|a, b| b.individual_points.cmp(&a.individual_points));

    PlatformSummary {
        total_users: users_array.len(),
        total_groups,
        total_contests,
        users_array,
    }
}
