use crate::{Launch, SortDirection};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LaunchListViewModel {
    pub selected_year: Option<String>,
    pub sort_direction: SortDirection,
    pub available_years: Vec<String>,
    /// Filtered, then sorted launches in display order.
    pub rows: Vec<LaunchRowView>,
    /// Size of the unfiltered list.
    pub total_count: usize,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRowView {
    pub mission_name: String,
    pub launch_date_utc: String,
    pub site_name: String,
    pub rocket_name: String,
    pub details: String,
}

impl From<&Launch> for LaunchRowView {
    fn from(launch: &Launch) -> Self {
        Self {
            mission_name: launch.mission_name.clone(),
            launch_date_utc: launch.launch_date_utc.as_str().to_owned(),
            site_name: launch.launch_site.site_name.clone(),
            rocket_name: launch.rocket.rocket_name.clone(),
            details: launch.details.clone(),
        }
    }
}
