use std::collections::BTreeSet;

use crate::reactive::{Memo, ReadSignal, Signal};
use crate::{CalendarZone, Launch};

/// Filtered view of a launch sequence, narrowed to one calendar year.
#[derive(Clone)]
pub struct YearFilter {
    selected_year: Signal<Option<String>>,
    filtered_launches: Memo<Vec<Launch>>,
    available_years: Memo<Vec<String>>,
}

impl YearFilter {
    /// Filters by year in the host local time zone.
    pub fn new(launches: impl Into<ReadSignal<Vec<Launch>>>) -> Self {
        Self::with_zone(launches, CalendarZone::Local)
    }

    pub fn with_zone(launches: impl Into<ReadSignal<Vec<Launch>>>, zone: CalendarZone) -> Self {
        let launches = launches.into();
        let selected_year = Signal::new(None::<String>);

        let filtered_launches = {
            let launches = launches.clone();
            let selected_year = selected_year.clone();
            Memo::new(
                "filtered_launches",
                [launches.dependency(), selected_year.dependency()],
                move || {
                    selected_year.with(|year| {
                        launches.with(|all| filter_by_year(all, year.as_deref(), zone))
                    })
                },
            )
        };

        let available_years = Memo::new("available_years", [launches.dependency()], move || {
            launches.with(|all| years_present(all, zone))
        });

        Self {
            selected_year,
            filtered_launches,
            available_years,
        }
    }

    /// Year selection; `None` or an empty string means no filter.
    pub fn selected_year(&self) -> &Signal<Option<String>> {
        &self.selected_year
    }

    pub fn filtered_launches(&self) -> &Memo<Vec<Launch>> {
        &self.filtered_launches
    }

    /// Distinct years present in the input, ascending, for a year selector.
    pub fn available_years(&self) -> &Memo<Vec<String>> {
        &self.available_years
    }
}

fn filter_by_year(launches: &[Launch], year: Option<&str>, zone: CalendarZone) -> Vec<Launch> {
    let year = match year {
        None | Some("") => return launches.to_vec(),
        Some(year) => year,
    };
    launches
        .iter()
        .filter(|launch| {
            launch
                .launch_date_utc
                .year_in(zone)
                .is_some_and(|launch_year| launch_year.to_string() == year)
        })
        .cloned()
        .collect()
}

fn years_present(launches: &[Launch], zone: CalendarZone) -> Vec<String> {
    launches
        .iter()
        .filter_map(|launch| launch.launch_date_utc.year_in(zone))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|year| year.to_string())
        .collect()
}
