use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::reactive::{Memo, ReadSignal, Signal};
use crate::{CalendarZone, Launch, ViewConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Sorted copy of a launch sequence, ordered by launch date.
///
/// The sort is stable: equal instants keep their input order in both
/// directions. Launches whose date does not parse always come last.
#[derive(Clone)]
pub struct DateSorter {
    sort_direction: Signal<SortDirection>,
    sorted_launches: Memo<Vec<Launch>>,
}

impl DateSorter {
    pub fn new(launches: impl Into<ReadSignal<Vec<Launch>>>) -> Self {
        Self::with_config(launches, &ViewConfig::default())
    }

    pub fn with_config(launches: impl Into<ReadSignal<Vec<Launch>>>, config: &ViewConfig) -> Self {
        let launches = launches.into();
        let sort_direction = Signal::new(config.initial_sort);
        let zone = config.zone;

        let sorted_launches = {
            let sort_direction = sort_direction.clone();
            Memo::new(
                "sorted_launches",
                [launches.dependency(), sort_direction.dependency()],
                move || {
                    let direction = sort_direction.get();
                    launches.with(|all| sort_by_date(all, direction, zone))
                },
            )
        };

        Self {
            sort_direction,
            sorted_launches,
        }
    }

    pub fn sort_direction(&self) -> &Signal<SortDirection> {
        &self.sort_direction
    }

    pub fn sorted_launches(&self) -> &Memo<Vec<Launch>> {
        &self.sorted_launches
    }

    pub fn toggle_sort_direction(&self) {
        self.sort_direction.update(|direction| *direction = direction.toggled());
    }
}

fn sort_by_date(launches: &[Launch], direction: SortDirection, zone: CalendarZone) -> Vec<Launch> {
    let mut keyed: Vec<(Option<i64>, &Launch)> = launches
        .iter()
        .map(|launch| (launch.launch_date_utc.timestamp_millis_in(zone), launch))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| compare_instants(*a, *b, direction));
    keyed.into_iter().map(|(_, launch)| launch.clone()).collect()
}

fn compare_instants(a: Option<i64>, b: Option<i64>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => direction.apply(a.cmp(&b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
