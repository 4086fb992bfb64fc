use crate::reactive::Signal;
use crate::view_model::{LaunchListViewModel, LaunchRowView};
use crate::{DateSorter, Launch, ViewConfig, YearFilter};

/// List view state: the launch list, a year filter over it, and a date
/// sorter over the filter's output.
///
/// Clones share the underlying cells.
#[derive(Clone)]
pub struct LaunchListState {
    launches: Signal<Vec<Launch>>,
    filter: YearFilter,
    sorter: DateSorter,
    dirty: bool,
}

impl LaunchListState {
    pub fn new() -> Self {
        Self::with_config(&ViewConfig::default())
    }

    pub fn with_config(config: &ViewConfig) -> Self {
        let launches = Signal::new(Vec::new());
        let filter = YearFilter::with_zone(&launches, config.zone);
        let sorter = DateSorter::with_config(filter.filtered_launches(), config);
        Self {
            launches,
            filter,
            sorter,
            dirty: false,
        }
    }

    pub fn launches(&self) -> &Signal<Vec<Launch>> {
        &self.launches
    }

    pub fn filter(&self) -> &YearFilter {
        &self.filter
    }

    pub fn sorter(&self) -> &DateSorter {
        &self.sorter
    }

    pub fn view(&self) -> LaunchListViewModel {
        LaunchListViewModel {
            selected_year: self.filter.selected_year().get(),
            sort_direction: self.sorter.sort_direction().get(),
            available_years: self.filter.available_years().get(),
            rows: self
                .sorter
                .sorted_launches()
                .with(|sorted| sorted.iter().map(LaunchRowView::from).collect()),
            total_count: self.launches.with(Vec::len),
            dirty: self.dirty,
        }
    }

    /// Returns whether the view changed since the last call, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl Default for LaunchListState {
    fn default() -> Self {
        Self::new()
    }
}
