use crate::Launch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Data source delivered a fresh launch list, replacing the current one.
    LaunchesLoaded(Vec<Launch>),
    /// Data source appended a single launch.
    LaunchAppended(Launch),
    /// Data source dropped the launch at `index` of the unfiltered list.
    LaunchRemoved { index: usize },
    /// User picked a year in the selector; `None` clears the filter.
    YearSelected(Option<String>),
    /// User clicked the sort-direction toggle.
    SortToggled,
    /// Fallback for placeholder wiring.
    NoOp,
}
