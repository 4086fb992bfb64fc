use launch_logging::{launch_debug, launch_warn};

use crate::{LaunchListState, Msg};

/// Applies a message to the list state's shared cells.
///
/// Clones of `state` taken before the call observe the change.
pub fn update(mut state: LaunchListState, msg: Msg) -> LaunchListState {
    match msg {
        Msg::LaunchesLoaded(launches) => {
            launch_debug!("Loaded {} launches", launches.len());
            state.launches().set(launches);
            state.mark_dirty();
        }
        Msg::LaunchAppended(launch) => {
            launch_debug!("Appended launch {:?}", launch.mission_name);
            state.launches().update(|launches| launches.push(launch));
            state.mark_dirty();
        }
        Msg::LaunchRemoved { index } => {
            let len = state.launches().with(Vec::len);
            if index < len {
                state.launches().update(|launches| {
                    launches.remove(index);
                });
                state.mark_dirty();
            } else {
                launch_warn!("Ignoring removal of launch {index}; list holds {len}");
            }
        }
        Msg::YearSelected(year) => {
            let unchanged = state
                .filter()
                .selected_year()
                .with(|current| *current == year);
            if unchanged {
                launch_debug!("Year selection unchanged: {:?}", year);
            } else {
                launch_debug!("Year selected: {:?}", year);
                state.filter().selected_year().set(year);
                state.mark_dirty();
            }
        }
        Msg::SortToggled => {
            state.sorter().toggle_sort_direction();
            launch_debug!(
                "Sort direction now {:?}",
                state.sorter().sort_direction().get()
            );
            state.mark_dirty();
        }
        Msg::NoOp => {}
    }

    state
}
