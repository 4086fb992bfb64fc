//! Launch list views: a year filter and a date sorter over a reactive
//! launch list, plus a message-driven list state for the UI layer.
mod config;
mod date_sorter;
mod launch;
mod msg;
pub mod reactive;
mod state;
mod update;
mod view_model;
mod year_filter;

pub use config::{CalendarZone, ConfigError, ViewConfig};
pub use date_sorter::{DateSorter, SortDirection};
pub use launch::{Launch, LaunchDate, LaunchSite, Rocket};
pub use msg::Msg;
pub use reactive::{Memo, ReadSignal, Signal};
pub use state::LaunchListState;
pub use update::update;
pub use view_model::{LaunchListViewModel, LaunchRowView};
pub use year_filter::YearFilter;
