use launch_logging::{initialize, launch_warn, LogDestination};
use log::LevelFilter;

#[test]
fn terminal_destination_installs_logger_at_level() {
    initialize(LogDestination::Terminal, LevelFilter::Warn);
    launch_warn!("terminal logger ready");

    assert_eq!(log::max_level(), LevelFilter::Warn);
}
