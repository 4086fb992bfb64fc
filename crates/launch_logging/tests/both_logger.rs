use std::fs;

use launch_logging::{initialize, launch_info, LogDestination};
use log::LevelFilter;
use tempfile::TempDir;

#[test]
fn both_destination_writes_file_and_installs_terminal() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("both.log");

    initialize(LogDestination::Both(path.clone()), LevelFilter::Info);
    launch_info!("toggled sort direction");
    log::logger().flush();

    assert_eq!(log::max_level(), LevelFilter::Info);
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("toggled sort direction"));
}
