use chrono::{TimeZone, Utc};
use launch_views::{CalendarZone, Launch, LaunchDate};
use pretty_assertions::assert_eq;

#[test]
fn rfc3339_dates_parse_to_exact_instants() {
    let date = LaunchDate::new("2006-03-24T22:30:00.000Z");
    let expected = Utc.with_ymd_and_hms(2006, 3, 24, 22, 30, 0).unwrap();

    assert_eq!(date.instant_in(CalendarZone::Utc), Some(expected));
    assert_eq!(date.year_in(CalendarZone::Utc), Some(2006));

    let offset = LaunchDate::new("2020-01-01T01:00:00+01:00");
    assert_eq!(
        offset.instant_in(CalendarZone::Utc),
        Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap())
    );
}

#[test]
fn date_only_forms_are_midnight_utc() {
    let zone = CalendarZone::Fixed { offset_minutes: 120 };
    assert_eq!(
        LaunchDate::new("2018-01-01").instant_in(zone),
        Some(Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap())
    );
    assert_eq!(
        LaunchDate::new("2020-05").instant_in(zone),
        Some(Utc.with_ymd_and_hms(2020, 5, 1, 0, 0, 0).unwrap())
    );
    assert_eq!(
        LaunchDate::new("2020").instant_in(zone),
        Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap())
    );
}

#[test]
fn zone_less_wall_times_are_read_in_the_calendar_zone() {
    let date = LaunchDate::new("2020-06-01T10:00");

    assert_eq!(
        date.instant_in(CalendarZone::Utc),
        Some(Utc.with_ymd_and_hms(2020, 6, 1, 10, 0, 0).unwrap())
    );
    assert_eq!(
        date.instant_in(CalendarZone::Fixed { offset_minutes: 60 }),
        Some(Utc.with_ymd_and_hms(2020, 6, 1, 9, 0, 0).unwrap())
    );
    assert_eq!(
        LaunchDate::new("2020-06-01T10:00:30.250")
            .timestamp_millis_in(CalendarZone::Utc),
        Some(
            Utc.with_ymd_and_hms(2020, 6, 1, 10, 0, 30)
                .unwrap()
                .timestamp_millis()
                + 250
        )
    );
}

#[test]
fn malformed_dates_have_no_instant() {
    for raw in ["", "not a date", "2020-13-01", "31/12/2020", "20x0"] {
        let date = LaunchDate::new(raw);
        assert_eq!(date.instant_in(CalendarZone::Utc), None, "{raw:?}");
        assert_eq!(date.year_in(CalendarZone::Utc), None, "{raw:?}");
    }
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(
        LaunchDate::new("  2020-05-05 ").year_in(CalendarZone::Utc),
        Some(2020)
    );
}

#[test]
fn chrono_instants_convert_to_rfc3339_text() {
    let instant = Utc.with_ymd_and_hms(2020, 5, 5, 0, 0, 0).unwrap();
    let date = LaunchDate::from(instant);

    assert_eq!(date.as_str(), "2020-05-05T00:00:00.000Z");
    assert_eq!(date.instant_in(CalendarZone::Local), Some(instant));
}

#[test]
fn launch_reads_from_launch_data_json() {
    let raw = r#"{
        "mission_name": "FalconSat",
        "launch_date_utc": "2006-03-24T22:30:00.000Z",
        "launch_site": { "site_name": "Kwajalein Atoll" },
        "rocket": { "rocket_name": "Falcon 1" },
        "details": null
    }"#;

    let launch: Launch = serde_json::from_str(raw).unwrap();

    assert_eq!(launch.mission_name, "FalconSat");
    assert_eq!(launch.launch_date_utc.as_str(), "2006-03-24T22:30:00.000Z");
    assert_eq!(launch.launch_site.site_name, "Kwajalein Atoll");
    assert_eq!(launch.rocket.rocket_name, "Falcon 1");
    assert_eq!(launch.details, "");
}
